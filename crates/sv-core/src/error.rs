//! Error types for the settlement core

use thiserror::Error;

/// Which ledger pool an invariant check ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerPool {
    /// The player's real-money balance
    Balance,
    /// A house bank pool (main or bonus)
    Bank,
}

impl std::fmt::Display for LedgerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerPool::Balance => write!(f, "balance"),
            LedgerPool::Bank => write!(f, "bank"),
        }
    }
}

/// Core error type.
///
/// `InvariantViolation` is always fatal: the round that raised it produced no
/// monetary or state change and must not be committed by the caller.
#[derive(Error, Debug, Clone)]
pub enum SettleError {
    #[error(
        "{pool} invariant: delta {delta} against current {current} ({state}) would leave {would_be}"
    )]
    InvariantViolation {
        pool: LedgerPool,
        /// Requested signed delta, in display units
        delta: f64,
        /// Pool value before the operation, in display units
        current: f64,
        /// Normalized bank state label ("" for main, "bonus" for bonus)
        state: String,
        /// The value the operation would have produced
        would_be: f64,
    },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias
pub type SettleResult<T> = Result<T, SettleError>;
