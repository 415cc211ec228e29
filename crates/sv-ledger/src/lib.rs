//! # sv-ledger — Money movement for one settlement round
//!
//! All balance, house-bank and jackpot accounting for a single round, with
//! two hard guarantees:
//!
//! - no operation ever leaves the player balance or a bank pool negative
//!   (violations return a fatal [`sv_core::SettleError::InvariantViolation`]
//!   and mutate nothing), and
//! - bet proceeds are split deterministically among house bank, bonus-wallet
//!   funding and jackpot pools.
//!
//! The ledger owns its snapshot for the duration of the round and performs
//! no I/O; persisting the mutated snapshot is the caller's job.

pub mod ledger;
pub mod split;

pub use ledger::*;
pub use split::*;
