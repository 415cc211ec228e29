//! Per-round revenue split bookkeeping

use serde::{Deserialize, Serialize};

/// Where the proceeds of one bet went, in ledger units.
///
/// Together with the operator profit these sum to the pre-split gross bet
/// (to within the money formatting rule).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSplit {
    /// House share recorded for the round's bank
    pub to_game_banks: f64,
    /// Bonus-wallet funding slice credited to the bonus bank
    pub to_bonus_wallet: f64,
    /// Accumulated jackpot contribution shares
    pub to_jackpot_banks: f64,
    /// Operator profit remaining after bank and jackpot shares
    pub bet_profit: f64,
}

/// Transient reconciliation values for a bet that straddles promotional and
/// real funds between the balance debit and the bank credit of the same
/// round. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BetRemainder {
    /// Uncovered real-money remainder when no promotional credit existed
    pub bet_remains: Option<f64>,
    /// Uncovered remainder after partial promotional-credit coverage
    pub bet_remains0: Option<f64>,
}

impl BetRemainder {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
