//! Jackpot pool entity

use serde::{Deserialize, Serialize};

/// A single progressive jackpot pool.
///
/// Pools are held in an ordered list indexed by slot; accrual, payout and
/// refill walk that list in index order every bet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jackpot {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub shop_id: i64,
    /// Accrued pool value, ledger units
    #[serde(default)]
    pub balance: f64,
    /// Contribution share of each bet, in percent
    #[serde(default = "default_percent")]
    pub percent: f64,
    /// Configured payout amount; zero disables the payout trigger
    #[serde(default)]
    pub pay_sum: f64,
    /// Refill floor target
    #[serde(default = "default_start_balance")]
    pub start_balance: f64,
    /// When set, only this player may be paid from the pool
    #[serde(default, alias = "user_id")]
    pub owner_user_id: Option<i64>,
}

fn default_percent() -> f64 {
    1.0
}

fn default_start_balance() -> f64 {
    1000.0
}

impl Jackpot {
    /// Canonical constructor from raw snapshot input.
    pub fn from_snapshot(raw: serde_json::Value) -> crate::SettleResult<Self> {
        serde_json::from_value(raw)
            .map_err(|e| crate::SettleError::InvalidSnapshot(format!("jackpot: {e}")))
    }

    /// Refill trigger threshold, derived from the refill floor.
    pub fn min_balance(&self) -> f64 {
        self.start_balance * 0.5
    }

    /// May `player_id` be paid from this pool?
    pub fn payable_to(&self, player_id: i64) -> bool {
        match self.owner_user_id {
            Some(owner) => owner == player_id,
            None => true,
        }
    }
}

impl Default for Jackpot {
    fn default() -> Self {
        Self {
            id: 0,
            shop_id: 0,
            balance: 0.0,
            percent: default_percent(),
            pay_sum: 0.0,
            start_balance: default_start_balance(),
            owner_user_id: None,
        }
    }
}
