//! Player snapshot entity

use serde::{Deserialize, Serialize};

/// Player account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Active,
    Banned,
    Suspended,
}

/// Per-round player snapshot.
///
/// Mutated only by the bank ledger. `balance` is real money in ledger units;
/// `bonus_credit` and `bonus_reserve` are the two layered promotional pools
/// consumed before real balance on bets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub shop_id: i64,
    #[serde(default)]
    pub balance: f64,
    /// Promotional funds consumed first in the bank-split calculation
    #[serde(default, alias = "count_balance")]
    pub bonus_credit: f64,
    /// Secondary promotional pool, drawn when `bonus_credit` is exhausted
    #[serde(default, alias = "address")]
    pub bonus_reserve: f64,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub is_blocked: bool,
}

impl Player {
    /// Canonical constructor from raw snapshot input.
    pub fn from_snapshot(raw: serde_json::Value) -> crate::SettleResult<Self> {
        serde_json::from_value(raw)
            .map_err(|e| crate::SettleError::InvalidSnapshot(format!("player: {e}")))
    }

    pub fn is_banned(&self) -> bool {
        self.status == PlayerStatus::Banned
    }

    /// Can this player take part in a round at all?
    pub fn is_playable(&self) -> bool {
        !self.is_blocked && !self.is_banned()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            id: 0,
            shop_id: 0,
            balance: 0.0,
            bonus_credit: 0.0,
            bonus_reserve: 0.0,
            status: PlayerStatus::Active,
            is_blocked: false,
        }
    }
}
