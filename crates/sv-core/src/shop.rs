//! Shop snapshot entity

use serde::{Deserialize, Serialize};

/// Revenue-share percentages at or below this value carry no bonus-wallet
/// contribution.
pub const BONUS_WALLET_POINTS: f64 = 10.0;

/// Per-round shop snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    #[serde(default)]
    pub id: i64,
    /// Fraction of each bet retained by the house, in percent
    #[serde(default = "default_percent")]
    pub percent: f64,
    #[serde(default)]
    pub max_win: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub is_blocked: bool,
}

fn default_percent() -> f64 {
    90.0
}

fn default_currency() -> String {
    "USD".into()
}

impl Shop {
    /// Canonical constructor from raw snapshot input.
    pub fn from_snapshot(raw: serde_json::Value) -> crate::SettleResult<Self> {
        serde_json::from_value(raw)
            .map_err(|e| crate::SettleError::InvalidSnapshot(format!("shop: {e}")))
    }

    /// Bonus-wallet funding points for this shop: a fixed 10-point slice,
    /// zeroed when the shop percent itself is 10 or lower.
    pub fn bonus_wallet_points(&self) -> f64 {
        if self.percent <= BONUS_WALLET_POINTS {
            0.0
        } else {
            BONUS_WALLET_POINTS
        }
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            id: 0,
            percent: default_percent(),
            max_win: 0.0,
            currency: default_currency(),
            is_blocked: false,
        }
    }
}
