//! Game configuration entity

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::round::BankState;

/// RTP line-percent table: line name → RTP range label → percent.
pub type LinesPercentTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Which lines-percent table a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinesPercentKind {
    Spin,
    SpinBonus,
    Bonus,
    BonusBonus,
}

/// Per-round game snapshot.
///
/// Carries the two independent house bank pools (normal vs bonus play), the
/// denomination converting display units to ledger units, lifetime turnover
/// counters and the stored RTP configuration. The RTP tables are storage
/// only; line selection is game-specific logic outside this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub shop_id: i64,
    #[serde(default = "default_denomination")]
    pub denomination: f64,
    /// House pool for normal play
    #[serde(default)]
    pub main_bank: f64,
    /// House pool for bonus/freespin/respin play
    #[serde(default)]
    pub bonus_bank: f64,
    /// Lifetime amount wagered into this game
    #[serde(default)]
    pub stat_in: f64,
    /// Lifetime amount paid out of this game
    #[serde(default)]
    pub stat_out: f64,
    /// Lifetime bet count
    #[serde(default)]
    pub bids: u64,
    /// Gamble-feature payout bound
    #[serde(default = "default_reserve", alias = "rezerv")]
    pub reserve: f64,
    /// Game enabled flag
    #[serde(default = "default_view")]
    pub view: bool,
    /// Available bet levels, display units
    #[serde(default)]
    pub bet_levels: Vec<f64>,
    /// Stored RTP line-percent tables, keyed by kind
    #[serde(default)]
    pub lines_percent: BTreeMap<String, LinesPercentTable>,
}

fn default_denomination() -> f64 {
    1.0
}

fn default_reserve() -> f64 {
    100.0
}

fn default_view() -> bool {
    true
}

impl GameConfig {
    /// Canonical constructor from raw snapshot input.
    pub fn from_snapshot(raw: serde_json::Value) -> crate::SettleResult<Self> {
        serde_json::from_value(raw)
            .map_err(|e| crate::SettleError::InvalidSnapshot(format!("game: {e}")))
    }

    /// Current value of the bank pool for `state`, ledger units.
    pub fn bank(&self, state: BankState) -> f64 {
        match state {
            BankState::Main => self.main_bank,
            BankState::Bonus => self.bonus_bank,
        }
    }

    /// Apply a signed movement to the bank pool for `state`.
    pub fn add_to_bank(&mut self, state: BankState, amount: f64) {
        match state {
            BankState::Main => self.main_bank += amount,
            BankState::Bonus => self.bonus_bank += amount,
        }
    }

    /// Record one settled bet in the lifetime counters.
    pub fn record_turnover(&mut self, bet_in: f64, win_out: f64) {
        self.stat_in += bet_in;
        self.stat_out += win_out;
        self.bids += 1;
    }

    /// Stored lines-percent table for `kind`, falling back to the standard
    /// layout when the game carries none.
    pub fn lines_percent_config(&self, kind: LinesPercentKind) -> LinesPercentTable {
        let key = match kind {
            LinesPercentKind::Spin => "spin",
            LinesPercentKind::SpinBonus => "spin_bonus",
            LinesPercentKind::Bonus => "bonus",
            LinesPercentKind::BonusBonus => "bonus_bonus",
        };
        if let Some(table) = self.lines_percent.get(key) {
            return table.clone();
        }
        default_lines_percent()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            shop_id: 0,
            denomination: default_denomination(),
            main_bank: 0.0,
            bonus_bank: 0.0,
            stat_in: 0.0,
            stat_out: 0.0,
            bids: 0,
            reserve: default_reserve(),
            view: default_view(),
            bet_levels: vec![0.1, 0.2, 0.5, 1.0, 2.0, 5.0],
            lines_percent: BTreeMap::new(),
        }
    }
}

/// Standard lines-percent layout used when a game has no stored tables.
fn default_lines_percent() -> LinesPercentTable {
    let rows: [(&str, [f64; 3]); 6] = [
        ("line1", [15.0, 9.0, 7.0]),
        ("line3", [15.0, 9.0, 7.0]),
        ("line5", [12.0, 8.0, 6.0]),
        ("line7", [12.0, 8.0, 6.0]),
        ("line9", [10.0, 7.0, 5.0]),
        ("line10", [10.0, 7.0, 5.0]),
    ];
    let ranges = ["74_80", "82_88", "90_96"];
    rows.iter()
        .map(|(line, values)| {
            let per_range = ranges
                .iter()
                .zip(values.iter())
                .map(|(range, v)| (range.to_string(), *v))
                .collect();
            (line.to_string(), per_range)
        })
        .collect()
}
