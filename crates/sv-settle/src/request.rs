//! Wire types for one settlement round

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sv_core::{GameConfig, Jackpot, Player, Shop, SlotEvent, WinType};
use sv_ledger::RevenueSplit;
use sv_reels::ReelOutcome;

use crate::kv::GameDataStore;

/// Spin parameters for one round.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpinRequest {
    #[serde(default)]
    pub win_type: WinType,
    #[serde(default)]
    pub slot_event: SlotEvent,
    #[serde(default)]
    pub bonus_subtype: Option<String>,
    /// Bet per line, display units
    #[serde(default)]
    pub bet_level: f64,
    #[serde(default)]
    pub lines: u32,
    /// Overrides the game's denomination for this round when set
    #[serde(default)]
    pub denomination: Option<f64>,
}

impl SpinRequest {
    /// Total bet for the round, display units.
    pub fn all_bet(&self) -> f64 {
        self.bet_level * self.lines as f64
    }
}

/// Fully-materialized input for one round, as delivered by the transport
/// layer. Rows are assumed loaded and locked by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoundSnapshot {
    pub player: Player,
    pub shop: Shop,
    pub game: GameConfig,
    #[serde(default)]
    pub jackpots: Vec<Jackpot>,
    /// Per-player ephemeral store
    #[serde(default)]
    pub game_data: GameDataStore,
    /// Per-game static store
    #[serde(default)]
    pub game_data_static: GameDataStore,
    /// Wire-named reel strips, base and bonus sets together
    #[serde(default)]
    pub reel_strips: BTreeMap<String, Vec<String>>,
    /// Paytable rows (symbol → pay values); storage for the aggregate
    /// helpers, win evaluation itself lives outside this core
    #[serde(default)]
    pub paytable: Vec<Vec<f64>>,
}

/// One structured log entry per settlement step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundLog {
    pub response: serde_json::Value,
    pub all_bet: f64,
    pub lines: u32,
    pub report_win: f64,
    pub slot_event: SlotEvent,
}

/// Fully-materialized output of one round, ready to be serialized back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundDiff {
    /// Player balance, display units
    pub balance: f64,
    /// Player promotional pools after the round, ledger units
    pub bonus_credit: f64,
    pub bonus_reserve: f64,
    pub main_bank: f64,
    pub bonus_bank: f64,
    pub jackpots: Vec<Jackpot>,
    /// Jackpot amount paid this round, if a pool fired
    pub jack_pay: Option<f64>,
    pub split: RevenueSplit,
    /// Reel outcome of the last spin in the round
    pub outcome: Option<ReelOutcome>,
    pub game_data: GameDataStore,
    pub game_data_static: GameDataStore,
    pub log: Vec<RoundLog>,
}
