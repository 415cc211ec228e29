//! The per-round settlement aggregate

use rand::prelude::*;

use sv_core::{SettleResult, SlotEvent};
use sv_ledger::BankLedger;
use sv_reels::{ReelOutcome, ReelPositioningEngine, ReelStripStore};

use crate::kv::GameDataStore;
use crate::request::{RoundDiff, RoundLog, RoundSnapshot, SpinRequest};

/// Per-round aggregate exposing the bank ledger and the reel positioning
/// engine to game-specific win logic.
///
/// Built from a fully-materialized [`RoundSnapshot`]; torn down into a
/// [`RoundDiff`]. Pure in between: no I/O, no locks, no cross-round state.
pub struct SettlementContext {
    ledger: BankLedger,
    reels: ReelPositioningEngine,
    game_data: GameDataStore,
    game_data_static: GameDataStore,
    paytable: Vec<Vec<f64>>,
    log_report: Vec<RoundLog>,
    last_outcome: Option<ReelOutcome>,
    rng: StdRng,
}

impl SettlementContext {
    /// Canonical constructor from a round snapshot.
    pub fn from_snapshot(snapshot: RoundSnapshot) -> SettleResult<Self> {
        let mut game = snapshot.game;
        if game.denomination <= 0.0 {
            game.denomination = 1.0;
        }
        let store = ReelStripStore::from_named(&snapshot.reel_strips);
        if store.base_reel_count() == 0 {
            log::warn!(
                "snapshot for game {} carries no base reel strips; spins will produce empty outcomes",
                game.id
            );
        }
        Ok(Self {
            ledger: BankLedger::new(snapshot.player, snapshot.shop, game, snapshot.jackpots),
            reels: ReelPositioningEngine::new(store),
            game_data: snapshot.game_data,
            game_data_static: snapshot.game_data_static,
            paytable: snapshot.paytable,
            log_report: Vec::new(),
            last_outcome: None,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Seed both RNGs for reproducible rounds.
    pub fn seed(&mut self, seed: u64) {
        self.reels.seed(seed);
        self.rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    }

    /// May this snapshot play a round at all?
    pub fn is_active(&self) -> bool {
        self.ledger.game().view
            && !self.ledger.shop().is_blocked
            && self.ledger.player().is_playable()
    }

    // ------------------------------------------------------------------
    // Engines
    // ------------------------------------------------------------------

    pub fn ledger(&mut self) -> &mut BankLedger {
        &mut self.ledger
    }

    pub fn ledger_ref(&self) -> &BankLedger {
        &self.ledger
    }

    pub fn reels(&mut self) -> &mut ReelPositioningEngine {
        &mut self.reels
    }

    /// Run the positioning engine for this request and keep the outcome for
    /// the round diff.
    pub fn spin(&mut self, request: &SpinRequest) -> ReelOutcome {
        let outcome = self.reels.spin(
            request.win_type,
            request.slot_event,
            request.bonus_subtype.as_deref(),
        );
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    // ------------------------------------------------------------------
    // Key-value stores
    // ------------------------------------------------------------------

    pub fn set_game_data(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.game_data.set(key, value);
    }

    pub fn get_game_data(&self, key: &str) -> serde_json::Value {
        self.game_data.get(key)
    }

    pub fn has_game_data(&self, key: &str) -> bool {
        self.game_data.has(key)
    }

    pub fn set_game_data_static(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.game_data_static.set(key, value);
    }

    pub fn get_game_data_static(&self, key: &str) -> serde_json::Value {
        self.game_data_static.get(key)
    }

    pub fn has_game_data_static(&self, key: &str) -> bool {
        self.game_data_static.has(key)
    }

    // ------------------------------------------------------------------
    // Gamble and RTP bookkeeping helpers
    // ------------------------------------------------------------------

    /// Draw the gamble-feature outcome bound: uniform in
    /// `1..=game.reserve`.
    pub fn gamble_settings(&mut self) -> u64 {
        let bound = (self.ledger.game().reserve.max(1.0)) as u64;
        self.rng.random_range(1..=bound)
    }

    /// Average of each paytable row's first positive pay value.
    pub fn bonus_win_average(&self) -> f64 {
        let mut count = 0u32;
        let mut total = 0.0;
        for row in &self.paytable {
            if let Some(first) = row.iter().find(|&&pay| pay > 0.0) {
                count += 1;
                total += first;
            }
        }
        if count == 0 {
            return 0.0;
        }
        total / count as f64
    }

    /// A random positive pay rate from the paytable, zeroed when paying it
    /// on `all_bet` would push lifetime payout past lifetime turnover.
    pub fn random_pay(&mut self, all_bet: f64) -> f64 {
        let rates: Vec<f64> = self
            .paytable
            .iter()
            .flatten()
            .copied()
            .filter(|&pay| pay > 0.0)
            .collect();
        if rates.is_empty() {
            return 0.0;
        }
        let pick = rates[self.rng.random_range(0..rates.len())];
        let game = self.ledger.game();
        if game.stat_in < game.stat_out + pick * all_bet {
            return 0.0;
        }
        pick
    }

    // ------------------------------------------------------------------
    // Round log and diff
    // ------------------------------------------------------------------

    pub fn save_log_report(
        &mut self,
        response: serde_json::Value,
        all_bet: f64,
        lines: u32,
        report_win: f64,
        slot_event: SlotEvent,
    ) {
        self.log_report.push(RoundLog {
            response,
            all_bet,
            lines,
            report_win,
            slot_event,
        });
    }

    pub fn log_report(&self) -> &[RoundLog] {
        &self.log_report
    }

    /// Materialize the round's mutated state.
    pub fn into_diff(self) -> RoundDiff {
        let balance = self.ledger.balance();
        let (player, _shop, game, jackpots, split, jack_pay) = self.ledger.into_parts();
        RoundDiff {
            balance,
            bonus_credit: player.bonus_credit,
            bonus_reserve: player.bonus_reserve,
            main_bank: game.main_bank,
            bonus_bank: game.bonus_bank,
            jackpots,
            jack_pay,
            split,
            outcome: self.last_outcome,
            game_data: self.game_data,
            game_data_static: self.game_data_static,
            log: self.log_report,
        }
    }
}
