//! Stop-position generation

use std::collections::BTreeMap;

use rand::prelude::*;

use sv_core::{SlotEvent, WinType};

use crate::config::{PositioningStrategy, ReelConfig};
use crate::store::{NamedStrip, ReelStripStore};

/// The positioned outcome of one spin: per-reel symbol windows plus the
/// reported stop positions, in reel-index order. Ready for downstream win
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
pub struct ReelOutcome {
    /// Reel index → visible symbol window
    pub windows: BTreeMap<usize, Vec<String>>,
    /// Chosen stop index per active reel
    pub positions: Vec<usize>,
}

/// Consumes a [`ReelStripStore`] and a [`ReelConfig`] to produce a stop index
/// and output window per active reel for each spin request.
pub struct ReelPositioningEngine {
    store: ReelStripStore,
    config: ReelConfig,
    rng: StdRng,
}

impl ReelPositioningEngine {
    /// Build with a configuration derived from the strip data.
    pub fn new(store: ReelStripStore) -> Self {
        let config = ReelConfig::detect(&store);
        Self::with_config(store, config)
    }

    pub fn with_config(store: ReelStripStore, config: ReelConfig) -> Self {
        Self {
            store,
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the RNG for reproducible outcomes.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ReelConfig {
        &mut self.config
    }

    pub fn store(&self) -> &ReelStripStore {
        &self.store
    }

    /// Generate the reel outcome for one spin.
    ///
    /// Selects the active strip set (bonus strips on freespins, narrowed to a
    /// subtype when one is requested and present), resolves the configured
    /// strategy, draws a stop per reel and reads the circular output windows.
    pub fn spin(
        &mut self,
        win_type: WinType,
        event: SlotEvent,
        bonus_subtype: Option<&str>,
    ) -> ReelOutcome {
        let strategy = self.config.resolve_strategy();
        let window = self.config.output_window;

        // Cloned out of the store so the RNG draws below can borrow self.
        let active: Vec<NamedStrip> = self
            .select_active(event, bonus_subtype)
            .into_iter()
            .cloned()
            .collect();

        let mut outcome = ReelOutcome::default();
        for named in &active {
            if named.strip.len() < window {
                log::warn!(
                    "reel {} strip '{}' has {} symbols, below the {}-symbol window; skipping",
                    named.reel,
                    named.name,
                    named.strip.len(),
                    window
                );
                continue;
            }
            let stop = self.stop_for(strategy, win_type, named);
            outcome
                .windows
                .insert(named.reel, named.strip.window(stop, window));
            outcome.positions.push(stop);
        }
        outcome
    }

    /// Active strip set for this spin: bonus strips on freespins when any
    /// exist (preferring a matching subtype), the base set otherwise.
    fn select_active(&self, event: SlotEvent, bonus_subtype: Option<&str>) -> Vec<&NamedStrip> {
        if event == SlotEvent::FreeSpin && self.store.has_bonus() {
            if let Some(subtype) = bonus_subtype {
                let typed = self.store.bonus_with_subtype(subtype);
                if !typed.is_empty() {
                    return typed;
                }
            }
            return self.store.bonus().iter().collect();
        }
        self.store.base().iter().collect()
    }

    fn stop_for(&mut self, strategy: PositioningStrategy, win_type: WinType, named: &NamedStrip) -> usize {
        match strategy {
            PositioningStrategy::ScatterBased => self.scatter_stop(win_type, named),
            PositioningStrategy::FixedReels => self.fixed_stop(named),
            PositioningStrategy::Conditional => self.conditional_stop(named),
            PositioningStrategy::Random | PositioningStrategy::AutoDetect => {
                self.random_stop(named.strip.len())
            }
        }
    }

    /// Uniform draw over the valid stop range.
    fn random_stop(&mut self, strip_len: usize) -> usize {
        let bound = strip_len.saturating_sub(2).max(1);
        self.rng.random_range(0..bound)
    }

    /// Scatter placement only applies to bonus outcomes; everything else
    /// falls through to a uniform draw.
    fn scatter_stop(&mut self, win_type: WinType, named: &NamedStrip) -> usize {
        if win_type != WinType::Bonus {
            return self.random_stop(named.strip.len());
        }
        if self.config.should_place_scatter(named.reel) {
            let stops = named.strip.stops_showing(&self.config.scatter_symbol);
            if !stops.is_empty() {
                let pick = self.rng.random_range(0..stops.len());
                return stops[pick];
            }
        }
        self.random_stop(named.strip.len())
    }

    fn fixed_stop(&mut self, named: &NamedStrip) -> usize {
        if self.config.fixed_reels.contains(&named.reel) {
            let bound = named.strip.len().saturating_sub(2).max(1);
            return (named.reel * 10) % bound;
        }
        self.random_stop(named.strip.len())
    }

    fn conditional_stop(&mut self, named: &NamedStrip) -> usize {
        for rule in &self.config.rules {
            if rule.when.matches(named.reel, named.strip.len()) {
                return rule.stop.stop(named.reel, named.strip.len());
            }
        }
        self.random_stop(named.strip.len())
    }
}
