//! Declarative positioning strategy configuration

use serde::{Deserialize, Serialize};

use crate::store::ReelStripStore;

/// How stop positions are generated for a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PositioningStrategy {
    /// Resolve a concrete strategy from the configuration at spin time
    #[default]
    AutoDetect,
    /// Uniform random stop per reel
    Random,
    /// Steer the scatter symbol into the window on bonus spins
    ScatterBased,
    /// Deterministic stops for a configured subset of reels
    FixedReels,
    /// First matching rule supplies the stop
    Conditional,
}

/// Predicate side of a conditional positioning rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePredicate {
    Any,
    Reel(usize),
    ReelIn(Vec<usize>),
    StripLenAtLeast(usize),
}

impl RulePredicate {
    pub fn matches(&self, reel: usize, strip_len: usize) -> bool {
        match self {
            RulePredicate::Any => true,
            RulePredicate::Reel(r) => *r == reel,
            RulePredicate::ReelIn(reels) => reels.contains(&reel),
            RulePredicate::StripLenAtLeast(len) => strip_len >= *len,
        }
    }
}

/// Action side of a conditional positioning rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopAction {
    /// A fixed stop index, reduced into the valid range
    At(usize),
    /// `(reel * factor) mod (len - 2)`
    Scaled { factor: usize },
}

impl StopAction {
    pub fn stop(&self, reel: usize, strip_len: usize) -> usize {
        let bound = strip_len.saturating_sub(2).max(1);
        match self {
            StopAction::At(index) => index % bound,
            StopAction::Scaled { factor } => (reel * factor) % bound,
        }
    }
}

/// One predicate+action pair; rules are evaluated in order and the first
/// match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositioningRule {
    pub when: RulePredicate,
    pub stop: StopAction,
}

/// Per-reel override for scatter placement eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPlacementRule {
    pub reel: usize,
    pub place: bool,
}

/// Declarative strategy descriptor consumed by the positioning engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelConfig {
    pub strategy: PositioningStrategy,
    /// Symbol id whose placement can trigger bonus features
    pub scatter_symbol: String,
    /// Visible symbols per reel
    pub output_window: usize,
    /// Reels with deterministic stops under `FixedReels`
    pub fixed_reels: Vec<usize>,
    /// Ordered conditional positioning rules
    pub rules: Vec<PositioningRule>,
    /// Per-reel scatter placement overrides; empty means all reels eligible
    pub scatter_rules: Vec<ScatterPlacementRule>,
    /// Master switch for scatter placement
    pub scatter_positioning: bool,
    /// Bonus subtypes observed in the strip data
    pub special_bonus_types: Vec<String>,
}

pub const DEFAULT_OUTPUT_WINDOW: usize = 3;

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            strategy: PositioningStrategy::AutoDetect,
            scatter_symbol: "0".into(),
            output_window: DEFAULT_OUTPUT_WINDOW,
            fixed_reels: Vec::new(),
            rules: Vec::new(),
            scatter_rules: Vec::new(),
            scatter_positioning: true,
            special_bonus_types: Vec::new(),
        }
    }
}

impl ReelConfig {
    /// Derive a default configuration by introspecting the strip store:
    /// scatter symbol from the frequency heuristic, bonus subtypes from the
    /// strip names, strategy left on auto-detect.
    pub fn detect(store: &ReelStripStore) -> Self {
        Self {
            scatter_symbol: store.detect_scatter_symbol(),
            special_bonus_types: store.special_bonus_types(),
            ..Default::default()
        }
    }

    pub fn has_special_bonus_types(&self) -> bool {
        !self.special_bonus_types.is_empty()
    }

    /// Resolve `AutoDetect` into a concrete strategy.
    pub fn resolve_strategy(&self) -> PositioningStrategy {
        if self.strategy != PositioningStrategy::AutoDetect {
            return self.strategy;
        }
        if self.has_special_bonus_types() {
            PositioningStrategy::ScatterBased
        } else if !self.fixed_reels.is_empty() {
            PositioningStrategy::FixedReels
        } else if !self.rules.is_empty() {
            PositioningStrategy::Conditional
        } else {
            PositioningStrategy::Random
        }
    }

    /// Should the engine try to place the scatter on this reel?
    ///
    /// Default under `ScatterBased` is every reel, unless an explicit
    /// placement rule says otherwise; under `FixedReels` only the fixed set
    /// is eligible.
    pub fn should_place_scatter(&self, reel: usize) -> bool {
        if !self.scatter_positioning {
            return false;
        }
        if let Some(rule) = self.scatter_rules.iter().find(|r| r.reel == reel) {
            return rule.place;
        }
        match self.resolve_strategy() {
            PositioningStrategy::ScatterBased => self.scatter_rules.is_empty(),
            PositioningStrategy::FixedReels => self.fixed_reels.contains(&reel),
            _ => false,
        }
    }
}
