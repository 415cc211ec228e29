//! Named strip storage and introspection

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::strip::ReelStrip;

const BASE_PREFIX: &str = "reelStrip";
const BONUS_PREFIX: &str = "reelStripBonus";

/// A strip together with its parsed wire name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedStrip {
    /// Wire name, e.g. "reelStrip3" or "reelStripBonus2_expanding"
    pub name: String,
    /// Reel index parsed from the digits in the name
    pub reel: usize,
    /// Bonus subtype parsed from the name suffix, bonus strips only
    pub subtype: Option<String>,
    pub strip: ReelStrip,
}

/// Holds the named symbol sequences for the base and bonus reel sets of one
/// game, partitioned by name prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReelStripStore {
    base: Vec<NamedStrip>,
    bonus: Vec<NamedStrip>,
}

impl ReelStripStore {
    /// Build a store from wire-named strips. Names outside the
    /// `reelStrip*` namespace and empty sequences are dropped.
    pub fn from_named(strips: &BTreeMap<String, Vec<String>>) -> Self {
        let mut base = Vec::new();
        let mut bonus = Vec::new();
        for (name, symbols) in strips {
            if symbols.is_empty() {
                continue;
            }
            let Some(parsed) = parse_strip_name(name) else {
                continue;
            };
            let named = NamedStrip {
                name: name.clone(),
                reel: parsed.reel,
                subtype: parsed.subtype,
                strip: ReelStrip::new(symbols.clone()),
            };
            if parsed.is_bonus {
                bonus.push(named);
            } else {
                base.push(named);
            }
        }
        base.sort_by_key(|s| s.reel);
        bonus.sort_by_key(|s| s.reel);
        Self { base, bonus }
    }

    pub fn base(&self) -> &[NamedStrip] {
        &self.base
    }

    pub fn bonus(&self) -> &[NamedStrip] {
        &self.bonus
    }

    pub fn has_bonus(&self) -> bool {
        !self.bonus.is_empty()
    }

    pub fn base_reel_count(&self) -> usize {
        self.base.len()
    }

    pub fn bonus_reel_count(&self) -> usize {
        self.bonus.len()
    }

    /// Bonus strips whose name carries the given subtype suffix.
    pub fn bonus_with_subtype(&self, subtype: &str) -> Vec<&NamedStrip> {
        let suffix = format!("_{subtype}");
        self.bonus
            .iter()
            .filter(|s| s.name.ends_with(&suffix))
            .collect()
    }

    /// Distinct bonus subtypes present in the bonus set, e.g. "expanding",
    /// "multiplier".
    pub fn special_bonus_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .bonus
            .iter()
            .filter_map(|s| s.subtype.clone())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    /// Detect the scatter symbol from base-strip symbol frequencies.
    ///
    /// Prefers low-integer candidate ids appearing more than 10 times, then
    /// the rarest symbol whose frequency is strictly between 5 and 50, then
    /// "0".
    pub fn detect_scatter_symbol(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for named in &self.base {
            for symbol in &named.strip.symbols {
                *counts.entry(symbol.as_str()).or_insert(0) += 1;
            }
        }

        for candidate in ["0", "1", "2", "3", "4"] {
            if counts.get(candidate).copied().unwrap_or(0) > 10 {
                return candidate.to_string();
            }
        }

        // Rarest symbol that is neither too rare nor too common; BTreeMap
        // iteration keeps ties deterministic.
        counts
            .iter()
            .filter(|&(_, &count)| count > 5 && count < 50)
            .min_by_key(|&(_, &count)| count)
            .map(|(symbol, _)| symbol.to_string())
            .unwrap_or_else(|| "0".to_string())
    }
}

struct ParsedName {
    is_bonus: bool,
    reel: usize,
    subtype: Option<String>,
}

/// Parse a wire strip name: the prefix decides base vs bonus, the digits give
/// the reel index, and for bonus strips the text after the final underscore
/// is the subtype.
fn parse_strip_name(name: &str) -> Option<ParsedName> {
    if !name.starts_with(BASE_PREFIX) {
        return None;
    }
    let is_bonus = name.starts_with(BONUS_PREFIX);

    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    let reel = digits.parse().unwrap_or(0);

    let subtype = if is_bonus {
        name.rsplit_once('_').map(|(_, suffix)| suffix.to_string())
    } else {
        None
    };

    Some(ParsedName {
        is_bonus,
        reel,
        subtype,
    })
}
