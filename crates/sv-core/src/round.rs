//! Round event and state enums

use serde::{Deserialize, Serialize};

/// Slot event driving one settlement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotEvent {
    #[default]
    Init,
    Bet,
    FreeSpin,
    Respin,
    Bonus,
    Gamble,
    Jackpot,
}

impl SlotEvent {
    /// Events that run inside a bonus/freespin/respin context.
    pub fn is_bonus_context(&self) -> bool {
        matches!(self, SlotEvent::Bonus | SlotEvent::FreeSpin | SlotEvent::Respin)
    }
}

/// Requested outcome class for a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WinType {
    #[default]
    Normal,
    Bonus,
}

/// Which house bank pool a movement targets.
///
/// Normalized from the round context: bonus, freespin and respin rounds (or
/// an explicit bonus-active flag) hit the bonus bank, everything else the
/// main bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BankState {
    #[default]
    Main,
    Bonus,
}

impl BankState {
    /// Normalize a requested state against the round's bonus flag.
    pub fn normalize(requested: BankState, event: SlotEvent, bonus_active: bool) -> BankState {
        if bonus_active || requested == BankState::Bonus || event.is_bonus_context() {
            BankState::Bonus
        } else {
            BankState::Main
        }
    }

    /// Label used in invariant-violation messages ("" for main).
    pub fn label(&self) -> &'static str {
        match self {
            BankState::Main => "",
            BankState::Bonus => "bonus",
        }
    }
}
