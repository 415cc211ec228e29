//! # sv-settle — Per-round settlement context
//!
//! Assembles the player/shop/game/jackpot snapshot, the ephemeral and static
//! key-value stores and both core engines for one round, and turns the
//! mutated state back into a serializable diff.
//!
//! ## Control flow
//!
//! ```text
//! RoundSnapshot ──> SettlementContext
//!                     │  ledger():  debit bet, credit banks/jackpots
//!                     │  spin():    reel outcome for win evaluation
//!                     v
//!                  RoundDiff (balance, banks, jackpots, outcome, log)
//! ```
//!
//! The context performs no I/O and holds no cross-round state; a round
//! either completes with a full diff or aborts on a fatal ledger error with
//! nothing partial to commit.

pub mod context;
pub mod kv;
pub mod request;

pub use context::*;
pub use kv::*;
pub use request::*;
