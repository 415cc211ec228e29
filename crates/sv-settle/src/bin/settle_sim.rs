//! settle-sim — replay one settlement round from a JSON snapshot
//!
//! Dev harness for the in-process contract: reads a `RoundSnapshot`, runs
//! debit → spin → bank credit → jackpot update, and prints the `RoundDiff`
//! as JSON. No transport, no persistence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::Parser;

use sv_core::{BankState, SlotEvent, WinType};
use sv_settle::{RoundSnapshot, SettlementContext, SpinRequest};

#[derive(Parser, Debug)]
#[command(name = "settle-sim", about = "Replay one settlement round from a JSON snapshot")]
struct Args {
    /// Path to a RoundSnapshot JSON file
    snapshot: PathBuf,

    /// Bet per line, display units
    #[arg(long, default_value_t = 1.0)]
    bet: f64,

    /// Number of lines
    #[arg(long, default_value_t = 10)]
    lines: u32,

    /// Win type: normal or bonus
    #[arg(long, default_value = "normal")]
    win_type: String,

    /// Slot event: bet, freespin, ...
    #[arg(long, default_value = "bet")]
    event: String,

    /// Bonus subtype for freespin strip selection
    #[arg(long)]
    bonus_subtype: Option<String>,

    /// RNG seed for a reproducible round
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.snapshot)
        .with_context(|| format!("reading {}", args.snapshot.display()))?;
    let snapshot: RoundSnapshot = serde_json::from_str(&raw).context("parsing snapshot")?;

    let win_type: WinType = serde_json::from_value(serde_json::Value::String(args.win_type))
        .context("parsing win type")?;
    let slot_event: SlotEvent = serde_json::from_value(serde_json::Value::String(args.event))
        .context("parsing slot event")?;

    let request = SpinRequest {
        win_type,
        slot_event,
        bonus_subtype: args.bonus_subtype,
        bet_level: args.bet,
        lines: args.lines,
        denomination: None,
    };

    let mut context = SettlementContext::from_snapshot(snapshot)?;
    if let Some(seed) = args.seed {
        context.seed(seed);
    }
    if !context.is_active() {
        bail!("snapshot is not playable (blocked shop/player or hidden game)");
    }

    let all_bet = request.all_bet();
    let percent = context.ledger_ref().percent();

    if slot_event == SlotEvent::Bet {
        context.ledger().set_balance(-all_bet, slot_event)?;
        context
            .ledger()
            .set_bank(BankState::Main, all_bet / 100.0 * percent, slot_event)?;
        context.ledger().update_jackpots(all_bet)?;
    }

    let outcome = context.spin(&request);
    context.save_log_report(
        serde_json::to_value(&outcome)?,
        all_bet,
        request.lines,
        0.0,
        slot_event,
    );

    let diff = context.into_diff();
    println!("{}", serde_json::to_string_pretty(&diff)?);
    Ok(())
}
