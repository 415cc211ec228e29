//! Money formatting rule
//!
//! Every monetary mutation passes its result through [`format_amount`] before
//! it becomes observable. The rule keeps floating-point drift from
//! accumulating visible fractional noise while never touching an amount that
//! legitimately has one or two decimals.

/// Normalize a monetary value after a mutation.
///
/// - more than 4 fractional digits: round to 2 decimals (drift cleanup)
/// - 3 or 4 fractional digits: truncate (floor) to 2 decimals
/// - 0..=2 fractional digits: unchanged
///
/// Digit counting uses the shortest round-trip decimal form of the value,
/// which is what the drift check cares about.
pub fn format_amount(value: f64) -> f64 {
    let text = format!("{}", value);
    let Some(frac) = text.split('.').nth(1) else {
        return value;
    };
    if frac.len() > 4 {
        (value * 100.0).round() / 100.0
    } else if frac.len() > 2 {
        (value * 100.0).floor() / 100.0
    } else {
        value
    }
}

/// Convert ledger units to display units for the given denomination.
pub fn to_display(ledger_units: f64, denomination: f64) -> f64 {
    ledger_units / denomination
}

/// Convert display units to ledger units for the given denomination.
pub fn to_ledger(display_units: f64, denomination: f64) -> f64 {
    display_units * denomination
}
