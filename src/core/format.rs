//! Compact magnitude labels (`4.5M`, `1K`, `999`) for cards, tooltips and axis ticks.

use rust_decimal::{Decimal, RoundingStrategy};

/// Label rendered for an absent data point.
pub const NO_DATA_LABEL: &str = "no data";

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Formats a data value for display; absent or non-finite values read as [`NO_DATA_LABEL`].
#[must_use]
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_magnitude(v),
        _ => NO_DATA_LABEL.to_owned(),
    }
}

/// Formats an axis tick. Tick values are always present, so there is no "no data" case;
/// a non-finite tick renders as `0`.
#[must_use]
pub fn format_axis_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    format_magnitude(value)
}

fn format_magnitude(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    let abs = value.abs();
    if abs >= MILLION {
        return scaled_label(value, MILLION, "M");
    }
    if abs >= THOUSAND {
        // 999,950 rounds to 1000.0K and is promoted.
        return match round_tenths(value / THOUSAND) {
            Some(tenths) if tenths.abs() >= Decimal::ONE_THOUSAND => {
                scaled_label(value, MILLION, "M")
            }
            Some(tenths) => tenths_label(tenths, "K"),
            None => format!("{:.1}K", value / THOUSAND),
        };
    }

    // Half-up: 12.5 -> 13, -12.5 -> -12.
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        return "0".to_owned();
    }
    if rounded.abs() >= THOUSAND {
        return scaled_label(rounded, THOUSAND, "K");
    }
    format!("{rounded:.0}")
}

/// Rounds to one decimal using the exact binary value, so `1.45` (stored as
/// `1.4499..`) rounds down.
fn round_tenths(scaled: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(scaled)
        .map(|exact| exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

/// One decimal place, with a trailing `.0` dropped.
fn scaled_label(value: f64, divisor: f64, suffix: &str) -> String {
    match round_tenths(value / divisor) {
        Some(tenths) => tenths_label(tenths, suffix),
        None => format!("{:.1}{suffix}", value / divisor),
    }
}

fn tenths_label(tenths: Decimal, suffix: &str) -> String {
    if tenths.fract().is_zero() {
        format!("{}{suffix}", tenths.trunc().normalize())
    } else {
        format!("{tenths:.1}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_axis_number, format_number};

    #[test]
    fn small_values_round_to_integers() {
        assert_eq!(format_number(Some(999.4)), "999");
        assert_eq!(format_number(Some(12.5)), "13");
        assert_eq!(format_number(Some(0.2)), "0");
    }

    #[test]
    fn scaled_values_drop_trailing_zero_decimal() {
        assert_eq!(format_number(Some(4_000_000.0)), "4M");
        assert_eq!(format_number(Some(4_500_000.0)), "4.5M");
        assert_eq!(format_number(Some(862_000.0)), "862K");
        assert_eq!(format_number(Some(1_999_999.0)), "2M");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(format_number(Some(-1_500.0)), "-1.5K");
        assert_eq!(format_number(Some(-2_000_000.0)), "-2M");
        assert_eq!(format_number(Some(-7.0)), "-7");
    }

    #[test]
    fn axis_variant_has_no_absent_case() {
        assert_eq!(format_axis_number(0.0), "0");
        assert_eq!(format_axis_number(f64::NAN), "0");
        assert_eq!(format_axis_number(25_000.0), "25K");
    }
}
