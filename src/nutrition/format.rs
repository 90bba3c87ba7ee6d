use crate::nutrition::constants::{MACRO_DECIMALS, NEGLIGIBLE_MARKER, NEGLIGIBLE_THRESHOLD};

/// Round to `digits` decimal places, halves away from zero.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Display label for a protein, carbs or fat value.
///
/// Values in (0, 0.5) show as the negligible marker; everything else gets
/// one decimal. Zero itself is shown as "0.0".
pub fn format_macro(value: f64) -> String {
    if value > 0.0 && value < NEGLIGIBLE_THRESHOLD {
        return NEGLIGIBLE_MARKER.to_string();
    }
    format!(
        "{:.*}",
        MACRO_DECIMALS as usize,
        round_to(value, MACRO_DECIMALS)
    )
}

/// Display label for energy: nearest whole kcal, never the negligible marker.
pub fn format_kcal(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Signed label for a comparison delta, e.g. "+4.5" or "-12".
pub fn format_delta(value: f64, digits: i32) -> String {
    let rounded = round_to(value, digits);
    let sign = if rounded > 0.0 { "+" } else { "" };
    // avoid "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}{:.*}", sign, digits.max(0) as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negligible_marker() {
        assert_eq!(format_macro(0.3), "~");
        assert_eq!(format_macro(0.49), "~");
        assert_eq!(format_macro(0.5), "0.5");
    }

    #[test]
    fn test_zero_is_not_negligible() {
        assert_eq!(format_macro(0.0), "0.0");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(format_macro(1.25), "1.3");
        assert_eq!(format_macro(2.75), "2.8");
        assert_eq!(format_macro(12.04), "12.0");
    }

    #[test]
    fn test_kcal_whole_number() {
        assert_eq!(format_kcal(149.6), "150");
        assert_eq!(format_kcal(149.4), "149");
        assert_eq!(format_kcal(0.3), "0");
        assert_eq!(format_kcal(258.2), "258");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(4.46, 1), "+4.5");
        assert_eq!(format_delta(-12.0, 0), "-12");
        assert_eq!(format_delta(-0.01, 1), "0.0");
    }
}
