/// Reference volume of the base, in the same units its macros are given per.
pub const BASE_VOLUME: f64 = 100.0;

/// Fruit and base macros are per this many mass units.
pub const PER_UNITS: f64 = 100.0;

/// Macro values strictly between zero and this are shown as negligible.
pub const NEGLIGIBLE_THRESHOLD: f64 = 0.5;

/// Label shown instead of a near-zero macro value.
pub const NEGLIGIBLE_MARKER: &str = "~";

/// Fractional digits shown for protein, carbs and fat.
pub const MACRO_DECIMALS: i32 = 1;

/// Scale applied to base macros.
#[inline]
pub fn base_factor() -> f64 {
    BASE_VOLUME / PER_UNITS
}
