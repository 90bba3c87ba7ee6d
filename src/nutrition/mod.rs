pub mod calculations;
pub mod constants;
pub mod format;

pub use calculations::{compute_nutrition, pack_nutrition, preview_with_pack};
pub use constants::*;
pub use format::{format_delta, format_kcal, format_macro, round_to};
