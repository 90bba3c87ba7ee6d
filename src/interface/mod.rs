pub mod export;
pub mod prompts;
pub mod render;

pub use export::export_catalog_csv;
pub use prompts::{
    prompt_add_ons, prompt_best_seller, prompt_single, prompt_yes_no, run_build_wizard,
};
pub use render::{
    display_best_sellers, display_comparison, display_session, display_table, nutrition_line,
};
