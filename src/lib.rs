pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;

pub use catalog::{Catalog, CatalogLookup};
pub use error::{Result, SmoothieError};
pub use models::{NutritionValues, Selection, Snapshot};
pub use nutrition::compute_nutrition;
