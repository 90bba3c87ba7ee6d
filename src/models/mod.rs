mod best_seller;
mod ingredient;
mod nutrition;
mod pack;
mod selection;
mod snapshot;

pub use best_seller::BestSeller;
pub(crate) use ingredient::first_invalid_macro;
pub use ingredient::{AddOn, Ingredient};
pub use nutrition::NutritionValues;
pub use pack::{BonusIngredient, FruitPack, PackItem};
pub use selection::{Category, Selection};
pub use snapshot::Snapshot;
