mod builtin;
mod loader;
mod store;
mod validation;

use std::fmt;

use crate::models::{AddOn, Category, FruitPack, Ingredient};

pub use builtin::builtin_catalog;
pub use loader::load_catalog;
pub use store::{Catalog, CatalogData, Entity};
pub use validation::validate;

/// The six catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Base,
    Fruit,
    FruitPack,
    Protein,
    AddOn,
    BestSeller,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::Base,
        Table::Fruit,
        Table::FruitPack,
        Table::Protein,
        Table::AddOn,
        Table::BestSeller,
    ];
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Base => "base",
            Table::Fruit => "fruit",
            Table::FruitPack => "fruit pack",
            Table::Protein => "protein",
            Table::AddOn => "add-on",
            Table::BestSeller => "best seller",
        };
        f.write_str(name)
    }
}

impl From<Category> for Table {
    fn from(category: Category) -> Self {
        match category {
            Category::Base => Table::Base,
            Category::FruitPack => Table::FruitPack,
            Category::Protein => Table::Protein,
            Category::AddOn => Table::AddOn,
        }
    }
}

/// Id lookups the aggregator needs.
///
/// `Catalog` is the production implementation; tests may supply a smaller fixture.
pub trait CatalogLookup {
    fn base(&self, id: &str) -> Option<&Ingredient>;
    fn fruit(&self, id: &str) -> Option<&Ingredient>;
    fn fruit_pack(&self, id: &str) -> Option<&FruitPack>;
    fn protein(&self, id: &str) -> Option<&Ingredient>;
    fn add_on(&self, id: &str) -> Option<&AddOn>;
}

