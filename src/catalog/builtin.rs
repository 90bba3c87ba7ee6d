use crate::catalog::Catalog;
use crate::catalog::loader::parse_catalog;
use crate::error::Result;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// The catalog shipped with the binary, validated like any external one.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_CATALOG_JSON)
}
