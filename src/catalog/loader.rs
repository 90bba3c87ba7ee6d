use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::{Catalog, CatalogData, Table};
use crate::error::Result;

/// Parse catalog JSON and validate it.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let data: CatalogData = serde_json::from_str(json)?;
    let catalog = Catalog::new(data)?;

    info!(
        bases = catalog.len(Table::Base),
        fruits = catalog.len(Table::Fruit),
        fruit_packs = catalog.len(Table::FruitPack),
        proteins = catalog.len(Table::Protein),
        add_ons = catalog.len(Table::AddOn),
        best_sellers = catalog.len(Table::BestSeller),
        "catalog loaded"
    );

    Ok(catalog)
}

/// Load and validate a catalog from a JSON file.
///
/// Unlike the persisted selection, a broken catalog is an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmoothieError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_external_catalog() {
        let json = r##"{
            "bases": [{"id": "water", "name": "Water", "protein": 0, "carbs": 0, "fat": 0, "kcal": 0, "color": "#FFF"}]
        }"##;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(Table::Base), 1);
        assert_eq!(catalog.len(Table::FruitPack), 0);
    }

    #[test]
    fn test_malformed_catalog_fails_fast() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"fruitPacks\": [{ id: \"bpm\" }]}").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, SmoothieError::Json(_)));
    }

    #[test]
    fn test_missing_catalog_file() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, SmoothieError::Io(_)));
    }
}
