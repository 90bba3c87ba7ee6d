use std::path::Path;

use serde::Serialize;

use crate::catalog::{Catalog, Entity, Table};
use crate::models::{NutritionValues, Selection};
use crate::nutrition::{compute_nutrition, pack_nutrition};

/// One CSV row: an entry's own macros (packs and bundles aggregated).
#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    table: String,
    id: &'a str,
    name: &'a str,
    protein: f64,
    carbs: f64,
    fat: f64,
    kcal: f64,
}

fn entry_nutrition(catalog: &Catalog, entry: &Entity<'_>) -> NutritionValues {
    match entry {
        Entity::FruitPack(pack) => pack_nutrition(pack, catalog),
        Entity::BestSeller(best) => compute_nutrition(&Selection::from_best_seller(best), catalog),
        other => other.nutrition().unwrap_or_default(),
    }
}

/// Write every catalog entry as `table,id,name,protein,carbs,fat,kcal`.
///
/// Returns the number of rows written.
pub fn export_catalog_csv<P: AsRef<Path>>(catalog: &Catalog, path: P) -> crate::Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut rows = 0;

    for table in Table::ALL {
        for entry in catalog.entries(table) {
            let n = entry_nutrition(catalog, &entry);
            writer.serialize(CatalogRow {
                table: table.to_string(),
                id: entry.id(),
                name: entry.name(),
                protein: n.protein,
                carbs: n.carbs,
                fat: n.fat,
                kcal: n.kcal,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}
