use serde::{Deserialize, Serialize};

use crate::catalog::CatalogLookup;
use crate::models::{NutritionValues, Selection};
use crate::nutrition::compute_nutrition;

/// A frozen copy of a selection and its totals, kept for side-by-side comparison.
///
/// Holds values, not references: later changes to the live selection never reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "baseId", default)]
    base_id: Option<String>,

    #[serde(rename = "fruitPackId", default)]
    fruit_pack_id: Option<String>,

    #[serde(rename = "proteinId", default)]
    protein_id: Option<String>,

    #[serde(rename = "selectedAddOns", default)]
    add_on_ids: Vec<String>,

    nutrition: NutritionValues,
}

impl Snapshot {
    /// Copy `selection` and compute its totals against `lookup`.
    pub fn capture<L: CatalogLookup + ?Sized>(selection: &Selection, lookup: &L) -> Self {
        Self {
            base_id: selection.base_id.clone(),
            fruit_pack_id: selection.fruit_pack_id.clone(),
            protein_id: selection.protein_id.clone(),
            add_on_ids: selection.add_on_ids().to_vec(),
            nutrition: compute_nutrition(selection, lookup),
        }
    }

    /// Rebuild the selection this snapshot was taken from.
    pub fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        selection.base_id = self.base_id.clone();
        selection.fruit_pack_id = self.fruit_pack_id.clone();
        selection.protein_id = self.protein_id.clone();
        selection.set_add_ons(&self.add_on_ids);
        selection
    }

    pub fn nutrition(&self) -> &NutritionValues {
        &self.nutrition
    }
}
