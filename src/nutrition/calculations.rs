use tracing::debug;

use crate::catalog::CatalogLookup;
use crate::models::{FruitPack, NutritionValues, Selection};
use crate::nutrition::constants::{PER_UNITS, base_factor};

/// Total macros for a selection.
///
/// Sums in a fixed order: base, pack fruits, pack bonus ingredients,
/// protein (scaled by the pack's multiplier), add-ons. Ids that do not
/// resolve contribute nothing; this never fails.
pub fn compute_nutrition<L: CatalogLookup + ?Sized>(
    selection: &Selection,
    lookup: &L,
) -> NutritionValues {
    let mut total = NutritionValues::zero();

    if let Some(id) = selection.base_id.as_deref() {
        match lookup.base(id) {
            Some(base) => total += base.nutrition().scale(base_factor()),
            None => debug!(id, "unresolved base id"),
        }
    }

    let mut multiplier = 1.0;
    if let Some(id) = selection.fruit_pack_id.as_deref() {
        match lookup.fruit_pack(id) {
            Some(pack) => {
                total += pack_nutrition(pack, lookup);
                multiplier = pack.protein_factor();
            }
            None => debug!(id, "unresolved fruit pack id"),
        }
    }

    if let Some(id) = selection.protein_id.as_deref() {
        match lookup.protein(id) {
            Some(protein) => total += protein.nutrition().scale(multiplier),
            None => debug!(id, "unresolved protein id"),
        }
    }

    for id in selection.add_on_ids() {
        match lookup.add_on(id) {
            Some(add_on) => total += add_on.nutrition(),
            None => debug!(id = id.as_str(), "unresolved add-on id"),
        }
    }

    total
}

/// Fruit plus bonus contribution of a pack on its own.
///
/// Fruit macros are scaled by `weight / 100`; bonus ingredients are added as-is.
pub fn pack_nutrition<L: CatalogLookup + ?Sized>(pack: &FruitPack, lookup: &L) -> NutritionValues {
    let mut total = NutritionValues::zero();

    for item in &pack.items {
        match lookup.fruit(&item.fruit_id) {
            Some(fruit) => total += fruit.nutrition().scale(item.weight / PER_UNITS),
            None => debug!(
                pack = pack.id.as_str(),
                fruit = item.fruit_id.as_str(),
                "unresolved fruit id"
            ),
        }
    }

    for bonus in &pack.bonus_ingredients {
        total += bonus.nutrition();
    }

    total
}

/// Totals as if `pack_id` were the chosen pack, everything else unchanged.
pub fn preview_with_pack<L: CatalogLookup + ?Sized>(
    selection: &Selection,
    lookup: &L,
    pack_id: &str,
) -> NutritionValues {
    let mut preview = selection.clone();
    preview.fruit_pack_id = Some(pack_id.to_string());
    compute_nutrition(&preview, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddOn, BonusIngredient, Category, Ingredient, PackItem};
    use std::collections::HashMap;

    /// Small in-memory lookup, free to hold references the real catalog would reject.
    #[derive(Default)]
    struct Fixture {
        bases: HashMap<String, Ingredient>,
        fruits: HashMap<String, Ingredient>,
        packs: HashMap<String, FruitPack>,
        proteins: HashMap<String, Ingredient>,
        add_ons: HashMap<String, AddOn>,
    }

    impl CatalogLookup for Fixture {
        fn base(&self, id: &str) -> Option<&Ingredient> {
            self.bases.get(id)
        }
        fn fruit(&self, id: &str) -> Option<&Ingredient> {
            self.fruits.get(id)
        }
        fn fruit_pack(&self, id: &str) -> Option<&FruitPack> {
            self.packs.get(id)
        }
        fn protein(&self, id: &str) -> Option<&Ingredient> {
            self.proteins.get(id)
        }
        fn add_on(&self, id: &str) -> Option<&AddOn> {
            self.add_ons.get(id)
        }
    }

    fn ingredient(id: &str, p: f64, c: f64, f: f64, kcal: f64) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            protein: p,
            carbs: c,
            fat: f,
            kcal,
            color: "#000".to_string(),
            emoji: None,
            tags: Vec::new(),
        }
    }

    fn fixture() -> Fixture {
        let mut fx = Fixture::default();
        fx.bases
            .insert("milk".into(), ingredient("milk", 3.0, 5.0, 3.0, 60.0));
        fx.fruits
            .insert("banana".into(), ingredient("banana", 1.0, 20.0, 0.5, 100.0));
        fx.proteins
            .insert("whey".into(), ingredient("whey", 30.0, 3.0, 2.0, 150.0));
        fx.add_ons.insert(
            "chia".into(),
            AddOn {
                ingredient: ingredient("chia", 0.6, 2.3, 1.9, 20.0),
                weight_label: "4 g".to_string(),
            },
        );
        fx.packs.insert(
            "double".into(),
            FruitPack {
                id: "double".to_string(),
                name: "Double".to_string(),
                items: vec![
                    PackItem {
                        fruit_id: "banana".to_string(),
                        weight: 150.0,
                    },
                    PackItem {
                        fruit_id: "ghost-fruit".to_string(),
                        weight: 50.0,
                    },
                ],
                description: String::new(),
                tag: None,
                protein_multiplier: 2,
                bonus_ingredients: vec![BonusIngredient {
                    name: "Dates".to_string(),
                    weight: 12.0,
                    protein: 0.2,
                    carbs: 9.0,
                    fat: 0.0,
                    kcal: 34.0,
                }],
            },
        );
        fx
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let n = compute_nutrition(&Selection::new(), &fixture());
        assert!(n.is_zero());
    }

    #[test]
    fn test_base_taken_at_face_value() {
        let mut s = Selection::new();
        s.toggle(Category::Base, "milk");
        let n = compute_nutrition(&s, &fixture());
        assert_eq!(n, NutritionValues::new(3.0, 5.0, 3.0, 60.0));
    }

    #[test]
    fn test_unresolved_fruit_does_not_abort_pack() {
        let fx = fixture();
        let pack = fx.packs.get("double").unwrap();
        let n = pack_nutrition(pack, &fx);
        // banana at 1.5x plus dates; ghost-fruit contributes nothing
        assert!((n.kcal - (150.0 + 34.0)).abs() < 1e-9);
        assert!((n.carbs - (30.0 + 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_scales_only_protein() {
        let fx = fixture();
        let mut s = Selection::new();
        s.toggle(Category::FruitPack, "double");
        let pack_only = compute_nutrition(&s, &fx);

        s.toggle(Category::Protein, "whey");
        let with_protein = compute_nutrition(&s, &fx);

        assert!((with_protein.kcal - pack_only.kcal - 300.0).abs() < 1e-9);
        assert!((with_protein.protein - pack_only.protein - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_pack_uses_multiplier_one() {
        let mut s = Selection::new();
        s.toggle(Category::FruitPack, "nope");
        s.toggle(Category::Protein, "whey");
        let n = compute_nutrition(&s, &fixture());
        assert_eq!(n, NutritionValues::new(30.0, 3.0, 2.0, 150.0));
    }

    #[test]
    fn test_unknown_add_on_skipped_others_counted() {
        let mut s = Selection::new();
        s.toggle(Category::AddOn, "nope");
        s.toggle(Category::AddOn, "chia");
        let n = compute_nutrition(&s, &fixture());
        assert_eq!(n, NutritionValues::new(0.6, 2.3, 1.9, 20.0));
    }

    #[test]
    fn test_preview_with_pack_leaves_selection_alone() {
        let fx = fixture();
        let mut s = Selection::new();
        s.toggle(Category::Base, "milk");
        let preview = preview_with_pack(&s, &fx, "double");
        assert!(s.fruit_pack_id.is_none());
        assert!((preview.kcal - (60.0 + 150.0 + 34.0)).abs() < 1e-9);
    }
}
