use std::collections::HashSet;

use crate::catalog::{CatalogData, Table};
use crate::error::{Result, SmoothieError};
use crate::models::{Ingredient, first_invalid_macro};

/// Check catalog consistency: unique ids per table, non-negative finite macros,
/// positive fruit weights, multipliers of at least 1 and resolvable references.
pub fn validate(data: &CatalogData) -> Result<()> {
    let bases = unique_ids(Table::Base, data.bases.iter().map(|i| i.id.as_str()))?;
    let fruits = unique_ids(Table::Fruit, data.fruits.iter().map(|i| i.id.as_str()))?;
    let packs = unique_ids(
        Table::FruitPack,
        data.fruit_packs.iter().map(|p| p.id.as_str()),
    )?;
    let proteins = unique_ids(Table::Protein, data.proteins.iter().map(|i| i.id.as_str()))?;
    let add_ons = unique_ids(Table::AddOn, data.add_ons.iter().map(|a| a.id()))?;
    unique_ids(
        Table::BestSeller,
        data.best_sellers.iter().map(|b| b.id.as_str()),
    )?;

    check_ingredients(Table::Base, &data.bases)?;
    check_ingredients(Table::Fruit, &data.fruits)?;
    check_ingredients(Table::Protein, &data.proteins)?;
    for add_on in &data.add_ons {
        check_ingredient(Table::AddOn, &add_on.ingredient)?;
    }

    for pack in &data.fruit_packs {
        if pack.protein_multiplier < 1 {
            return Err(SmoothieError::InvalidMultiplier(pack.id.clone()));
        }

        for item in &pack.items {
            if !(item.weight.is_finite() && item.weight > 0.0) {
                return Err(SmoothieError::InvalidWeight {
                    pack: pack.id.clone(),
                    fruit: item.fruit_id.clone(),
                    weight: item.weight,
                });
            }
            require(&fruits, Table::FruitPack, &pack.id, Table::Fruit, &item.fruit_id)?;
        }

        for bonus in &pack.bonus_ingredients {
            if let Some((field, value)) = first_invalid_macro(&bonus.nutrition()) {
                return Err(SmoothieError::InvalidMacro {
                    table: Table::FruitPack,
                    id: format!("{}/{}", pack.id, bonus.name),
                    field,
                    value,
                });
            }
        }
    }

    for best in &data.best_sellers {
        require(&packs, Table::BestSeller, &best.id, Table::FruitPack, &best.fruit_pack_id)?;
        require(&bases, Table::BestSeller, &best.id, Table::Base, &best.base_id)?;
        require(&proteins, Table::BestSeller, &best.id, Table::Protein, &best.protein_id)?;
        for add_on in &best.add_on_ids {
            require(&add_ons, Table::BestSeller, &best.id, Table::AddOn, add_on)?;
        }
    }

    Ok(())
}

fn unique_ids<'a, I>(table: Table, ids: I) -> Result<HashSet<&'a str>>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SmoothieError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

fn check_ingredients(table: Table, ingredients: &[Ingredient]) -> Result<()> {
    ingredients
        .iter()
        .try_for_each(|ingredient| check_ingredient(table, ingredient))
}

fn check_ingredient(table: Table, ingredient: &Ingredient) -> Result<()> {
    match ingredient.invalid_macro() {
        Some((field, value)) => Err(SmoothieError::InvalidMacro {
            table,
            id: ingredient.id.clone(),
            field,
            value,
        }),
        None => Ok(()),
    }
}

fn require(
    known: &HashSet<&str>,
    table: Table,
    owner: &str,
    target: Table,
    id: &str,
) -> Result<()> {
    if known.contains(id) {
        Ok(())
    } else {
        Err(SmoothieError::DanglingReference {
            table,
            owner: owner.to_string(),
            target,
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CatalogData {
        serde_json::from_str(
            r##"{
            "bases": [{"id": "water", "name": "Water", "protein": 0, "carbs": 0, "fat": 0, "kcal": 0, "color": "#FFF"}],
            "fruits": [{"id": "banana", "name": "Banana", "protein": 1.1, "carbs": 23.0, "fat": 0.3, "kcal": 89, "color": "#FF0"}],
            "fruitPacks": [{"id": "mono", "name": "Mono", "items": [{"fruitId": "banana", "weight": 100}]}],
            "proteins": [{"id": "whey", "name": "Whey", "protein": 30, "carbs": 3, "fat": 2, "kcal": 150, "color": "#EEE"}],
            "addOns": [{"id": "chia", "name": "Chia", "weightLabel": "4 g", "protein": 0.6, "carbs": 2.3, "fat": 1.9, "kcal": 20, "color": "#222"}],
            "bestSellers": [{"id": "best", "name": "Best", "fruitPackId": "mono", "milkId": "water", "proteinId": "whey", "addOns": ["chia"]}]
        }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_fixture() {
        assert!(validate(&fixture()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut data = fixture();
        data.fruits.push(data.fruits[0].clone());
        let err = validate(&data).unwrap_err();
        assert!(matches!(
            err,
            SmoothieError::DuplicateId { table: Table::Fruit, ref id } if id == "banana"
        ));
    }

    #[test]
    fn test_negative_macro() {
        let mut data = fixture();
        data.proteins[0].carbs = -1.0;
        let err = validate(&data).unwrap_err();
        assert!(matches!(
            err,
            SmoothieError::InvalidMacro {
                table: Table::Protein,
                field: "carbs",
                ..
            }
        ));
    }

    #[test]
    fn test_dangling_fruit_reference() {
        let mut data = fixture();
        data.fruit_packs[0].items[0].fruit_id = "durian".to_string();
        let err = validate(&data).unwrap_err();
        assert!(matches!(
            err,
            SmoothieError::DanglingReference {
                target: Table::Fruit,
                ref id,
                ..
            } if id == "durian"
        ));
    }

    #[test]
    fn test_non_positive_weight() {
        let mut data = fixture();
        data.fruit_packs[0].items[0].weight = 0.0;
        assert!(matches!(
            validate(&data).unwrap_err(),
            SmoothieError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn test_zero_multiplier() {
        let mut data = fixture();
        data.fruit_packs[0].protein_multiplier = 0;
        assert!(matches!(
            validate(&data).unwrap_err(),
            SmoothieError::InvalidMultiplier(ref id) if id == "mono"
        ));
    }

    #[test]
    fn test_best_seller_unknown_add_on() {
        let mut data = fixture();
        data.best_sellers[0].add_on_ids.push("gold-flakes".to_string());
        assert!(matches!(
            validate(&data).unwrap_err(),
            SmoothieError::DanglingReference {
                table: Table::BestSeller,
                target: Table::AddOn,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_bonus_ingredient() {
        let mut data = fixture();
        data.fruit_packs[0].bonus_ingredients.push(crate::models::BonusIngredient {
            name: "Dates".to_string(),
            weight: 12.0,
            protein: 0.2,
            carbs: 9.0,
            fat: -0.5,
            kcal: 34.0,
        });
        assert!(matches!(
            validate(&data).unwrap_err(),
            SmoothieError::InvalidMacro { table: Table::FruitPack, field: "fat", .. }
        ));
    }
}
