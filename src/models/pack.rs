use serde::{Deserialize, Serialize};

use crate::models::NutritionValues;

/// One fruit in a pack, by id and weight in mass units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackItem {
    #[serde(rename = "fruitId")]
    pub fruit_id: String,
    pub weight: f64,
}

/// A fixed extra included with a pack. Values are absolute, not per 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusIngredient {
    pub name: String,
    pub weight: f64,
    #[serde(rename = "p")]
    pub protein: f64,
    #[serde(rename = "c")]
    pub carbs: f64,
    #[serde(rename = "f")]
    pub fat: f64,
    pub kcal: f64,
}

impl BonusIngredient {
    #[inline]
    pub fn nutrition(&self) -> NutritionValues {
        NutritionValues::new(self.protein, self.carbs, self.fat, self.kcal)
    }
}

/// A preset fruit combination with its bonus ingredients.
///
/// `protein_multiplier` scales only the chosen protein, never the pack's own fruit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FruitPack {
    pub id: String,
    pub name: String,
    pub items: Vec<PackItem>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(
        rename = "proteinMultiplier",
        default = "default_protein_multiplier"
    )]
    pub protein_multiplier: u32,

    #[serde(rename = "bonusIngredients", default)]
    pub bonus_ingredients: Vec<BonusIngredient>,
}

fn default_protein_multiplier() -> u32 {
    1
}

impl FruitPack {
    /// Multiplier as a float factor for the aggregator.
    #[inline]
    pub fn protein_factor(&self) -> f64 {
        self.protein_multiplier as f64
    }

    /// Sum of bonus ingredient contributions.
    pub fn bonus_nutrition(&self) -> NutritionValues {
        let mut total = NutritionValues::zero();
        for bonus in &self.bonus_ingredients {
            total += bonus.nutrition();
        }
        total
    }

    /// Names of bonus ingredients in definition order.
    pub fn bonus_names(&self) -> Vec<&str> {
        self.bonus_ingredients
            .iter()
            .map(|b| b.name.as_str())
            .collect()
    }
}
