use serde::{Deserialize, Serialize};

use crate::models::NutritionValues;

/// A catalog ingredient: base, fruit or protein.
///
/// Macro values are per 100 mass units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub kcal: f64,
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Ingredient {
    /// The four macro fields as a `NutritionValues`.
    #[inline]
    pub fn nutrition(&self) -> NutritionValues {
        NutritionValues::new(self.protein, self.carbs, self.fat, self.kcal)
    }

    /// Field name and value of the first negative or non-finite macro, if any.
    pub fn invalid_macro(&self) -> Option<(&'static str, f64)> {
        first_invalid_macro(&self.nutrition())
    }
}

/// An optional extra. Macro values are per serving, described by `weight_label`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    #[serde(flatten)]
    pub ingredient: Ingredient,

    #[serde(rename = "weightLabel")]
    pub weight_label: String,
}

impl AddOn {
    pub fn id(&self) -> &str {
        &self.ingredient.id
    }

    pub fn name(&self) -> &str {
        &self.ingredient.name
    }

    #[inline]
    pub fn nutrition(&self) -> NutritionValues {
        self.ingredient.nutrition()
    }
}

/// Returns the first macro field that is negative or not finite.
pub(crate) fn first_invalid_macro(values: &NutritionValues) -> Option<(&'static str, f64)> {
    [
        ("protein", values.protein),
        ("carbs", values.carbs),
        ("fat", values.fat),
        ("kcal", values.kcal),
    ]
    .into_iter()
    .find(|(_, v)| !v.is_finite() || *v < 0.0)
}
