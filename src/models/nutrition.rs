use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Aggregate macro-nutrient totals.
///
/// Protein, carbs and fat are in grams, energy in kcal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub kcal: f64,
}

impl NutritionValues {
    pub fn new(protein: f64, carbs: f64, fat: f64, kcal: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
            kcal,
        }
    }

    /// All four fields at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every field by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            kcal: self.kcal * factor,
        }
    }

    /// Signed per-field difference `self - other`, for comparison display.
    pub fn difference(&self, other: &NutritionValues) -> Self {
        Self {
            protein: self.protein - other.protein,
            carbs: self.carbs - other.carbs,
            fat: self.fat - other.fat,
            kcal: self.kcal - other.kcal,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0 && self.kcal == 0.0
    }
}

impl Add for NutritionValues {
    type Output = NutritionValues;

    fn add(self, other: NutritionValues) -> NutritionValues {
        NutritionValues {
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            kcal: self.kcal + other.kcal,
        }
    }
}

impl AddAssign for NutritionValues {
    fn add_assign(&mut self, other: NutritionValues) {
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.kcal += other.kcal;
    }
}
