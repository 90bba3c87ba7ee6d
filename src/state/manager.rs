use crate::catalog::{Catalog, CatalogLookup};
use crate::error::{Result, SmoothieError};
use crate::models::{Category, NutritionValues, Selection, Snapshot};
use crate::nutrition::compute_nutrition;

/// Which of the four build steps have something chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildProgress {
    pub fruit_pack: bool,
    pub base: bool,
    pub protein: bool,
    pub add_ons: bool,
}

impl BuildProgress {
    pub fn completed(&self) -> usize {
        [self.fruit_pack, self.base, self.protein, self.add_ons]
            .into_iter()
            .filter(|&done| done)
            .count()
    }
}

/// One user's configurator session: the live selection plus an optional
/// locked drink to compare against.
#[derive(Debug, Clone, Default)]
pub struct Configurator {
    selection: Selection,
    comparison: Option<Snapshot>,
}

impl Configurator {
    pub fn new(selection: Selection, comparison: Option<Snapshot>) -> Self {
        Self {
            selection,
            comparison,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn comparison(&self) -> Option<&Snapshot> {
        self.comparison.as_ref()
    }

    /// Toggle an id in a category. Unknown ids are accepted and contribute nothing.
    pub fn toggle(&mut self, category: Category, id: &str) {
        self.selection.toggle(category, id);
    }

    /// Replace the add-on set in one step.
    pub fn set_add_ons<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selection.set_add_ons(ids);
    }

    /// Clear the live selection. A locked comparison is kept.
    pub fn reset(&mut self) {
        self.selection.clear();
    }

    /// Drop every add-on, keeping the single-choice categories.
    pub fn clear_add_ons(&mut self) {
        self.selection.set_add_ons(std::iter::empty::<&str>());
    }

    /// Replace the live selection with a best-seller bundle.
    pub fn apply_best_seller(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        let best = catalog
            .best_seller(id)
            .ok_or_else(|| SmoothieError::BestSellerNotFound(id.to_string()))?;
        self.selection = Selection::from_best_seller(best);
        Ok(())
    }

    /// Freeze the current drink for comparison and start a fresh one.
    ///
    /// Replaces any previously locked snapshot.
    pub fn lock_comparison<L: CatalogLookup + ?Sized>(&mut self, lookup: &L) -> &Snapshot {
        let snapshot = Snapshot::capture(&self.selection, lookup);
        self.selection.clear();
        self.comparison.insert(snapshot)
    }

    /// Drop the locked comparison. Returns whether one existed.
    pub fn clear_comparison(&mut self) -> bool {
        self.comparison.take().is_some()
    }

    /// Totals for the live selection.
    pub fn nutrition<L: CatalogLookup + ?Sized>(&self, lookup: &L) -> NutritionValues {
        compute_nutrition(&self.selection, lookup)
    }

    pub fn progress(&self) -> BuildProgress {
        BuildProgress {
            fruit_pack: self.selection.fruit_pack_id.is_some(),
            base: self.selection.base_id.is_some(),
            protein: self.selection.protein_id.is_some(),
            add_ons: !self.selection.add_on_ids().is_empty(),
        }
    }
}
