use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::models::BestSeller;

/// A selectable category of the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Base,
    FruitPack,
    Protein,
    AddOn,
}

/// The user's in-progress drink.
///
/// Base, pack and protein are single-choice; add-ons are a set kept in
/// insertion order. Ids are not checked against any catalog here: an id
/// that does not resolve simply contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(rename = "base", default)]
    pub base_id: Option<String>,

    #[serde(rename = "fruitPackId", default)]
    pub fruit_pack_id: Option<String>,

    #[serde(rename = "protein", default)]
    pub protein_id: Option<String>,

    #[serde(rename = "selectedAddOns", default, deserialize_with = "unique_add_ons")]
    add_on_ids: Vec<String>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding exactly the bundle's choices.
    pub fn from_best_seller(best: &BestSeller) -> Self {
        let mut selection = Self {
            base_id: Some(best.base_id.clone()),
            fruit_pack_id: Some(best.fruit_pack_id.clone()),
            protein_id: Some(best.protein_id.clone()),
            add_on_ids: Vec::new(),
        };
        for id in &best.add_on_ids {
            selection.insert_add_on(id);
        }
        selection
    }

    /// Add-on ids in insertion order.
    pub fn add_on_ids(&self) -> &[String] {
        &self.add_on_ids
    }

    pub fn has_add_on(&self, id: &str) -> bool {
        self.add_on_ids.iter().any(|a| a == id)
    }

    /// Current id held by a single-choice category, or `None` for add-ons.
    pub fn current(&self, category: Category) -> Option<&str> {
        match category {
            Category::Base => self.base_id.as_deref(),
            Category::FruitPack => self.fruit_pack_id.as_deref(),
            Category::Protein => self.protein_id.as_deref(),
            Category::AddOn => None,
        }
    }

    /// Toggle `id` in `category`.
    ///
    /// Single-choice: selecting the held id clears it, any other id replaces it.
    /// Add-ons: present ids are removed, absent ids are appended.
    pub fn toggle(&mut self, category: Category, id: &str) {
        match category {
            Category::Base => toggle_single(&mut self.base_id, id),
            Category::FruitPack => toggle_single(&mut self.fruit_pack_id, id),
            Category::Protein => toggle_single(&mut self.protein_id, id),
            Category::AddOn => self.toggle_add_on(id),
        }
    }

    pub fn toggle_add_on(&mut self, id: &str) {
        if let Some(pos) = self.add_on_ids.iter().position(|a| a == id) {
            self.add_on_ids.remove(pos);
        } else {
            self.add_on_ids.push(id.to_string());
        }
    }

    /// Replace the add-on set, dropping repeated ids (first occurrence wins).
    pub fn set_add_ons<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_on_ids.clear();
        for id in ids {
            self.insert_add_on(id.as_ref());
        }
    }

    /// True when no category holds anything.
    pub fn is_empty(&self) -> bool {
        self.base_id.is_none()
            && self.fruit_pack_id.is_none()
            && self.protein_id.is_none()
            && self.add_on_ids.is_empty()
    }

    /// Reset every category.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn insert_add_on(&mut self, id: &str) {
        if !self.has_add_on(id) {
            self.add_on_ids.push(id.to_string());
        }
    }
}

/// Add-on ids as read from JSON, with repeats collapsed (first occurrence wins).
fn unique_add_ons<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Vec::<String>::deserialize(deserializer)?;
    let total = raw.len();
    let mut ids: Vec<String> = Vec::with_capacity(total);
    for id in raw {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    let dropped = total - ids.len();
    if dropped > 0 {
        warn!(dropped, "duplicate add-on ids collapsed");
    }
    Ok(ids)
}

fn toggle_single(slot: &mut Option<String>, id: &str) {
    if slot.as_deref() == Some(id) {
        *slot = None;
    } else {
        *slot = Some(id.to_string());
    }
}
