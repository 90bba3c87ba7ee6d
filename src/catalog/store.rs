use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::catalog::{CatalogLookup, Table, validation};
use crate::error::{Result, SmoothieError};
use crate::models::{AddOn, BestSeller, FruitPack, Ingredient, NutritionValues};

/// Minimum Jaro-Winkler score for an id suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Raw catalog tables as they appear in catalog JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub bases: Vec<Ingredient>,

    #[serde(default)]
    pub fruits: Vec<Ingredient>,

    #[serde(rename = "fruitPacks", default)]
    pub fruit_packs: Vec<FruitPack>,

    #[serde(default)]
    pub proteins: Vec<Ingredient>,

    #[serde(rename = "addOns", default)]
    pub add_ons: Vec<AddOn>,

    #[serde(rename = "bestSellers", default)]
    pub best_sellers: Vec<BestSeller>,
}

/// A reference to one entry of any table.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Base(&'a Ingredient),
    Fruit(&'a Ingredient),
    FruitPack(&'a FruitPack),
    Protein(&'a Ingredient),
    AddOn(&'a AddOn),
    BestSeller(&'a BestSeller),
}

impl<'a> Entity<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Entity::Base(i) | Entity::Fruit(i) | Entity::Protein(i) => &i.id,
            Entity::FruitPack(p) => &p.id,
            Entity::AddOn(a) => a.id(),
            Entity::BestSeller(b) => &b.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Entity::Base(i) | Entity::Fruit(i) | Entity::Protein(i) => &i.name,
            Entity::FruitPack(p) => &p.name,
            Entity::AddOn(a) => a.name(),
            Entity::BestSeller(b) => &b.name,
        }
    }

    /// Own macro values for ingredient entries; `None` for packs and bundles,
    /// whose totals depend on aggregation.
    pub fn nutrition(&self) -> Option<NutritionValues> {
        match *self {
            Entity::Base(i) | Entity::Fruit(i) | Entity::Protein(i) => Some(i.nutrition()),
            Entity::AddOn(a) => Some(a.nutrition()),
            Entity::FruitPack(_) | Entity::BestSeller(_) => None,
        }
    }
}

/// Immutable, validated catalog with O(1) id lookup.
///
/// Tables keep definition order for listing.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    bases: HashMap<String, usize>,
    fruits: HashMap<String, usize>,
    fruit_packs: HashMap<String, usize>,
    proteins: HashMap<String, usize>,
    add_ons: HashMap<String, usize>,
    best_sellers: HashMap<String, usize>,
}

fn index_by_id<'a, I>(ids: I) -> HashMap<String, usize>
where
    I: Iterator<Item = &'a str>,
{
    ids.enumerate().map(|(i, id)| (id.to_string(), i)).collect()
}

impl Catalog {
    /// Validate `data` and build the id indexes. Fails on the first problem found.
    pub fn new(data: CatalogData) -> Result<Self> {
        validation::validate(&data)?;

        Ok(Self {
            bases: index_by_id(data.bases.iter().map(|i| i.id.as_str())),
            fruits: index_by_id(data.fruits.iter().map(|i| i.id.as_str())),
            fruit_packs: index_by_id(data.fruit_packs.iter().map(|p| p.id.as_str())),
            proteins: index_by_id(data.proteins.iter().map(|i| i.id.as_str())),
            add_ons: index_by_id(data.add_ons.iter().map(|a| a.id())),
            best_sellers: index_by_id(data.best_sellers.iter().map(|b| b.id.as_str())),
            data,
        })
    }

    /// Look up `id` in `table`.
    pub fn find(&self, table: Table, id: &str) -> Option<Entity<'_>> {
        match table {
            Table::Base => self.base(id).map(Entity::Base),
            Table::Fruit => self.fruit(id).map(Entity::Fruit),
            Table::FruitPack => self.fruit_pack(id).map(Entity::FruitPack),
            Table::Protein => self.protein(id).map(Entity::Protein),
            Table::AddOn => self.add_on(id).map(Entity::AddOn),
            Table::BestSeller => self.best_seller(id).map(Entity::BestSeller),
        }
    }

    pub fn contains(&self, table: Table, id: &str) -> bool {
        self.find(table, id).is_some()
    }

    pub fn best_seller(&self, id: &str) -> Option<&BestSeller> {
        self.best_sellers
            .get(id)
            .map(|&i| &self.data.best_sellers[i])
    }

    /// Every entry of `table` in definition order.
    pub fn entries(&self, table: Table) -> Vec<Entity<'_>> {
        match table {
            Table::Base => self.data.bases.iter().map(Entity::Base).collect(),
            Table::Fruit => self.data.fruits.iter().map(Entity::Fruit).collect(),
            Table::FruitPack => self.data.fruit_packs.iter().map(Entity::FruitPack).collect(),
            Table::Protein => self.data.proteins.iter().map(Entity::Protein).collect(),
            Table::AddOn => self.data.add_ons.iter().map(Entity::AddOn).collect(),
            Table::BestSeller => self
                .data
                .best_sellers
                .iter()
                .map(Entity::BestSeller)
                .collect(),
        }
    }

    pub fn bases(&self) -> &[Ingredient] {
        &self.data.bases
    }

    pub fn fruits(&self) -> &[Ingredient] {
        &self.data.fruits
    }

    pub fn fruit_packs(&self) -> &[FruitPack] {
        &self.data.fruit_packs
    }

    pub fn proteins(&self) -> &[Ingredient] {
        &self.data.proteins
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.data.add_ons
    }

    pub fn best_sellers(&self) -> &[BestSeller] {
        &self.data.best_sellers
    }

    /// Number of entries in `table`.
    pub fn len(&self, table: Table) -> usize {
        match table {
            Table::Base => self.data.bases.len(),
            Table::Fruit => self.data.fruits.len(),
            Table::FruitPack => self.data.fruit_packs.len(),
            Table::Protein => self.data.proteins.len(),
            Table::AddOn => self.data.add_ons.len(),
            Table::BestSeller => self.data.best_sellers.len(),
        }
    }

    /// Closest id in `table` to `input`, matching against ids and names.
    pub fn suggest(&self, table: Table, input: &str) -> Option<String> {
        let needle = input.to_lowercase();
        self.entries(table)
            .into_iter()
            .map(|e| {
                let by_id = jaro_winkler(&e.id().to_lowercase(), &needle);
                let by_name = jaro_winkler(&e.name().to_lowercase(), &needle);
                (e.id(), by_id.max(by_name))
            })
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id.to_string())
    }
}

impl Catalog {
    /// Resolve user input to an id in `table`: exact id first, then a
    /// case-insensitive id or name match. Otherwise fails with a suggestion.
    pub fn resolve(&self, table: Table, input: &str) -> Result<&str> {
        let input = input.trim();
        if let Some(entity) = self.find(table, input) {
            return Ok(entity.id());
        }

        let needle = input.to_lowercase();
        let matched = self
            .entries(table)
            .into_iter()
            .find(|e| e.id().to_lowercase() == needle || e.name().to_lowercase() == needle);

        match matched {
            Some(entity) => Ok(entity.id()),
            None => Err(SmoothieError::UnknownId {
                table,
                id: input.to_string(),
                suggestion: self.suggest(table, input),
            }),
        }
    }
}

impl CatalogLookup for Catalog {
    fn base(&self, id: &str) -> Option<&Ingredient> {
        self.bases.get(id).map(|&i| &self.data.bases[i])
    }

    fn fruit(&self, id: &str) -> Option<&Ingredient> {
        self.fruits.get(id).map(|&i| &self.data.fruits[i])
    }

    fn fruit_pack(&self, id: &str) -> Option<&FruitPack> {
        self.fruit_packs.get(id).map(|&i| &self.data.fruit_packs[i])
    }

    fn protein(&self, id: &str) -> Option<&Ingredient> {
        self.proteins.get(id).map(|&i| &self.data.proteins[i])
    }

    fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.get(id).map(|&i| &self.data.add_ons[i])
    }
}
