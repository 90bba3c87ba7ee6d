use serde::{Deserialize, Serialize};

/// A named bundle referencing one entry of each category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestSeller {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub desc: String,

    #[serde(rename = "fruitPackId")]
    pub fruit_pack_id: String,

    #[serde(rename = "milkId")]
    pub base_id: String,

    #[serde(rename = "proteinId")]
    pub protein_id: String,

    #[serde(rename = "addOns", default)]
    pub add_on_ids: Vec<String>,
}
