use thiserror::Error;

use crate::catalog::Table;

#[derive(Debug, Error)]
pub enum SmoothieError {
    #[error("Duplicate id '{id}' in {table} table")]
    DuplicateId { table: Table, id: String },

    #[error("Invalid {field} value {value} for '{id}' in {table} table")]
    InvalidMacro {
        table: Table,
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("{table} entry '{owner}' references unknown {target} id '{id}'")]
    DanglingReference {
        table: Table,
        owner: String,
        target: Table,
        id: String,
    },

    #[error("Fruit pack '{pack}' has non-positive weight {weight} for '{fruit}'")]
    InvalidWeight {
        pack: String,
        fruit: String,
        weight: f64,
    },

    #[error("Fruit pack '{0}' has a protein multiplier below 1")]
    InvalidMultiplier(String),

    #[error("Best seller not found: {0}")]
    BestSellerNotFound(String),

    #[error("Unknown {table} id '{id}'{}", suggestion_suffix(.suggestion))]
    UnknownId {
        table: Table,
        id: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SmoothieError>;
