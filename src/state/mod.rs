mod manager;
mod persistence;

pub use manager::{BuildProgress, Configurator};
pub use persistence::{load_selection, load_snapshot, read_selection, save_selection, save_snapshot};
