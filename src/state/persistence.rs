use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Selection, Snapshot};

/// Read a persisted selection, propagating any failure.
///
/// Repeated add-on ids are collapsed, first occurrence wins.
pub fn read_selection<P: AsRef<Path>>(path: P) -> Result<Selection> {
    let content = fs::read_to_string(path)?;
    let selection: Selection = serde_json::from_str(&content)?;
    Ok(selection)
}

/// Load the persisted selection.
///
/// Never fails: a missing, unreadable or malformed file yields the empty
/// selection.
pub fn load_selection<P: AsRef<Path>>(path: P) -> Selection {
    let path = path.as_ref();
    match read_selection(path) {
        Ok(selection) => selection,
        Err(crate::error::SmoothieError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no saved selection, starting empty");
            Selection::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unusable saved selection, starting empty");
            Selection::default()
        }
    }
}

/// Save the selection as pretty-printed JSON.
pub fn save_selection<P: AsRef<Path>>(path: P, selection: &Selection) -> Result<()> {
    let json = serde_json::to_string_pretty(selection)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "selection saved");
    Ok(())
}

/// Load the locked comparison snapshot, if any. Any failure means no comparison.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Option<Snapshot> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable comparison snapshot");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed comparison snapshot ignored");
            None
        }
    }
}

/// Persist the comparison snapshot, or remove the file when there is none.
pub fn save_snapshot<P: AsRef<Path>>(path: P, snapshot: Option<&Snapshot>) -> Result<()> {
    let path = path.as_ref();
    match snapshot {
        Some(snapshot) => {
            let json = serde_json::to_string_pretty(snapshot)?;
            fs::write(path, json)?;
        }
        None => match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLookup, builtin_catalog};
    use crate::models::Category;
    use crate::nutrition::compute_nutrition;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_and_save_roundtrip() {
        let mut selection = Selection::new();
        selection.toggle(Category::Base, "oat-milk");
        selection.toggle(Category::AddOn, "chia");
        selection.toggle(Category::AddOn, "goji");

        let file = NamedTempFile::new().unwrap();
        save_selection(file.path(), &selection).unwrap();

        let reloaded = load_selection(file.path());
        assert_eq!(reloaded, selection);
    }

    #[test]
    fn test_persisted_field_names() {
        let mut selection = Selection::new();
        selection.toggle(Category::FruitPack, "gorilla");

        let file = NamedTempFile::new().unwrap();
        save_selection(file.path(), &selection).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["fruitPackId"], "gorilla");
        assert!(raw["base"].is_null());
        assert!(raw["protein"].is_null());
        assert_eq!(raw["selectedAddOns"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let selection = load_selection(dir.path().join("absent.json"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_malformed_file_falls_back_to_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"base\": 42, ").unwrap();

        let selection = load_selection(file.path());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_duplicate_add_ons_collapsed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"selectedAddOns": ["oat", "chia", "oat"]}"#).unwrap();

        let selection = load_selection(file.path());
        assert_eq!(selection.add_on_ids(), ["oat", "chia"]);
    }

    #[test]
    fn test_read_selection_collapses_duplicate_add_ons() {
        let catalog = builtin_catalog().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"selectedAddOns": ["pb-60", "pb-60"]}"#).unwrap();

        let selection = read_selection(file.path()).unwrap();
        assert_eq!(selection.add_on_ids(), ["pb-60"]);

        let single = catalog.add_on("pb-60").unwrap().nutrition();
        assert_eq!(compute_nutrition(&selection, &catalog), single);
    }

    #[test]
    fn test_snapshot_totals_survive_reload_bit_for_bit() {
        let catalog = builtin_catalog().unwrap();
        let mut selection = Selection::new();
        selection.toggle(Category::FruitPack, "king-kong");
        selection.toggle(Category::Base, "oat-milk");
        selection.toggle(Category::Protein, "gold-vanilla");
        let snapshot = Snapshot::capture(&selection, &catalog);

        let file = NamedTempFile::new().unwrap();
        save_snapshot(file.path(), Some(&snapshot)).unwrap();

        let reloaded = load_snapshot(file.path()).unwrap();
        let (a, b) = (snapshot.nutrition(), reloaded.nutrition());
        assert_eq!(a.protein.to_bits(), b.protein.to_bits());
        assert_eq!(a.carbs.to_bits(), b.carbs.to_bits());
        assert_eq!(a.fat.to_bits(), b.fat.to_bits());
        assert_eq!(a.kcal.to_bits(), b.kcal.to_bits());
    }

    #[test]
    fn test_snapshot_roundtrip_and_clear() {
        let catalog = builtin_catalog().unwrap();
        let mut selection = Selection::new();
        selection.toggle(Category::Base, "almond-milk");
        let snapshot = Snapshot::capture(&selection, &catalog);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compare.json");

        save_snapshot(&path, Some(&snapshot)).unwrap();
        assert_eq!(load_snapshot(&path), Some(snapshot));

        save_snapshot(&path, None).unwrap();
        assert!(!path.exists());
        assert_eq!(load_snapshot(&path), None);

        // clearing twice is fine
        save_snapshot(&path, None).unwrap();
    }

    #[test]
    fn test_malformed_snapshot_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();
        assert_eq!(load_snapshot(file.path()), None);
    }
}
