use dialoguer::{Confirm, MultiSelect, Select};

use crate::catalog::{Catalog, Table};
use crate::error::{Result, SmoothieError};
use crate::interface::render::nutrition_line;
use crate::models::{Category, Selection};
use crate::nutrition::{format_kcal, preview_with_pack};
use crate::state::Configurator;

const NONE_LABEL: &str = "None";

/// Prompt for one single-choice category.
///
/// Returns the chosen id, or `None` when the user picks "None". Pack
/// entries show the totals the drink would have with that pack.
pub fn prompt_single(
    catalog: &Catalog,
    selection: &Selection,
    category: Category,
) -> Result<Option<String>> {
    let table = Table::from(category);
    let entries = catalog.entries(table);
    if entries.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = entries
        .iter()
        .map(|e| match category {
            Category::FruitPack => format!(
                "{} - {}",
                e.name(),
                nutrition_line(&preview_with_pack(selection, catalog, e.id()))
            ),
            _ => match e.nutrition() {
                Some(n) => format!("{} - {} kcal", e.name(), format_kcal(n.kcal)),
                None => e.name().to_string(),
            },
        })
        .collect();
    options.push(NONE_LABEL.to_string());

    let default = selection
        .current(category)
        .and_then(|id| entries.iter().position(|e| e.id() == id))
        .unwrap_or(options.len() - 1);

    let choice = Select::new()
        .with_prompt(format!("Choose your {}", table))
        .items(&options)
        .default(default)
        .interact()?;

    Ok(entries.get(choice).map(|e| e.id().to_string()))
}

/// Prompt for the add-on set, with current add-ons pre-checked.
pub fn prompt_add_ons(catalog: &Catalog, selection: &Selection) -> Result<Vec<String>> {
    let add_ons = catalog.add_ons();
    if add_ons.is_empty() {
        return Ok(Vec::new());
    }

    let options: Vec<String> = add_ons
        .iter()
        .map(|a| {
            format!(
                "{} ({}) - {} kcal",
                a.name(),
                a.weight_label,
                format_kcal(a.nutrition().kcal)
            )
        })
        .collect();
    let checked: Vec<bool> = add_ons.iter().map(|a| selection.has_add_on(a.id())).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Choose your add-ons (space to toggle, enter to confirm)")
        .items(&options)
        .defaults(&checked)
        .interact()?;

    // keep previously chosen add-ons first so insertion order survives
    let mut ids: Vec<String> = selection
        .add_on_ids()
        .iter()
        .filter(|id| chosen.iter().any(|&i| add_ons[i].id() == id.as_str()))
        .cloned()
        .collect();
    for i in chosen {
        let id = add_ons[i].id();
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Walk through all four steps, updating the session.
pub fn run_build_wizard(catalog: &Catalog, session: &mut Configurator) -> Result<()> {
    for category in [Category::FruitPack, Category::Base, Category::Protein] {
        let chosen = prompt_single(catalog, session.selection(), category)?;
        let current = session.selection().current(category).map(str::to_string);
        match (current, chosen) {
            (Some(current), None) => session.toggle(category, &current),
            (current, Some(chosen)) if current.as_deref() != Some(chosen.as_str()) => {
                session.toggle(category, &chosen)
            }
            _ => {}
        }
    }

    let add_ons = prompt_add_ons(catalog, session.selection())?;
    session.set_add_ons(add_ons);
    Ok(())
}

/// Prompt for a best seller to apply.
pub fn prompt_best_seller(catalog: &Catalog) -> Result<String> {
    let best_sellers = catalog.best_sellers();
    if best_sellers.is_empty() {
        return Err(SmoothieError::InvalidInput(
            "The catalog has no best sellers".to_string(),
        ));
    }

    let options: Vec<String> = best_sellers
        .iter()
        .map(|b| format!("{} - {}", b.name, b.desc))
        .collect();

    let choice = Select::new()
        .with_prompt("Pick a best seller")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(best_sellers[choice].id.clone())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
