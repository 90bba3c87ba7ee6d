use crate::catalog::{Catalog, CatalogLookup, Entity, Table};
use crate::models::{NutritionValues, Selection, Snapshot};
use crate::nutrition::{compute_nutrition, format_delta, format_kcal, format_macro, pack_nutrition};
use crate::state::{BuildProgress, Configurator};

/// One-line totals, e.g. "Cal: 258 | P: 4.9 | C: 57.4 | F: 4.8".
pub fn nutrition_line(n: &NutritionValues) -> String {
    format!(
        "Cal: {} | P: {} | C: {} | F: {}",
        format_kcal(n.kcal),
        format_macro(n.protein),
        format_macro(n.carbs),
        format_macro(n.fat)
    )
}

/// Human-readable parts of a selection: (label, value) pairs.
fn describe(catalog: &Catalog, selection: &Selection) -> Vec<(&'static str, String)> {
    let pack = match selection.fruit_pack_id.as_deref() {
        Some(id) => match catalog.fruit_pack(id) {
            Some(pack) => {
                let mut label = pack.name.clone();
                if let Some(tag) = &pack.tag {
                    label.push_str(&format!(" [{}]", tag));
                }
                if !pack.bonus_ingredients.is_empty() {
                    label.push_str(&format!(" + {}", pack.bonus_names().join(", ")));
                }
                label
            }
            None => format!("{} (unknown)", id),
        },
        None => "-".to_string(),
    };

    let name_of = |table: Table, id: Option<&str>| -> String {
        match id {
            Some(id) => catalog
                .find(table, id)
                .map(|e| e.name().to_string())
                .unwrap_or_else(|| format!("{} (unknown)", id)),
            None => "-".to_string(),
        }
    };

    let add_ons = if selection.add_on_ids().is_empty() {
        "None".to_string()
    } else {
        selection
            .add_on_ids()
            .iter()
            .map(|id| name_of(Table::AddOn, Some(id.as_str())))
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        ("Fruit pack", pack),
        ("Base", name_of(Table::Base, selection.base_id.as_deref())),
        ("Protein", name_of(Table::Protein, selection.protein_id.as_deref())),
        ("Add-ons", add_ons),
    ]
}

fn progress_line(progress: &BuildProgress) -> String {
    let mark = |done: bool| if done { "x" } else { " " };
    format!(
        "[{}] Fruit pack  [{}] Base  [{}] Protein  [{}] Add-on  ({}/4)",
        mark(progress.fruit_pack),
        mark(progress.base),
        mark(progress.protein),
        mark(progress.add_ons),
        progress.completed()
    )
}

/// Display the live drink, its totals and any locked comparison.
pub fn display_session(catalog: &Catalog, session: &Configurator) {
    let nutrition = session.nutrition(catalog);

    println!();
    println!("=== Your Smoothie ===");
    println!();
    for (label, value) in describe(catalog, session.selection()) {
        println!("  {:<11} {}", format!("{}:", label), value);
    }
    println!();
    println!("  {}", progress_line(&session.progress()));
    println!();
    println!("  {}", nutrition_line(&nutrition));
    println!();

    if let Some(snapshot) = session.comparison() {
        display_comparison(catalog, snapshot, session.selection(), &nutrition);
    }
}

/// Side-by-side view of the locked drink and the live one.
pub fn display_comparison(
    catalog: &Catalog,
    locked: &Snapshot,
    current: &Selection,
    current_nutrition: &NutritionValues,
) {
    let left = describe(catalog, &locked.selection());
    let right = describe(catalog, current);
    let width = left
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(10)
        .max("SMOOTHIE 1".len());

    println!("=== Comparison ===");
    println!();
    println!("  {:<11} {:<width$}   {}", "", "SMOOTHIE 1", "SMOOTHIE 2", width = width);
    for ((label, l), (_, r)) in left.iter().zip(right.iter()) {
        println!(
            "  {:<11} {:<width$}   {}",
            format!("{}:", label),
            l,
            r,
            width = width
        );
    }
    println!();

    let a = locked.nutrition();
    let b = current_nutrition;
    let delta = b.difference(a);
    let rows = [
        ("Cal", format_kcal(a.kcal), format_kcal(b.kcal), format_delta(delta.kcal, 0)),
        (
            "Protein",
            format_macro(a.protein),
            format_macro(b.protein),
            format_delta(delta.protein, 1),
        ),
        ("Carbs", format_macro(a.carbs), format_macro(b.carbs), format_delta(delta.carbs, 1)),
        ("Fat", format_macro(a.fat), format_macro(b.fat), format_delta(delta.fat, 1)),
    ];
    for (label, l, r, d) in rows {
        println!("  {:<11} {:>8} {:>8}   ({})", format!("{}:", label), l, r, d);
    }
    println!();
}

/// Display one catalog table with per-entry macros.
///
/// Packs show their own fruit and bonus totals.
pub fn display_table(catalog: &Catalog, table: Table) {
    let entries = catalog.entries(table);
    if entries.is_empty() {
        println!("{}: (none)", table);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title(table), entries.len());
    println!();

    let max_id_len = entries.iter().map(|e| e.id().len()).max().unwrap_or(10);

    for entry in &entries {
        let detail = match entry {
            Entity::FruitPack(pack) => {
                let mut line = nutrition_line(&pack_nutrition(pack, catalog));
                if pack.protein_multiplier > 1 {
                    line.push_str(&format!(" | protein x{}", pack.protein_multiplier));
                }
                line
            }
            Entity::AddOn(add_on) => {
                format!("{} ({})", nutrition_line(&add_on.nutrition()), add_on.weight_label)
            }
            Entity::BestSeller(best) => best.desc.clone(),
            other => other
                .nutrition()
                .map(|n| nutrition_line(&n))
                .unwrap_or_default(),
        };

        println!(
            "  {:<width$}  {} - {}",
            entry.id(),
            entry.name(),
            detail,
            width = max_id_len
        );
    }
    println!();
}

/// List best sellers with the totals each bundle would give.
pub fn display_best_sellers(catalog: &Catalog) {
    println!();
    println!("=== Best Sellers ===");
    println!();
    for best in catalog.best_sellers() {
        let totals = compute_nutrition(&Selection::from_best_seller(best), catalog);
        println!("  {} - {}", best.id, best.name);
        println!("      {}", best.desc);
        println!("      {}", nutrition_line(&totals));
    }
    println!();
}

fn title(table: Table) -> &'static str {
    match table {
        Table::Base => "Bases",
        Table::Fruit => "Fruits",
        Table::FruitPack => "Fruit Packs",
        Table::Protein => "Proteins",
        Table::AddOn => "Add-ons",
        Table::BestSeller => "Best Sellers",
    }
}
