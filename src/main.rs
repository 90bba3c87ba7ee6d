use clap::Parser;
use tracing_subscriber::EnvFilter;

use smoothie_maker_rs::catalog::{Catalog, Table, builtin_catalog, load_catalog};
use smoothie_maker_rs::cli::{Cli, Command, CompareAction};
use smoothie_maker_rs::error::Result;
use smoothie_maker_rs::interface::{
    display_best_sellers, display_session, display_table, export_catalog_csv,
    prompt_best_seller, prompt_yes_no, run_build_wizard,
};
use smoothie_maker_rs::models::Category;
use smoothie_maker_rs::state::{
    Configurator, load_selection, load_snapshot, save_selection, save_snapshot,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never interleave with rendered output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("smoothie_maker_rs={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };

    let session = Configurator::new(
        load_selection(&cli.file),
        load_snapshot(&cli.compare_file),
    );

    let command = cli.command.unwrap_or_default();
    let paths = StatePaths {
        selection: &cli.file,
        comparison: &cli.compare_file,
    };

    match command {
        Command::Show => {
            display_session(&catalog, &session);
            Ok(())
        }
        Command::Build => cmd_build(&catalog, session, &paths),
        Command::Toggle { category, id } => {
            cmd_toggle(&catalog, session, &paths, category.into(), &id)
        }
        Command::Best { id, pick } => cmd_best(&catalog, session, &paths, id, pick),
        Command::Compare { action } => cmd_compare(&catalog, session, &paths, action),
        Command::Reset { add_ons } => cmd_reset(session, &paths, add_ons),
        Command::Catalog { csv } => cmd_catalog(&catalog, csv.as_deref()),
    }
}

struct StatePaths<'a> {
    selection: &'a str,
    comparison: &'a str,
}

fn save(paths: &StatePaths<'_>, session: &Configurator) -> Result<()> {
    save_selection(paths.selection, session.selection())?;
    save_snapshot(paths.comparison, session.comparison())
}

/// Interactive step-by-step build.
fn cmd_build(catalog: &Catalog, mut session: Configurator, paths: &StatePaths<'_>) -> Result<()> {
    run_build_wizard(catalog, &mut session)?;
    display_session(catalog, &session);

    if prompt_yes_no("Save this smoothie?", true)? {
        save(paths, &session)?;
        println!("Smoothie saved.");
    }
    Ok(())
}

/// Toggle a single item. Input must name a catalog entry.
fn cmd_toggle(
    catalog: &Catalog,
    mut session: Configurator,
    paths: &StatePaths<'_>,
    category: Category,
    input: &str,
) -> Result<()> {
    let id = catalog.resolve(Table::from(category), input)?;
    session.toggle(category, id);
    save(paths, &session)?;
    display_session(catalog, &session);
    Ok(())
}

/// List best sellers, or apply one.
fn cmd_best(
    catalog: &Catalog,
    mut session: Configurator,
    paths: &StatePaths<'_>,
    id: Option<String>,
    pick: bool,
) -> Result<()> {
    let id = match (id, pick) {
        (Some(id), _) => id,
        (None, true) => prompt_best_seller(catalog)?,
        (None, false) => {
            display_best_sellers(catalog);
            return Ok(());
        }
    };

    session.apply_best_seller(catalog, &id)?;
    save(paths, &session)?;
    if let Some(best) = catalog.best_seller(&id) {
        println!("Best seller {} selected!", best.name);
    }
    display_session(catalog, &session);
    Ok(())
}

fn cmd_compare(
    catalog: &Catalog,
    mut session: Configurator,
    paths: &StatePaths<'_>,
    action: CompareAction,
) -> Result<()> {
    match action {
        CompareAction::Lock => {
            session.lock_comparison(catalog);
            save(paths, &session)?;
            println!("Locked. Build smoothie 2!");
        }
        CompareAction::Clear => {
            if session.clear_comparison() {
                save(paths, &session)?;
                println!("Comparison cleared.");
            } else {
                println!("No comparison to clear.");
            }
        }
    }
    Ok(())
}

fn cmd_reset(mut session: Configurator, paths: &StatePaths<'_>, add_ons: bool) -> Result<()> {
    if add_ons {
        session.clear_add_ons();
        println!("Add-ons cleared.");
    } else {
        session.reset();
        println!("Smoothie reset.");
    }
    save(paths, &session)
}

fn cmd_catalog(catalog: &Catalog, csv: Option<&str>) -> Result<()> {
    if let Some(path) = csv {
        let rows = export_catalog_csv(catalog, path)?;
        println!("Wrote {} catalog rows to {}", rows, path);
        return Ok(());
    }

    for table in Table::ALL {
        display_table(catalog, table);
    }
    Ok(())
}
