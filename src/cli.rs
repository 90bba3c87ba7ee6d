use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::models::Category;

/// SmoothieMaker: build a smoothie and watch its nutrition add up.
#[derive(Parser, Debug)]
#[command(name = "smoothie_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved selection JSON file.
    #[arg(short, long, env = "SMOOTHIE_STATE_FILE", default_value = "smoothie_state.json")]
    pub file: String,

    /// Path to the locked comparison snapshot.
    #[arg(long, env = "SMOOTHIE_COMPARE_FILE", default_value = "smoothie_compare.json")]
    pub compare_file: String,

    /// Catalog JSON to use instead of the built-in one.
    #[arg(short, long, env = "SMOOTHIE_CATALOG")]
    pub catalog: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current smoothie and its nutrition.
    Show,

    /// Build the smoothie step by step.
    Build,

    /// Toggle one item in a category.
    Toggle {
        /// Category to toggle in.
        #[arg(value_enum)]
        category: CategoryArg,

        /// Item id or name.
        id: String,
    },

    /// List best sellers, or apply one by id.
    Best {
        /// Best seller id; omit to list them all.
        id: Option<String>,

        /// Pick a best seller interactively.
        #[arg(short, long, conflicts_with = "id")]
        pick: bool,
    },

    /// Lock the current smoothie for comparison, or clear the comparison.
    Compare {
        #[arg(value_enum)]
        action: CompareAction,
    },

    /// Clear the current selection.
    Reset {
        /// Clear only the add-ons, keeping base, pack and protein.
        #[arg(long)]
        add_ons: bool,
    },

    /// List the catalog.
    Catalog {
        /// Write the catalog with per-entry macros to a CSV file instead.
        #[arg(long)]
        csv: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Base,
    Pack,
    Protein,
    AddOn,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Base => Category::Base,
            CategoryArg::Pack => Category::FruitPack,
            CategoryArg::Protein => Category::Protein,
            CategoryArg::AddOn => Category::AddOn,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareAction {
    Lock,
    Clear,
}
