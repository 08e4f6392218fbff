use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::state::Tab;

/// EcoPlate — sustainable meal planning with shopping lists and impact totals.
#[derive(Parser, Debug)]
#[command(name = "eco_plate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recipe catalog JSON file. The built-in catalog is used when omitted.
    #[arg(short, long, env = "ECO_PLATE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log level for diagnostics written to stderr. Ignored when RUST_LOG is set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Browse recipes and build a meal plan interactively.
    #[default]
    Interactive,

    /// List the recipes in the catalog.
    Catalog {
        /// Show ingredients and instructions.
        #[arg(long)]
        details: bool,

        /// Write the catalog as JSON to this path.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Build a plan from recipe names and print the result.
    Plan {
        /// Recipe names, matched case-insensitively with fuzzy fallback.
        #[arg(required = true)]
        recipes: Vec<String>,

        /// Print only this view instead of all three.
        #[arg(long, value_enum)]
        tab: Option<Tab>,
    },
}
