// ABOUTME: Heirloom CLI - builds shopping lists from recipe files on the command line
// ABOUTME: Handles list generation, ingredient-line parsing, and recipe scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors
//!
//! Usage:
//! ```bash
//! # Shopping list for every recipe in a file, grouped by aisle
//! heirloom-cli list recipes.yaml
//!
//! # Metric units, no pantry staples, cookies doubled
//! heirloom-cli list recipes.json --system metric --exclude-pantry --servings cookies=48
//!
//! # Count scallions and green onions together
//! heirloom-cli list recipes.yaml --merge-synonyms
//!
//! # Machine-readable output
//! heirloom-cli list recipes.json --format json
//!
//! # See how lines are understood
//! heirloom-cli parse "1 1/2 cups flour, sifted" "a pinch of salt"
//!
//! # Rewrite a recipe for six servings
//! heirloom-cli scale recipes.yaml --id soup --servings 6
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use heirloom_core::errors::AppResult;
use heirloom_shopping::logging::LoggingConfig;
use heirloom_shopping::shopping::UnitSystem;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "heirloom-cli",
    about = "Heirloom shopping list CLI",
    long_about = "Consolidate the ingredients of several recipes into one shopping list grouped by grocery section."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a shopping list from a recipe file
    List {
        /// JSON or YAML file holding a list of recipes
        file: PathBuf,

        /// Leave pantry staples (salt, oil, ...) off the list
        #[arg(long)]
        exclude_pantry: bool,

        /// Keep first-appearance order instead of grouping by category
        #[arg(long)]
        flat: bool,

        /// Merge alternate ingredient names (scallions, green onions) into one item
        #[arg(long)]
        merge_synonyms: bool,

        /// Display volumes and weights in this unit system
        #[arg(long, value_enum)]
        system: Option<SystemArg>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Target servings for a recipe, as `id=N` (repeatable)
        #[arg(long = "servings", value_name = "ID=N")]
        servings: Vec<String>,
    },

    /// Parse ingredient lines and print the result as JSON
    Parse {
        /// Ingredient lines
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Print a recipe rewritten for a different number of servings
    Scale {
        /// JSON or YAML file holding a list of recipes
        file: PathBuf,

        /// Recipe id
        #[arg(long)]
        id: String,

        /// Target servings
        #[arg(long)]
        servings: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SystemArg {
    Imperial,
    Metric,
}

impl From<SystemArg> for UnitSystem {
    fn from(value: SystemArg) -> Self {
        match value {
            SystemArg::Imperial => Self::Imperial,
            SystemArg::Metric => Self::Metric,
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::List {
            file,
            exclude_pantry,
            flat,
            merge_synonyms,
            system,
            format,
            servings,
        } => commands::list::run(&commands::list::ListArgs {
            file,
            exclude_pantry,
            flat,
            merge_synonyms,
            system: system.map(UnitSystem::from),
            json: format == OutputFormat::Json,
            servings,
        }),
        Command::Parse { lines } => commands::parse::run(&lines),
        Command::Scale { file, id, servings } => commands::scale::run(&file, &id, servings),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    debug!("Heirloom CLI");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(code = ?e.code, "command failed");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
