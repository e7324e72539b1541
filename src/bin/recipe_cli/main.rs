// ABOUTME: Recipe CLI - browse, search, and convert recipes from the command line
// ABOUTME: Prints pretty JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors
//!
//! Usage:
//! ```bash
//! # Thai recipes under 20 minutes of prep, newest first
//! recipe-cli search --cuisine Thai --max-prep 20 --sort datePublished --desc
//!
//! # Ingredients for 6 servings in imperial units
//! recipe-cli show shepherds-pie --servings 6 --units imperial
//!
//! # One-off conversions
//! recipe-cli convert 500 g --to imperial
//! recipe-cli scale 250 --from 4 --to 6
//!
//! # Filter options present in the data
//! recipe-cli facets
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_book::config::CatalogConfig;
use recipe_book::data::JsonFileRecipeSource;
use recipe_book::errors::AppError;
use recipe_book::logging::LoggingConfig;
use recipe_book::services::RecipeCatalog;
use recipe_core::models::Difficulty;
use recipe_intelligence::query::SortField;
use recipe_intelligence::units::UnitSystem;
use tracing::debug;

use commands::SearchArgs;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe Book CLI",
    long_about = "Search published recipes, display ingredients at any serving count, and convert between metric and imperial units."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe JSON file override
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Filter, sort, and page through recipes
    Search {
        /// Case-insensitive text matched against title, description, and tags
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Cuisine to include (repeatable)
        #[arg(long)]
        cuisine: Vec<String>,

        /// Tag to include (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Maximum preparation time in minutes
        #[arg(long)]
        max_prep: Option<u32>,

        /// Difficulty to include (repeatable)
        #[arg(long)]
        difficulty: Vec<Difficulty>,

        /// Field to sort by (title, totalTimeMins, datePublished, difficulty)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page size
        #[arg(long)]
        limit: Option<usize>,

        /// Number of matches to skip
        #[arg(long)]
        offset: Option<usize>,
    },

    /// Show a recipe with its ingredients scaled and converted
    Show {
        /// Recipe slug
        slug: String,

        /// Serving count (defaults to the recipe's base servings)
        #[arg(long)]
        servings: Option<u32>,

        /// Unit system (defaults to RECIPE_BOOK_UNIT_SYSTEM)
        #[arg(long)]
        units: Option<UnitSystem>,
    },

    /// Recipes similar to the given one
    Related {
        /// Recipe slug
        slug: String,

        /// Maximum number of recipes
        #[arg(long, default_value = "4")]
        limit: usize,
    },

    /// Convert a single quantity into a unit system
    Convert {
        /// Quantity to convert
        quantity: f64,

        /// Unit symbol (g, kg, ml, l, oz, lb, fl oz, pt, tsp, tbsp, cup, °C, °F)
        unit: String,

        /// Target unit system
        #[arg(long)]
        to: UnitSystem,
    },

    /// Rescale a quantity to a new serving count
    Scale {
        /// Quantity calibrated to the original servings
        quantity: f64,

        /// Original serving count
        #[arg(long)]
        from: u32,

        /// New serving count
        #[arg(long)]
        to: u32,
    },

    /// List the cuisines, tags, and difficulties present in the data
    Facets,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(error);
            ExitCode::FAILURE
        }
    }
}

/// Print a failed command's error to stderr, as JSON when it is an `AppError`
fn report(error: anyhow::Error) {
    match commands::error_response(error) {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(rendered) => eprintln!("{rendered}"),
            Err(_) => eprintln!("Error: {}", response.error.message),
        },
        Err(other) => eprintln!("Error: {other:#}"),
    }
}

async fn run(cli: Cli) -> Result<()> {
    LoggingConfig::from_env().with_verbosity(cli.verbose).init()?;

    let mut config = CatalogConfig::from_env().map_err(AppError::from)?;
    if let Some(path) = cli.data {
        config.data_path = path;
    }
    debug!(data_path = %config.data_path.display(), "Recipe CLI starting");

    let source = JsonFileRecipeSource::new(config.data_path.clone());
    let catalog = RecipeCatalog::new(source, config);

    match cli.command {
        Command::Search {
            search,
            cuisine,
            tag,
            max_prep,
            difficulty,
            sort,
            desc,
            limit,
            offset,
        } => {
            let args = SearchArgs {
                search,
                cuisines: cuisine,
                tags: tag,
                max_prep,
                difficulties: difficulty,
                sort,
                desc,
                limit,
                offset,
            };
            commands::catalog::search(&catalog, args).await?;
        }
        Command::Show {
            slug,
            servings,
            units,
        } => {
            commands::catalog::show(&catalog, &slug, servings, units).await?;
        }
        Command::Related { slug, limit } => {
            commands::catalog::related(&catalog, &slug, limit).await?;
        }
        Command::Convert { quantity, unit, to } => {
            commands::units::convert(quantity, &unit, to)?;
        }
        Command::Scale { quantity, from, to } => {
            commands::units::scale(quantity, from, to)?;
        }
        Command::Facets => {
            commands::catalog::facets(&catalog).await?;
        }
    }

    Ok(())
}
