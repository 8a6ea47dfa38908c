//! Command-line interface for regionite.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **lookup**: Resolve an identifier to a single region
//! - **search**: List every region matching an identifier, best first
//! - **contains**: Check whether a region contains a country
//! - **catalog**: List, show, or export the region catalog
//!
//! ## Usage
//!
//! ```text
//! # Resolve a name, slug, or abbreviation
//! regionite lookup "N. America"
//!
//! # Exact slug matching only
//! regionite lookup namerica --strict
//!
//! # JSON output for scripting
//! regionite search "s asia" --format json
//!
//! # Membership test
//! regionite contains "north america" "united states"
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::Catalog;

pub mod catalog;
pub mod lookup;
pub mod search;

#[derive(Parser)]
#[command(name = "regionite")]
#[command(version)]
#[command(about = "Resolve and search geographic regions by name, abbreviation, or slug")]
#[command(
    long_about = "regionite resolves free-form region identifiers against a catalog of regions and their member countries.\n\nNames are matched regardless of case, spacing, underscores, or punctuation, and common abbreviations such as \"N. America\" resolve to their region."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to custom catalog file (defaults to embedded)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an identifier to a region
    Lookup(lookup::LookupArgs),

    /// Search for all regions matching an identifier
    Search(search::SearchArgs),

    /// Check whether a region contains a country
    Contains(lookup::ContainsArgs),

    /// Inspect the region catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog file, or the embedded catalog when no path is given
pub fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<Catalog> {
    let catalog = if let Some(path) = path {
        Catalog::load_from_file(path)?
    } else {
        Catalog::load_embedded()?
    };

    if verbose {
        eprintln!(
            "Loaded catalog with {} regions and {} countries",
            catalog.len(),
            catalog.countries().len()
        );
    }

    Ok(catalog)
}
