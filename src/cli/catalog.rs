use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::Catalog;
use crate::cli::lookup::print_region;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::RegionType;
use crate::matching::engine::Resolver;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all regions in the catalog
    List {
        /// Filter by region type (e.g., "continent", "subregion")
        #[arg(long = "type")]
        region_type: Option<String>,
    },

    /// Show a region and its member countries
    Show {
        /// Region name, slug, or abbreviation
        #[arg(required = true)]
        region: String,
    },

    /// List all countries in the catalog
    Countries,

    /// Export the catalog as JSON
    Export {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(
    args: CatalogArgs,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    match args.command {
        CatalogCommands::List { region_type } => {
            run_list(&catalog, region_type.as_deref(), format, verbose)
        }
        CatalogCommands::Show { region } => run_show(&catalog, &region, format),
        CatalogCommands::Countries => run_countries(&catalog, format),
        CatalogCommands::Export { output } => run_export(&catalog, output),
    }
}

fn run_list(
    catalog: &Catalog,
    type_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let type_filter = type_filter.map(RegionType::parse);

    let filtered: Vec<_> = catalog
        .regions()
        .iter()
        .filter(|r| type_filter.as_ref().map_or(true, |t| r.region_type == *t))
        .collect();

    match format {
        OutputFormat::Text => {
            let name_width = filtered
                .iter()
                .map(|r| r.name.len().min(35))
                .max()
                .unwrap_or(4)
                .max(4);
            let slug_width = filtered
                .iter()
                .map(|r| r.slug.as_str().len())
                .max()
                .unwrap_or(4)
                .max(4);

            let total_width = name_width + slug_width + 12 + 10 + 3;

            println!("Region Catalog ({} regions)\n", filtered.len());
            println!(
                "{:<name_w$} {:<slug_w$} {:<12} {:>10}",
                "Name",
                "Slug",
                "Type",
                "Countries",
                name_w = name_width,
                slug_w = slug_width
            );
            println!("{}", "-".repeat(total_width));

            for r in &filtered {
                println!(
                    "{:<name_w$} {:<slug_w$} {:<12} {:>10}",
                    truncate(&r.name, name_width),
                    r.slug.as_str(),
                    r.region_type.as_str(),
                    r.codes().len(),
                    name_w = name_width,
                    slug_w = slug_width
                );
                if verbose && !r.codes().is_empty() {
                    println!("  └─ {}", r.codes().join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name,
                        "slug": r.slug,
                        "type": r.region_type,
                        "country_codes": r.codes(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tslug\ttype\tcountry_count\tcountry_codes");
            for r in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    r.name,
                    r.slug,
                    r.region_type,
                    r.codes().len(),
                    r.codes().join(",")
                );
            }
        }
    }

    Ok(())
}

fn run_show(catalog: &Catalog, query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let resolver = Resolver::new(catalog);
    let region = resolver
        .resolve(query)?
        .ok_or_else(|| anyhow::anyhow!("Region '{}' not found", query))?;

    print_region(region, catalog, format)
}

fn run_countries(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Countries ({})\n", catalog.countries().len());
            println!("{:<6} Name", "Code");
            println!("{}", "-".repeat(40));
            for country in catalog.countries() {
                println!("{:<6} {}", country.code, country.name);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.countries())?);
        }
        OutputFormat::Tsv => {
            println!("code\tname");
            for country in catalog.countries() {
                println!("{}\t{}", country.code, country.name);
            }
        }
    }

    Ok(())
}

fn run_export(catalog: &Catalog, output: Option<PathBuf>) -> anyhow::Result<()> {
    let json = catalog.to_json()?;

    if let Some(output) = output {
        std::fs::write(&output, json)?;
        println!(
            "Exported {} regions to {}",
            catalog.len(),
            output.display()
        );
    } else {
        println!("{json}");
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
