use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::Catalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::region::Region;
use crate::matching::engine::{MatchingConfig, Resolver};

#[derive(Args)]
pub struct LookupArgs {
    /// Region name, slug, or abbreviation (e.g. "North America", "n. america")
    #[arg(required = true)]
    pub query: String,

    /// Only accept an exact slug match (no compact or abbreviated names)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ContainsArgs {
    /// Region name, slug, or abbreviation
    #[arg(required = true)]
    pub region: String,

    /// Country code or name (e.g. "us", "United States")
    #[arg(required = true)]
    pub country: String,
}

pub fn run(
    args: LookupArgs,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;
    let config = if args.strict {
        MatchingConfig::strict()
    } else {
        MatchingConfig::default()
    };
    let resolver = Resolver::with_config(&catalog, config);

    let region = resolver
        .resolve(args.query.as_str())?
        .ok_or_else(|| anyhow::anyhow!("No region matches '{}'", args.query))?;

    print_region(region, &catalog, format)
}

pub fn run_contains(
    args: ContainsArgs,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;
    let resolver = Resolver::new(&catalog);

    let region = resolver
        .resolve(args.region.as_str())?
        .ok_or_else(|| anyhow::anyhow!("No region matches '{}'", args.region))?;
    let contains = region.contains(&catalog, args.country.as_str())?;

    match format {
        OutputFormat::Text => {
            let country = catalog
                .find_country(&args.country)
                .map_or_else(|| args.country.clone(), |c| c.name.clone());
            let verb = if contains { "contains" } else { "does not contain" };
            println!("{} {verb} {country}", region.name);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "region": region.slug,
                "country": catalog.country_code_for(&args.country),
                "contains": contains,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("region\tcountry\tcontains");
            println!("{}\t{}\t{contains}", region.slug, args.country);
        }
    }

    Ok(())
}

/// Print a region with its member countries
pub fn print_region(region: &Region, catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    let countries = region.countries(catalog);

    match format {
        OutputFormat::Text => {
            println!("Region: {}\n", region.name);
            println!("Slug:      {}", region.slug);
            println!("Type:      {}", region.region_type);
            println!("Countries: {}", region.codes().len());

            if !countries.is_empty() {
                println!("\n{:<6} Name", "Code");
                println!("{}", "-".repeat(40));
                for country in &countries {
                    println!("{:<6} {}", country.code, country.name);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": region.name,
                "slug": region.slug,
                "type": region.region_type,
                "country_codes": region.codes(),
                "countries": countries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("code\tname");
            for country in &countries {
                println!("{}\t{}", country.code, country.name);
            }
        }
    }

    Ok(())
}
