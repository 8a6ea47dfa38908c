use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::matching::engine::Resolver;

#[derive(Args)]
pub struct SearchArgs {
    /// Region name, slug, or abbreviation to search for
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

pub fn run(
    args: SearchArgs,
    catalog_path: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;
    let resolver = Resolver::new(&catalog);

    let mut hits = resolver.search_hits(args.query.as_str())?;
    hits.truncate(args.limit);

    match format {
        OutputFormat::Text => {
            if hits.is_empty() {
                println!("No regions match '{}'", args.query);
                return Ok(());
            }

            let name_width = hits
                .iter()
                .map(|h| h.region.name.len())
                .max()
                .unwrap_or(4)
                .max(4);
            let slug_width = hits
                .iter()
                .map(|h| h.region.slug.as_str().len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Search results for '{}' ({})\n", args.query, hits.len());
            println!(
                "{:<3} {:<name_w$} {:<slug_w$} {:<12} Match",
                "#",
                "Name",
                "Slug",
                "Type",
                name_w = name_width,
                slug_w = slug_width
            );
            println!("{}", "-".repeat(name_width + slug_width + 30));

            for (i, hit) in hits.iter().enumerate() {
                println!(
                    "{:<3} {:<name_w$} {:<slug_w$} {:<12} {}",
                    i + 1,
                    hit.region.name,
                    hit.region.slug.as_str(),
                    hit.region.region_type.as_str(),
                    hit.kind,
                    name_w = name_width,
                    slug_w = slug_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = hits
                .iter()
                .map(|hit| {
                    serde_json::json!({
                        "name": hit.region.name,
                        "slug": hit.region.slug,
                        "type": hit.region.region_type,
                        "match": hit.kind,
                        "country_count": hit.region.codes().len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tslug\ttype\tmatch");
            for hit in &hits {
                println!(
                    "{}\t{}\t{}\t{}",
                    hit.region.name, hit.region.slug, hit.region.region_type, hit.kind
                );
            }
        }
    }

    Ok(())
}
