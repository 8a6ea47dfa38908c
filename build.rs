use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/regions.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let countries = required_array(catalog, "countries");
    let known_codes = validate_countries(countries);

    let regions = required_array(catalog, "regions");
    validate_regions(regions, &known_codes);

    println!(
        "cargo:warning=Validated catalog: {} regions, {} countries",
        regions.len(),
        countries.len()
    );
}

fn required_array<'a>(catalog: &'a serde_json::Value, field: &str) -> &'a Vec<serde_json::Value> {
    let value = catalog.get(field).unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing '{field}' field\n\
             The catalog must have a top-level '{field}' array.\n"
        );
    });

    value.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: '{field}' must be an array\n\
             Got: {value}\n"
        );
    })
}

fn validate_countries(countries: &[serde_json::Value]) -> HashSet<String> {
    let mut codes = HashSet::new();

    for (i, country) in countries.iter().enumerate() {
        let code = country
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Country at index {i} missing 'code' field\n")
            });

        assert!(
            country.get("name").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Country '{code}' (index {i}) missing 'name' field\n"
        );
        assert_country_code(code, &format!("country at index {i}"));
        assert!(
            codes.insert(code.to_string()),
            "\n\nCATALOG BUILD ERROR: Country code '{code}' is declared more than once\n"
        );
    }

    codes
}

fn validate_regions(regions: &[serde_json::Value], known_codes: &HashSet<String>) {
    let mut slugs = HashSet::new();

    for (i, region) in regions.iter().enumerate() {
        let name = region
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Region at index {i} missing 'name' field\n")
            });

        let slug = slugify(name);
        assert!(
            !slug.is_empty(),
            "\n\nCATALOG BUILD ERROR: Region '{name}' (index {i}) has no usable characters in its name\n"
        );
        assert!(
            slugs.insert(slug.clone()),
            "\n\nCATALOG BUILD ERROR: Region '{name}' (index {i}) duplicates slug '{slug}'\n"
        );

        let codes = region
            .get("country_codes")
            .and_then(|v| v.as_array())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Region '{name}' (index {i}) missing 'country_codes' array\n"
                )
            });

        for code in codes {
            let code = code.as_str().unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Region '{name}' has a non-string country code\n")
            });
            assert_country_code(code, &format!("region '{name}'"));
            assert!(
                known_codes.contains(code),
                "\n\nCATALOG BUILD ERROR: Region '{name}' references unknown country '{code}'\n"
            );
        }
    }
}

fn assert_country_code(code: &str, context: &str) {
    assert!(
        code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase()),
        "\n\nCATALOG BUILD ERROR: Invalid country code '{code}' in {context}\n\
         Country codes must be two lowercase ASCII letters.\n"
    );
}

// Mirrors the library's slug derivation closely enough to catch duplicates.
fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if c == '.' || c == '\'' || c == '\u{2019}' {
            continue;
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_end_matches('_').to_string()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/regions.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
