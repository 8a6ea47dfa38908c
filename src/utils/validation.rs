//! Centralized validation helpers for catalog data.

/// Length of an ISO 3166-1 alpha-2 country code
pub const COUNTRY_CODE_LENGTH: usize = 2;

/// Validate that a string is a two-letter ASCII country code, in any case.
///
/// # Examples
///
/// ```
/// use regionite::utils::validation::is_valid_country_code;
///
/// assert!(is_valid_country_code("us"));
/// assert!(is_valid_country_code("GB"));
/// assert!(!is_valid_country_code("usa"));
/// assert!(!is_valid_country_code("u1"));
/// ```
#[must_use]
pub fn is_valid_country_code(s: &str) -> bool {
    s.len() == COUNTRY_CODE_LENGTH && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Normalize a country code to lowercase.
/// Returns None if the input is not a valid country code.
#[must_use]
pub fn normalize_country_code(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if is_valid_country_code(trimmed) {
        Some(trimmed.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_country_code() {
        assert_eq!(normalize_country_code("US"), Some("us".to_string()));
        assert_eq!(normalize_country_code(" ca "), Some("ca".to_string()));
        assert_eq!(normalize_country_code("mx"), Some("mx".to_string()));
        assert_eq!(normalize_country_code("mex"), None);
        assert_eq!(normalize_country_code(""), None);
    }
}
