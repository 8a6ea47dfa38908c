//! Canonicalization of free-form region and country identifiers.
//!
//! Every identifier is reduced to two keys:
//!
//! - a **slug**: lowercase alphanumeric words joined by single underscores
//!   (`"N. America"` → `n_america`)
//! - a **compact key**: the slug with underscores removed (`namerica`)
//!
//! Periods and apostrophes are dropped outright so that abbreviations and
//! possessives collapse onto their word (`"U.S.A."` → `usa`). Any other
//! non-alphanumeric character separates words.

use std::borrow::Cow;

/// The slug and compact forms of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKey<'a> {
    pub slug: Cow<'a, str>,
    pub compact: String,
}

impl NormalizedKey<'_> {
    /// True when nothing alphanumeric survived normalization
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slug.is_empty()
    }
}

/// Normalize an identifier into its slug and compact keys.
///
/// # Examples
///
/// ```
/// use regionite::matching::normalize::normalize;
///
/// let key = normalize("N. America");
/// assert_eq!(key.slug, "n_america");
/// assert_eq!(key.compact, "namerica");
/// ```
#[must_use]
pub fn normalize(input: &str) -> NormalizedKey<'_> {
    let slug = slugify(input);
    let compact = compact(&slug);
    NormalizedKey { slug, compact }
}

/// Derive the canonical slug for an identifier.
///
/// Inputs that are already slug-shaped are returned borrowed.
#[must_use]
pub fn slugify(input: &str) -> Cow<'_, str> {
    if is_slug_shaped(input) {
        return Cow::Borrowed(input);
    }

    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else if !is_dropped(c) {
            pending_separator = true;
        }
    }

    Cow::Owned(slug)
}

/// Remove all word separators from a slug.
#[must_use]
pub fn compact(slug: &str) -> String {
    slug.chars().filter(|&c| c != '_').collect()
}

/// Check whether a string is already a canonical slug: lowercase
/// alphanumeric words separated by single underscores.
#[must_use]
pub fn is_slug_shaped(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s
            .chars()
            .all(|c| c == '_' || (c.is_alphanumeric() && !c.is_uppercase()))
}

/// Abbreviated compact keys for a multi-word slug.
///
/// For every leading run of `k` words (`1 <= k < words`), the initials of
/// those words are followed by the remaining words in full:
/// `north_america` → `namerica`,
/// `sub_saharan_africa` → `ssaharanafrica`, `ssafrica`.
#[must_use]
pub fn abbreviations(slug: &str) -> Vec<String> {
    let words: Vec<&str> = slug.split('_').filter(|w| !w.is_empty()).collect();

    (1..words.len())
        .map(|k| {
            let mut key: String = words[..k].iter().filter_map(|w| w.chars().next()).collect();
            for word in &words[k..] {
                key.push_str(word);
            }
            key
        })
        .collect()
}

fn is_dropped(c: char) -> bool {
    matches!(c, '.' | '\'' | '\u{2019}')
}
