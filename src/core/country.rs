use serde::{Deserialize, Serialize};

use crate::core::identifier::Identity;
use crate::core::types::Slug;

/// A country referenced by regions through its two-letter code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Lowercase ISO 3166-1 alpha-2 code
    pub code: String,

    /// English display name
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into().to_ascii_lowercase(),
            name: name.into(),
        }
    }

    /// Canonical slug of the display name (e.g. `united_states`)
    #[must_use]
    pub fn slug(&self) -> Slug {
        Slug::from_name(&self.name)
    }
}

impl Identity for Country {
    fn identity_key(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
