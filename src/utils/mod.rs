//! Shared helpers used by the catalog and entity types.

pub mod validation;
