//! Endpoint catalog wiring.
//!
//! This module wraps the endpoint catalogs on disk (for example
//! `catalogs/dailydose_v1.json`) so the builder consumes a validated,
//! strongly-typed table instead of literal code. Types here mirror the
//! catalog file fields; group and endpoint order in the file is the order
//! rendered into the collection.

pub mod model;

pub use model::{Catalog, CollectionMeta, EndpointDefinition, Group, load_catalog_from_path};

/// Default relative path to the bundled endpoint catalog.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/dailydose_v1.json";
