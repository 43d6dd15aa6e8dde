//! Catalog file model and validation.
//!
//! Loading is strict about schema versions and empty names so the generator
//! cannot silently consume a mismatched or truncated catalog. Duplicate
//! endpoint names and empty parameter maps are cosmetic and accepted as-is.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

// The repository ships a single catalog; reject unexpected versions rather
// than risk emitting a collection from mismatched data. Callers can widen
// the accepted set via env.
const DEFAULT_SCHEMA_VERSION: &str = "dailydose_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "DOSEGEN_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug, Deserialize, Clone)]
/// Full endpoint catalog: collection metadata plus ordered endpoint groups.
pub struct Catalog {
    pub schema_version: String,
    pub collection: CollectionMeta,
    pub base_url: String,
    pub groups: Vec<Group>,
}

#[derive(Debug, Deserialize, Clone)]
/// Name and description surfaced in the collection's `info` block.
pub struct CollectionMeta {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
/// One folder's worth of endpoints; order is significant.
pub struct Group {
    pub name: String,
    pub endpoints: Vec<EndpointDefinition>,
}

#[derive(Debug, Deserialize, Clone)]
/// A single endpoint: url template plus example body parameters.
///
/// `params` keeps file order (serde_json `preserve_order`); values may be
/// any JSON value and are stringified at render time.
pub struct EndpointDefinition {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl Catalog {
    /// Total endpoint count across all groups.
    pub fn endpoint_count(&self) -> usize {
        self.groups.iter().map(|group| group.endpoints.len()).sum()
    }
}

/// Parse a catalog from disk and validate it.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    validate_catalog(&catalog).with_context(|| format!("validating catalog {}", path.display()))?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<()> {
    validate_schema_version(&catalog.schema_version)?;

    if catalog.collection.name.trim().is_empty() {
        bail!("collection.name must not be empty");
    }
    if catalog.base_url.trim().is_empty() {
        bail!("base_url must not be empty");
    }
    if catalog.groups.is_empty() {
        bail!("catalog contains no groups");
    }

    for group in &catalog.groups {
        if group.name.trim().is_empty() {
            bail!("encountered group with no name");
        }
        for endpoint in &group.endpoints {
            if endpoint.name.trim().is_empty() {
                bail!("group '{}' contains an endpoint with no name", group.name);
            }
            if endpoint.url.trim().is_empty() {
                bail!(
                    "endpoint '{}' in group '{}' has an empty url template",
                    endpoint.name,
                    group.name
                );
            }
        }
    }

    Ok(())
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_catalog() -> Catalog {
        serde_json::from_value(json!({
            "schema_version": "dailydose_catalog_v1",
            "collection": {"name": "Test", "description": "test catalog"},
            "base_url": "https://example.com",
            "groups": [{
                "name": "Auth",
                "endpoints": [{
                    "name": "login",
                    "url": "{{user_api_base}}/login",
                    "params": {"mobile": "9874565478"}
                }]
            }]
        }))
        .expect("minimal catalog parses")
    }

    #[test]
    fn minimal_catalog_validates() {
        validate_catalog(&minimal_catalog()).expect("catalog should pass");
    }

    #[test]
    fn schema_version_rejects_unknown_values() {
        assert!(validate_schema_version("dailydose_catalog_v1").is_ok());
        assert!(validate_schema_version("").is_err());
        assert!(validate_schema_version("has spaces").is_err());
        assert!(validate_schema_version("some_other_catalog").is_err());
    }

    #[test]
    fn empty_group_name_is_rejected() {
        let mut catalog = minimal_catalog();
        catalog.groups[0].name = "  ".to_string();
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn empty_endpoint_url_names_the_endpoint() {
        let mut catalog = minimal_catalog();
        catalog.groups[0].endpoints[0].url = String::new();
        let err = validate_catalog(&catalog).expect_err("empty url must fail");
        assert!(format!("{err:#}").contains("login"));
    }

    #[test]
    fn params_preserve_file_order() {
        let endpoint: EndpointDefinition = serde_json::from_value(json!({
            "name": "register_user",
            "url": "{{user_api_base}}/register_user",
            "params": {"zeta": "1", "alpha": "2", "mid": "3"}
        }))
        .unwrap();
        let keys: Vec<&String> = endpoint.params.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }
}
