//! Bundled collection-schema compilation and validation.
//!
//! The emitted document is checked against a structural JSON Schema
//! (`schema/postman_collection.schema.json`) so regressions in the document
//! shape are caught without importing into Postman.

use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Compiled structural schema for the collection document.
pub struct CollectionSchema {
    compiled: JSONSchema,
}

impl CollectionSchema {
    /// Load and compile the schema from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let schema: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;

        // The compiled validator borrows the schema value for its lifetime;
        // leak one copy per load so the schema can outlive this scope.
        let schema: &'static Value = Box::leak(Box::new(schema));
        let compiled = JSONSchema::compile(schema)
            .with_context(|| format!("compiling schema {}", path.display()))?;

        Ok(Self { compiled })
    }

    /// Validate a serialized collection, collecting every violation.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("collection failed schema validation:\n{}", details);
        }
        Ok(())
    }
}
