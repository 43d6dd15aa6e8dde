use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod collection;
pub mod schema;

pub use catalog::{Catalog, CollectionMeta, EndpointDefinition, Group, load_catalog_from_path};
pub use collection::{
    BaseVariable, Collection, FormField, POSTMAN_SCHEMA_URL, RequestItem, build_collection,
};
pub use schema::CollectionSchema;

const CATALOG_DIR: &str = "catalogs";
const SCHEMA_DIR: &str = "schema";

/// Default output filename, matching what the Postman importer expects.
pub const DEFAULT_OUTPUT_FILE: &str = "DailyDose_API_Collection.postman_collection.json";

fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(CATALOG_DIR).is_dir() && candidate.join(SCHEMA_DIR).is_dir()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the dosegen repository root (the directory holding `catalogs/` and
/// `schema/`).
///
/// Search order: `DOSEGEN_ROOT` env override, upward search from the current
/// executable, upward search from the working directory, then the
/// compile-time hint baked by `build.rs`.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("DOSEGEN_ROOT") {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Some(hint) = option_env!("DOSEGEN_ROOT_HINT") {
        if let Some(root) = repo_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate dosegen repository root. Set DOSEGEN_ROOT to the cloned repository.");
}

/// Path to the bundled endpoint catalog.
pub fn default_catalog_path(repo_root: &Path) -> PathBuf {
    repo_root.join(catalog::DEFAULT_CATALOG_PATH)
}

/// Path to the bundled collection schema.
pub fn default_schema_path(repo_root: &Path) -> PathBuf {
    repo_root
        .join(SCHEMA_DIR)
        .join("postman_collection.schema.json")
}
