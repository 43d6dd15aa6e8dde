//! Collection document construction.
//!
//! `model` holds the serialized shape of the Postman v2.1 document; `build`
//! folds a validated catalog into it. The builder is a structural transform
//! only — it never inspects parameter values beyond stringifying them.

pub mod build;
pub mod model;

pub use build::{BaseVariable, build_collection};
pub use model::{
    Collection, Folder, FormField, Header, Info, RequestBody, RequestItem, RequestSpec,
    RequestUrl, Variable,
};

/// Schema identifier advertised in the collection `info` block.
pub const POSTMAN_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";
