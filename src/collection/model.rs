//! Serialized shape of the Postman collection document.
//!
//! Field names and ordering match the v2.1 exchange format; struct order is
//! the key order in the emitted JSON.

use serde::Serialize;

#[derive(Debug, Serialize)]
/// Top-level collection document.
pub struct Collection {
    pub info: Info,
    pub variable: Vec<Variable>,
    pub item: Vec<Folder>,
}

impl Collection {
    /// Total request count across all folders, for the CLI summary.
    pub fn request_count(&self) -> usize {
        self.item.iter().map(|folder| folder.item.len()).sum()
    }
}

#[derive(Debug, Serialize)]
pub struct Info {
    pub name: String,
    pub description: String,
    pub schema: String,
    /// Freshly generated UUID on every build; the one non-deterministic field.
    #[serde(rename = "_exporter_id")]
    pub exporter_id: String,
}

#[derive(Debug, Serialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub variable_type: String,
}

#[derive(Debug, Serialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<RequestItem>,
}

#[derive(Debug, Serialize)]
pub struct RequestItem {
    pub name: String,
    pub request: RequestSpec,
}

#[derive(Debug, Serialize)]
pub struct RequestSpec {
    pub method: String,
    pub header: Vec<Header>,
    pub body: RequestBody,
    pub url: RequestUrl,
    /// Attached verbatim when the catalog endpoint carries one; absent
    /// otherwise, never null or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct RequestBody {
    pub mode: String,
    pub urlencoded: Vec<FormField>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FormField {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Debug, Serialize)]
pub struct RequestUrl {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}
