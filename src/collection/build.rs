//! Catalog-to-collection transform.
//!
//! One pass over the catalog, group order preserved. The only failure mode
//! is a url template that references neither base variable; the whole build
//! fails before anything is written, with the offending endpoint named in
//! the error chain.

use crate::catalog::{Catalog, EndpointDefinition, Group};
use crate::collection::model::{
    Collection, Folder, FormField, Header, Info, RequestBody, RequestItem, RequestSpec,
    RequestUrl, Variable,
};
use crate::collection::POSTMAN_SCHEMA_URL;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use uuid::Uuid;

const REQUEST_METHOD: &str = "POST";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The two backend surfaces endpoints belong to. Resolved from the url
/// template once, up front; everything downstream dispatches on the variant
/// instead of re-matching strings.
pub enum BaseVariable {
    UserApi,
    RiderApi,
}

impl BaseVariable {
    pub const ALL: [BaseVariable; 2] = [BaseVariable::UserApi, BaseVariable::RiderApi];

    /// Collection variable key for this surface.
    pub const fn key(self) -> &'static str {
        match self {
            BaseVariable::UserApi => "user_api_base",
            BaseVariable::RiderApi => "rider_api_base",
        }
    }

    /// Placeholder form used in url templates.
    pub const fn marker(self) -> &'static str {
        match self {
            BaseVariable::UserApi => "{{user_api_base}}",
            BaseVariable::RiderApi => "{{rider_api_base}}",
        }
    }

    /// Variable value, interpolated over the `base_url` variable.
    pub const fn variable_value(self) -> &'static str {
        match self {
            BaseVariable::UserApi => "{{base_url}}/app/v1/api",
            BaseVariable::RiderApi => "{{base_url}}/rider/app/v1/api",
        }
    }

    /// Fixed three-token host decomposition used by the Postman url block.
    pub fn host_tokens(self) -> Vec<String> {
        vec!["{{".to_string(), self.key().to_string(), "}}".to_string()]
    }

    /// Split a url template into its base variable and path segments.
    ///
    /// Strips the matching marker and the `/` that follows it, then splits
    /// the remainder on `/`. An empty remainder yields no segments. A
    /// template matching neither marker is malformed and fails the build.
    pub fn split_template(template: &str) -> Result<(Self, Vec<String>)> {
        for base in Self::ALL {
            if let Some(rest) = template.strip_prefix(base.marker()) {
                let rest = rest.strip_prefix('/').unwrap_or(rest);
                let segments = if rest.is_empty() {
                    Vec::new()
                } else {
                    rest.split('/').map(str::to_string).collect()
                };
                return Ok((base, segments));
            }
        }
        bail!(
            "url template '{template}' references neither {{{{user_api_base}}}} nor {{{{rider_api_base}}}}"
        );
    }
}

/// Fold a validated catalog into the collection document.
///
/// Deterministic apart from the freshly generated exporter id.
pub fn build_collection(catalog: &Catalog) -> Result<Collection> {
    let mut variable = vec![Variable {
        key: "base_url".to_string(),
        value: catalog.base_url.clone(),
        variable_type: "string".to_string(),
    }];
    for base in BaseVariable::ALL {
        variable.push(Variable {
            key: base.key().to_string(),
            value: base.variable_value().to_string(),
            variable_type: "string".to_string(),
        });
    }

    let item = catalog
        .groups
        .iter()
        .map(render_group)
        .collect::<Result<Vec<_>>>()?;

    Ok(Collection {
        info: Info {
            name: catalog.collection.name.clone(),
            description: catalog.collection.description.clone(),
            schema: POSTMAN_SCHEMA_URL.to_string(),
            exporter_id: Uuid::new_v4().to_string(),
        },
        variable,
        item,
    })
}

fn render_group(group: &Group) -> Result<Folder> {
    let item = group
        .endpoints
        .iter()
        .map(render_request)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("rendering group '{}'", group.name))?;
    Ok(Folder {
        name: group.name.clone(),
        item,
    })
}

fn render_request(endpoint: &EndpointDefinition) -> Result<RequestItem> {
    let (base, path) = BaseVariable::split_template(&endpoint.url)
        .with_context(|| format!("endpoint '{}'", endpoint.name))?;

    let urlencoded = endpoint
        .params
        .iter()
        .map(|(key, value)| FormField {
            key: key.clone(),
            value: stringify(value),
            field_type: "text".to_string(),
        })
        .collect();

    Ok(RequestItem {
        name: endpoint.name.clone(),
        request: RequestSpec {
            method: REQUEST_METHOD.to_string(),
            // The backend advertises JSON while the body is urlencoded form
            // fields. Known quirk of the upstream artifact; kept as-is.
            header: vec![Header {
                key: "Content-Type".to_string(),
                value: "application/json".to_string(),
            }],
            body: RequestBody {
                mode: "urlencoded".to_string(),
                urlencoded,
            },
            url: RequestUrl {
                raw: endpoint.url.clone(),
                host: base.host_tokens(),
                path,
            },
            description: endpoint.description.clone(),
        },
    })
}

// Strings pass through untouched; anything else renders as its compact JSON
// text (an empty placeholder list becomes "[]").
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
