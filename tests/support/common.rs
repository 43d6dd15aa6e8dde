#![allow(dead_code)]

use dosegen::Catalog;
use serde_json::{Value, json};
use std::path::PathBuf;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_path() -> PathBuf {
    repo_root().join("catalogs/dailydose_v1.json")
}

pub fn schema_path() -> PathBuf {
    repo_root().join("schema/postman_collection.schema.json")
}

/// Small two-group catalog covering both backend surfaces.
pub fn sample_catalog_value() -> Value {
    json!({
        "schema_version": "dailydose_catalog_v1",
        "collection": {
            "name": "Sample Collection",
            "description": "fixture catalog"
        },
        "base_url": "https://example.com",
        "groups": [
            {
                "name": "Auth",
                "endpoints": [
                    {
                        "name": "login",
                        "url": "{{user_api_base}}/login",
                        "description": "Login with mobile number",
                        "params": {"mobile": "9874565478", "fcm_id": "FCM_ID"}
                    },
                    {
                        "name": "get_login_identity",
                        "url": "{{user_api_base}}/get_login_identity",
                        "params": {}
                    }
                ]
            },
            {
                "name": "Rider",
                "endpoints": [
                    {
                        "name": "get_rider_details",
                        "url": "{{rider_api_base}}/get_rider_details",
                        "params": {"id": "15"}
                    }
                ]
            }
        ]
    })
}

pub fn sample_catalog() -> Catalog {
    serde_json::from_value(sample_catalog_value()).expect("sample catalog parses")
}
