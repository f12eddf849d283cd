use serde::{Deserialize, Serialize};

use storefront_core::{Product, SearchOutcome};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const UNSUPPORTED_API_PATH: &str = "Unsupported API path";

/// One invocation from the orchestration caller. Fields the caller
/// omits default to empty, matching the caller's loose contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationEvent {
    /// Opaque action-group identifier; passed through unused.
    pub action_group: String,
    pub api_path: String,
    pub parameters: Vec<Parameter>,
}

/// One name/value pair from the event's ordered parameter list. A
/// null value is legal and passed through as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: Some(value.into()) }
    }
}

/// The result of one dispatched operation. Untagged on the wire: the
/// caller distinguishes outcomes by shape, not by a tag field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Product(Product),
    NotFound {
        error: String,
        #[serde(rename = "productId")]
        product_id: Option<String>,
    },
    Search(SearchOutcome),
    UnsupportedPath {
        error: String,
        #[serde(rename = "apiPath")]
        api_path: String,
    },
    Error {
        error: String,
    },
}

impl ApiResponse {
    pub fn not_found(product_id: Option<String>) -> Self {
        Self::NotFound { error: PRODUCT_NOT_FOUND.to_owned(), product_id }
    }

    pub fn unsupported_path(api_path: impl Into<String>) -> Self {
        Self::UnsupportedPath { error: UNSUPPORTED_API_PATH.to_owned(), api_path: api_path.into() }
    }

    pub fn processing_error(fault: impl std::fmt::Display) -> Self {
        Self::Error { error: format!("Error processing request: {fault}") }
    }
}

/// Outer wrapper; the envelope is the entire output of an invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgentResponse {
    pub response: ApiResponse,
}
