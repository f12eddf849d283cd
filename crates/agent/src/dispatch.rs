use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{error, info};

use storefront_core::{search, Catalog, ProductId, SearchFilter};

use crate::envelope::{AgentResponse, ApiResponse, InvocationEvent, Parameter};

const GET_PRODUCT_DETAILS: &str = "/getProductDetails";
const SEARCH_PRODUCTS: &str = "/searchProducts";

/// Faults below the dispatch boundary. Never visible to the caller:
/// `handle_invocation` converts them into the generic error envelope.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid numeric value {value:?} for parameter {name}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
    #[error("malformed invocation event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
}

/// Flattens the ordered parameter list into a map. A repeated name
/// keeps its later occurrence.
pub fn flatten_parameters(parameters: &[Parameter]) -> HashMap<String, Option<String>> {
    let mut flattened = HashMap::with_capacity(parameters.len());
    for parameter in parameters {
        flattened.insert(parameter.name.clone(), parameter.value.clone());
    }
    flattened
}

fn text_param(params: &HashMap<String, Option<String>>, name: &str) -> Option<String> {
    params.get(name).cloned().flatten().filter(|value| !value.is_empty())
}

/// Numeric parameters count as supplied only when present and
/// non-empty; an empty string is absent, not zero.
fn decimal_param(
    params: &HashMap<String, Option<String>>,
    name: &'static str,
) -> Result<Option<Decimal>, DispatchError> {
    match text_param(params, name) {
        Some(value) => Decimal::from_str(&value)
            .map(Some)
            .map_err(|source| DispatchError::InvalidNumber { name, value, source }),
        None => Ok(None),
    }
}

fn get_product_details(catalog: &Catalog, product_id: Option<String>) -> ApiResponse {
    if let Some(id) = &product_id {
        if let Some(product) = catalog.get(&ProductId(id.clone())) {
            return ApiResponse::Product(product.clone());
        }
    }
    ApiResponse::not_found(product_id)
}

fn dispatch(catalog: &Catalog, event: &InvocationEvent) -> Result<ApiResponse, DispatchError> {
    let params = flatten_parameters(&event.parameters);

    match event.api_path.as_str() {
        GET_PRODUCT_DETAILS => {
            // Passed through as-is; an absent id is a normal miss.
            let product_id = params.get("productId").cloned().flatten();
            Ok(get_product_details(catalog, product_id))
        }
        SEARCH_PRODUCTS => {
            let filter = SearchFilter {
                query: text_param(&params, "query"),
                category: text_param(&params, "category"),
                min_price: decimal_param(&params, "minPrice")?,
                max_price: decimal_param(&params, "maxPrice")?,
            };
            Ok(ApiResponse::Search(search(catalog, &filter)))
        }
        other => Ok(ApiResponse::unsupported_path(other)),
    }
}

/// Handles one invocation end to end. This is the single fault
/// boundary: any `DispatchError` resolves to the generic error
/// envelope rather than propagating.
pub fn handle_invocation(catalog: &Catalog, event: &InvocationEvent) -> AgentResponse {
    info!(action_group = %event.action_group, api_path = %event.api_path, "received invocation");

    let response = match dispatch(catalog, event) {
        Ok(response) => response,
        Err(fault) => {
            error!(%fault, "invocation failed at dispatch boundary");
            ApiResponse::processing_error(&fault)
        }
    };

    info!(?response, "returning response");
    AgentResponse { response }
}

/// Decodes a raw event document and handles it. A malformed document
/// is routed through the same fault boundary as any other processing
/// fault.
pub fn handle_raw_invocation(catalog: &Catalog, raw: &str) -> AgentResponse {
    match serde_json::from_str::<InvocationEvent>(raw).map_err(DispatchError::from) {
        Ok(event) => handle_invocation(catalog, &event),
        Err(fault) => {
            error!(%fault, "invocation event failed to decode");
            AgentResponse { response: ApiResponse::processing_error(&fault) }
        }
    }
}
