//! Wire-level contract tests for the invocation envelope.
//!
//! These exercise the full pipeline (raw JSON event in, serialized
//! envelope out) and pin the exact shapes the orchestration caller
//! depends on: camelCase field names, numeric prices, and the single
//! `{response: ...}` wrapper.

use serde_json::{json, Value};

use storefront_agent::handle_raw_invocation;
use storefront_core::Catalog;

fn invoke(event: Value) -> Value {
    let catalog = Catalog::seeded();
    let response = handle_raw_invocation(&catalog, &event.to_string());
    serde_json::to_value(response).unwrap()
}

#[test]
fn get_product_details_returns_the_full_wire_record() {
    let output = invoke(json!({
        "actionGroup": "product-info",
        "apiPath": "/getProductDetails",
        "parameters": [{"name": "productId", "value": "prod-002"}]
    }));

    assert_eq!(
        output,
        json!({
            "response": {
                "productId": "prod-002",
                "name": "Smart Blender",
                "description": "Programmable blender with multiple speed settings and preset programs",
                "price": 149.99,
                "inStock": true,
                "features": ["5 speed settings", "Ice crushing", "Smoothie preset", "Soup preset"]
            }
        })
    );
}

#[test]
fn unknown_product_id_returns_the_not_found_shape() {
    let output = invoke(json!({
        "apiPath": "/getProductDetails",
        "parameters": [{"name": "productId", "value": "prod-404"}]
    }));

    assert_eq!(
        output,
        json!({"response": {"error": "Product not found", "productId": "prod-404"}})
    );
}

#[test]
fn missing_product_id_round_trips_as_null() {
    let output = invoke(json!({"apiPath": "/getProductDetails", "parameters": []}));

    assert_eq!(
        output,
        json!({"response": {"error": "Product not found", "productId": null}})
    );
}

#[test]
fn unfiltered_search_lists_all_seeds_in_catalog_order() {
    let output = invoke(json!({"apiPath": "/searchProducts", "parameters": []}));

    assert_eq!(
        output,
        json!({
            "response": {
                "results": [
                    {"productId": "prod-001", "name": "Premium Coffee Maker", "price": 199.99, "inStock": true},
                    {"productId": "prod-002", "name": "Smart Blender", "price": 149.99, "inStock": true},
                    {"productId": "prod-003", "name": "Stainless Steel Toaster", "price": 79.99, "inStock": false}
                ],
                "totalResults": 3
            }
        })
    );
}

#[test]
fn search_above_every_price_yields_the_empty_outcome() {
    let output = invoke(json!({
        "apiPath": "/searchProducts",
        "parameters": [{"name": "minPrice", "value": "200"}]
    }));

    assert_eq!(output, json!({"response": {"results": [], "totalResults": 0}}));
}

#[test]
fn duplicate_parameter_names_keep_the_later_value() {
    let output = invoke(json!({
        "apiPath": "/getProductDetails",
        "parameters": [
            {"name": "productId", "value": "prod-001"},
            {"name": "productId", "value": "prod-404"}
        ]
    }));

    assert_eq!(
        output,
        json!({"response": {"error": "Product not found", "productId": "prod-404"}})
    );
}

#[test]
fn unsupported_path_echoes_the_path_in_the_error_shape() {
    let output = invoke(json!({"apiPath": "/deleteProduct", "parameters": []}));

    assert_eq!(
        output,
        json!({"response": {"error": "Unsupported API path", "apiPath": "/deleteProduct"}})
    );
}

#[test]
fn non_numeric_price_resolves_to_the_generic_error_envelope() {
    let output = invoke(json!({
        "apiPath": "/searchProducts",
        "parameters": [{"name": "minPrice", "value": "abc"}]
    }));

    let error = output["response"]["error"].as_str().unwrap();
    assert!(error.starts_with("Error processing request: "), "got {error}");
    assert!(output["response"].get("results").is_none());
}

#[test]
fn search_filters_combine_over_the_wire() {
    let output = invoke(json!({
        "apiPath": "/searchProducts",
        "parameters": [
            {"name": "query", "value": "blender"},
            {"name": "category", "value": "kitchen"},
            {"name": "minPrice", "value": "100"},
            {"name": "maxPrice", "value": "150"}
        ]
    }));

    assert_eq!(
        output,
        json!({
            "response": {
                "results": [
                    {"productId": "prod-002", "name": "Smart Blender", "price": 149.99, "inStock": true}
                ],
                "totalResults": 1
            }
        })
    );
}
