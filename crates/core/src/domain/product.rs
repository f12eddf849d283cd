use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Full catalog record. Field names follow the wire contract of the
/// orchestration caller, hence camelCase on the serialized form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub in_stock: bool,
    pub features: Vec<String>,
}

/// Reduced projection returned by search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub in_stock: bool,
}

impl Product {
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            price: self.price,
            in_stock: self.in_stock,
        }
    }
}
