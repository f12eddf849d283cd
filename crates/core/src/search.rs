use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::product::{Product, ProductSummary};

/// Optional search criteria; absent fields impose no constraint and
/// supplied fields AND together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Case-insensitive substring matched against name OR description.
    pub query: Option<String>,
    /// Accepted for caller compatibility but never consulted: no
    /// product attribute exists to match it against.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
}

impl SearchFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            if !product.name.to_lowercase().contains(&needle)
                && !product.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub results: Vec<ProductSummary>,
    pub total_results: usize,
}

/// Filters the catalog in insertion order and projects matches to
/// summaries. An empty result set is a normal outcome.
pub fn search(catalog: &Catalog, filter: &SearchFilter) -> SearchOutcome {
    let results: Vec<ProductSummary> = catalog
        .products()
        .iter()
        .filter(|product| filter.matches(product))
        .map(Product::summary)
        .collect();
    let total_results = results.len();

    SearchOutcome { results, total_results }
}
