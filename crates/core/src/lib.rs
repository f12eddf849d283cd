//! Storefront catalog core
//!
//! Domain model and query logic for the product-info action group:
//! the static product catalog, point lookups by id, and filtered
//! search with summary projection. Everything here is pure and
//! synchronous; the invocation envelope lives in `storefront-agent`.

pub mod catalog;
pub mod domain;
pub mod search;

pub use catalog::Catalog;
pub use domain::product::{Product, ProductId, ProductSummary};
pub use search::{search, SearchFilter, SearchOutcome};
