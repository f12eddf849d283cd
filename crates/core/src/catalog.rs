use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};

/// Read-only product set, held in insertion order. Built once at
/// process start; no mutation API is exposed.
#[derive(Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fixed demo catalog served by the action group.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product {
                product_id: ProductId("prod-001".to_owned()),
                name: "Premium Coffee Maker".to_owned(),
                description: "High-end coffee maker with temperature control and built-in grinder"
                    .to_owned(),
                price: Decimal::new(19_999, 2),
                in_stock: true,
                features: vec![
                    "Temperature control".to_owned(),
                    "Built-in grinder".to_owned(),
                    "Timer".to_owned(),
                    "12-cup capacity".to_owned(),
                ],
            },
            Product {
                product_id: ProductId("prod-002".to_owned()),
                name: "Smart Blender".to_owned(),
                description: "Programmable blender with multiple speed settings and preset programs"
                    .to_owned(),
                price: Decimal::new(14_999, 2),
                in_stock: true,
                features: vec![
                    "5 speed settings".to_owned(),
                    "Ice crushing".to_owned(),
                    "Smoothie preset".to_owned(),
                    "Soup preset".to_owned(),
                ],
            },
            Product {
                product_id: ProductId("prod-003".to_owned()),
                name: "Stainless Steel Toaster".to_owned(),
                description: "4-slice toaster with wide slots and bagel setting".to_owned(),
                price: Decimal::new(7_999, 2),
                in_stock: false,
                features: vec![
                    "4 slots".to_owned(),
                    "Bagel setting".to_owned(),
                    "Defrost function".to_owned(),
                    "High-lift lever".to_owned(),
                ],
            },
        ])
    }

    /// Point lookup. A miss is a normal outcome, not an error.
    pub fn get(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.product_id == product_id)
    }

    /// Products in catalog insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
