//! # Product Catalog
//!
//! In-memory product list behind the line-item product selector.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A product that can be picked on an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    /// Wholesale unit price.
    pub price: f64,
}

impl CatalogProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        CatalogProduct {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Description written into a line when this product is selected.
    pub fn line_description(&self) -> String {
        format!("{} (Wholesale)", self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Catalog { products }
    }

    /// The demo product list shipped with the admin UI.
    pub fn sample() -> Self {
        Catalog::new(vec![
            CatalogProduct::new("1", "iPhone 15 Pro", 750.00),
            CatalogProduct::new("2", "Samsung Galaxy S24", 650.00),
            CatalogProduct::new("3", "MacBook Air M3", 999.99),
        ])
    }

    pub fn find(&self, id: &str) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }
}
