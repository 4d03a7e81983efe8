//! DTOs for the inventory panel.

use serde::Serialize;

use crate::domain::product::Product;

#[derive(Debug, Serialize)]
pub struct InventoryPageData {
    pub query: String,
    pub products: Vec<Product>,
    /// Every product at or below its alert level, ignoring the query.
    pub low_stock: Vec<Product>,
    pub most_used: Vec<Product>,
    /// `sum(quantity * cost_price)` over the full inventory.
    pub stock_value: f64,
    pub categories: Vec<String>,
}
