//! Inventory products and their stock thresholds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ProductId, ProductName};

/// Categories offered by the product form.
pub const PRODUCT_CATEGORIES: [&str; 6] = [
    "Cabelo",
    "Barba",
    "Styling",
    "Finalização",
    "Skincare",
    "Acessórios",
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub quantity: u32,
    /// Stock level at or below which the product is flagged.
    pub minimum_alert: u32,
    pub cost_price: f64,
    pub expiry_date: Option<NaiveDate>,
    pub category: CategoryName,
    #[serde(default)]
    pub description: String,
    /// Relative usage score, 0..=100.
    pub usage_frequency: u32,
}

impl Product {
    /// A product is low on stock once its quantity reaches the alert level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum_alert
    }

    /// Value of the units on hand at cost price.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.cost_price
    }
}

/// Fields accepted when adding a product; usage starts at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub quantity: u32,
    pub minimum_alert: u32,
    pub cost_price: f64,
    pub expiry_date: Option<NaiveDate>,
    pub category: CategoryName,
    pub description: String,
}

impl NewProduct {
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            minimum_alert: self.minimum_alert,
            cost_price: self.cost_price,
            expiry_date: self.expiry_date,
            category: self.category,
            description: self.description,
            usage_frequency: 0,
        }
    }
}

/// Replacement values for an existing product.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub quantity: u32,
    pub minimum_alert: u32,
    pub cost_price: f64,
    pub expiry_date: Option<NaiveDate>,
    pub category: CategoryName,
    pub description: String,
}

impl UpdateProduct {
    pub fn apply(self, product: &mut Product) {
        product.name = self.name;
        product.quantity = self.quantity;
        product.minimum_alert = self.minimum_alert;
        product.cost_price = self.cost_price;
        product.expiry_date = self.expiry_date;
        product.category = self.category;
        product.description = self.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: u32, minimum_alert: u32) -> Product {
        NewProduct {
            name: ProductName::new("Óleo para Barba 30ml").unwrap(),
            quantity,
            minimum_alert,
            cost_price: 35.75,
            expiry_date: NaiveDate::from_ymd_opt(2026, 3, 22),
            category: CategoryName::new("Barba").unwrap(),
            description: String::new(),
        }
        .into_product(ProductId::new("3").unwrap())
    }

    #[test]
    fn low_stock_is_inclusive_of_threshold() {
        assert!(product(4, 5).is_low_stock());
        assert!(product(5, 5).is_low_stock());
        assert!(!product(15, 5).is_low_stock());
    }

    #[test]
    fn new_products_start_unused() {
        assert_eq!(product(1, 1).usage_frequency, 0);
    }
}
