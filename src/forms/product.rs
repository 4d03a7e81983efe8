use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{CategoryName, ProductName};
use crate::forms::{FormError, parse_number_or_zero, parse_optional_date};

#[derive(Debug, Default, Deserialize, Validate)]
/// Add/edit product dialog. Numeric fields are raw text.
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub minimum_alert: String,
    #[serde(default)]
    pub cost_price: String,
    /// `YYYY-MM-DD`, may be blank.
    #[serde(default)]
    pub expiry_date: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewProduct {
            name: ProductName::new(&form.name).map_err(|_| FormError::InvalidName)?,
            quantity: parse_number_or_zero(&form.quantity),
            minimum_alert: parse_number_or_zero(&form.minimum_alert),
            cost_price: parse_number_or_zero::<f64>(&form.cost_price).max(0.0),
            expiry_date: parse_optional_date(&form.expiry_date)?,
            category: CategoryName::new(&form.category).map_err(|_| FormError::InvalidName)?,
            description: form.description.trim().to_string(),
        })
    }
}

impl TryFrom<ProductForm> for UpdateProduct {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        let NewProduct {
            name,
            quantity,
            minimum_alert,
            cost_price,
            expiry_date,
            category,
            description,
        } = NewProduct::try_from(form)?;

        Ok(UpdateProduct {
            name,
            quantity,
            minimum_alert,
            cost_price,
            expiry_date,
            category,
            description,
        })
    }
}
