//! Inventory panel: stock list, low-stock alerts and product dialogs.

use crate::domain::product::{NewProduct, PRODUCT_CATEGORIES, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::dto::Notice;
use crate::dto::inventory::InventoryPageData;
use crate::forms::product::ProductForm;
use crate::repository::{ProductReader, ProductWriter};
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};
use crate::stats::{round2, sum_by, top_n_by};

/// Products at or below their alert level, in inventory order.
pub fn low_stock(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.is_low_stock())
        .cloned()
        .collect()
}

/// Form categories followed by any other category already in use.
fn known_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = PRODUCT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for product in products {
        if !categories.iter().any(|c| c == product.category.as_str()) {
            categories.push(product.category.as_str().to_string());
        }
    }
    categories
}

/// Builds the inventory panel.
///
/// Alerts, usage ranking and stock value always cover the full inventory;
/// only the product table follows `query`.
pub fn load_inventory<R>(
    repo: &R,
    query: Option<&str>,
    most_used_limit: usize,
) -> ServiceResult<InventoryPageData>
where
    R: ProductReader + ?Sized,
{
    let query = query_or_empty(query);

    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to list products: {err}");
        err
    })?;

    let low_stock = low_stock(&products);
    if !low_stock.is_empty() {
        log::warn!("{} products are low on stock", low_stock.len());
    }

    Ok(InventoryPageData {
        most_used: top_n_by(&products, most_used_limit, |p| p.usage_frequency),
        stock_value: round2(sum_by(&products, Product::stock_value)),
        categories: known_categories(&products),
        low_stock,
        products: filter_records(products, &query),
        query,
    })
}

/// Loads one product to prefill the edit dialog.
pub fn get_product<R>(repo: &R, product_id: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product_id = ProductId::new(product_id)?;

    repo.get_product_by_id(&product_id)
        .map_err(|err| {
            log::error!("Failed to load product {product_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

pub fn add_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Notice>
where
    R: ProductWriter + ?Sized,
{
    let new_product = NewProduct::try_from(form).map_err(|err| {
        log::warn!("Rejected product form: {err}");
        ServiceError::from(err)
    })?;

    let product = repo.create_product(&new_product).map_err(|err| {
        log::error!("Failed to add a product: {err}");
        err
    })?;

    Ok(Notice::success(
        "Produto adicionado",
        format!("{} foi adicionado ao inventário.", product.name),
    ))
}

pub fn update_product<R>(repo: &R, product_id: &str, form: ProductForm) -> ServiceResult<Notice>
where
    R: ProductWriter + ?Sized,
{
    let product_id = ProductId::new(product_id)?;
    let updates = UpdateProduct::try_from(form).map_err(|err| {
        log::warn!("Rejected product form: {err}");
        ServiceError::from(err)
    })?;

    let product = repo.update_product(&product_id, &updates).map_err(|err| {
        log::error!("Failed to update product {product_id}: {err}");
        err
    })?;

    Ok(Notice::success(
        "Produto atualizado",
        format!("{} foi atualizado com sucesso.", product.name),
    ))
}

pub fn delete_product<R>(repo: &R, product_id: &str) -> ServiceResult<Notice>
where
    R: ProductWriter + ?Sized,
{
    let product_id = ProductId::new(product_id)?;

    let product = repo.delete_product(&product_id).map_err(|err| {
        log::error!("Failed to delete product {product_id}: {err}");
        err
    })?;

    Ok(Notice::destructive(
        "Produto removido",
        format!("{} foi removido do inventário.", product.name),
    ))
}
