//! Typed calls for every endpoint the console uses.
//!
//! Each function goes through [`ApiClient`], so the bearer credential is
//! attached by the gateway rather than by the call sites. Off-browser every
//! call resolves to [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as [`ApiError`]; pages decide whether to show a message,
//! keep previous data, or simply log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiClient, ApiError, Method};
use super::types::{
    Category, HistoryEntry, Id, LoginRequest, LoginResponse, NewCategory, NewTable, Order, OrderStatus,
    OrderStatusUpdate, Product, Table, TableOverview, TableStatus, TableStatusUpdate,
};

pub const LOGIN_PATH: &str = "/auth/login";
pub const TABLE_OVERVIEW_PATH: &str = "/pedidos/mesas/ultimo";
pub const HISTORY_PATH: &str = "/pedidos/historico";
pub const TABLES_PATH: &str = "/mesas";
pub const PRODUCTS_PATH: &str = "/produtos";
pub const CATEGORIES_PATH: &str = "/categorias";

pub fn order_endpoint(order_id: &Id) -> String {
    format!("/pedidos/{order_id}")
}

pub fn table_endpoint(table_id: &Id) -> String {
    format!("{TABLES_PATH}/{table_id}")
}

pub fn product_endpoint(product_id: &Id) -> String {
    format!("{PRODUCTS_PATH}/{product_id}")
}

pub fn category_endpoint(category_id: &Id) -> String {
    format!("{CATEGORIES_PATH}/{category_id}")
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token. The caller hands the token to
/// the session store, which validates it.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<String, ApiError> {
    let body = LoginRequest { email, password };
    let resp: LoginResponse = api.send_json(Method::Post, LOGIN_PATH, &body).await?;
    Ok(resp.access_token)
}

// =============================================================================
// ORDERS
// =============================================================================

pub async fn fetch_table_overview(api: &ApiClient) -> Result<Vec<TableOverview>, ApiError> {
    api.get_json(TABLE_OVERVIEW_PATH).await
}

pub async fn fetch_order(api: &ApiClient, order_id: &Id) -> Result<Order, ApiError> {
    api.get_json(&order_endpoint(order_id)).await
}

pub async fn update_order_status(api: &ApiClient, order_id: &Id, status: OrderStatus) -> Result<(), ApiError> {
    api.send(Method::Patch, &order_endpoint(order_id), Some(&OrderStatusUpdate { status }))
        .await
}

pub async fn fetch_history(api: &ApiClient) -> Result<Vec<HistoryEntry>, ApiError> {
    api.get_json(HISTORY_PATH).await
}

// =============================================================================
// TABLES
// =============================================================================

pub async fn fetch_tables(api: &ApiClient) -> Result<Vec<Table>, ApiError> {
    api.get_json(TABLES_PATH).await
}

pub async fn create_table(api: &ApiClient, numero: i64) -> Result<(), ApiError> {
    api.send(Method::Post, TABLES_PATH, Some(&NewTable { numero })).await
}

/// Mark a table as free again, closing its current service.
pub async fn release_table(api: &ApiClient, table_id: &Id) -> Result<(), ApiError> {
    let body = TableStatusUpdate { status: TableStatus::Livre };
    api.send(Method::Patch, &table_endpoint(table_id), Some(&body)).await
}

pub async fn delete_table(api: &ApiClient, table_id: &Id) -> Result<(), ApiError> {
    api.send::<()>(Method::Delete, &table_endpoint(table_id), None).await
}

// =============================================================================
// CATALOG
// =============================================================================

pub async fn fetch_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get_json(PRODUCTS_PATH).await
}

pub async fn fetch_product(api: &ApiClient, product_id: &Id) -> Result<Product, ApiError> {
    api.get_json(&product_endpoint(product_id)).await
}

pub async fn delete_product(api: &ApiClient, product_id: &Id) -> Result<(), ApiError> {
    api.send::<()>(Method::Delete, &product_endpoint(product_id), None).await
}

/// Method and path for a product save: create when `product_id` is `None`.
pub fn product_save_target(product_id: Option<&Id>) -> (Method, String) {
    match product_id {
        Some(id) => (Method::Patch, product_endpoint(id)),
        None => (Method::Post, PRODUCTS_PATH.to_owned()),
    }
}

/// Create or update a product as `multipart/form-data`.
#[cfg(feature = "hydrate")]
pub async fn save_product(
    api: &ApiClient,
    product_id: Option<&Id>,
    fields: &[(&'static str, String)],
    image: Option<&web_sys::File>,
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".into()))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::Network(format!("form field {name} rejected")))?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("image attachment rejected".into()))?;
    }
    let (method, path) = product_save_target(product_id);
    api.send_form(method, &path, form).await
}

pub async fn fetch_categories(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get_json(CATEGORIES_PATH).await
}

pub async fn create_category(api: &ApiClient, nome: &str) -> Result<(), ApiError> {
    api.send(Method::Post, CATEGORIES_PATH, Some(&NewCategory { nome: nome.to_owned() }))
        .await
}

pub async fn delete_category(api: &ApiClient, category_id: &Id) -> Result<(), ApiError> {
    api.send::<()>(Method::Delete, &category_endpoint(category_id), None).await
}
