//! Product route handlers: public browsing plus the admin CRUD surface.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use afrishop_core::query::{ProductQuery, SortKey};
use afrishop_core::{NewProduct, Product, ProductId, ProductUpdate};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Browse criteria, as they arrive on the query string.
///
/// `category` is a comma-separated list of slugs. Unknown category or sort
/// values are rejected here, before the pipeline runs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub in_stock: Option<bool>,
    pub sort: Option<SortKey>,
}

impl ProductListParams {
    fn into_query(self) -> Result<ProductQuery> {
        let categories = match self.category.as_deref() {
            Some(list) => ProductQuery::parse_categories(list)?,
            None => Vec::new(),
        };
        Ok(ProductQuery {
            search: self.q.unwrap_or_default(),
            categories,
            min_price: self.min_price.unwrap_or(0),
            max_price: self.max_price.unwrap_or(u32::MAX),
            in_stock_only: self.in_stock.unwrap_or(false),
            sort: self.sort.unwrap_or_default(),
        })
    }
}

/// List products, filtered and sorted for display.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<Json<Vec<Product>>> {
    let query = params.into_query()?;
    let products = state.catalog().list();
    Ok(Json(query.apply(&products)))
}

/// Fetch a single product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Product not found"))
}

/// Create a product.
#[instrument(skip(state, input), fields(name = %input.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> Result<impl IntoResponse> {
    let product = state.catalog().create(input)?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Partially update a product.
#[instrument(skip(state, update))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .update(&id, update)?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Product not found"))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> Result<StatusCode> {
    if state.catalog().delete(&id) {
        tracing::info!(product_id = %id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Product not found"))
    }
}
