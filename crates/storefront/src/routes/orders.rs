//! Order route handlers.
//!
//! Orders are append-only: clients submit a draft, the store assigns the
//! identifier, `pending` status, and timestamp. There is no endpoint that
//! advances an order past `pending`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::instrument;

use afrishop_core::{NewOrder, Order, OrderId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all orders.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders().list())
}

/// Fetch a single order.
pub async fn show(State(state): State<AppState>, Path(id): Path<OrderId>) -> Result<Json<Order>> {
    state
        .orders()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Order not found"))
}

/// Store a client-assembled order draft.
///
/// The draft is validated in full: customer details, positive quantities,
/// and a total that matches the sum of its lines.
#[instrument(skip(state, draft), fields(customer = %draft.customer_info.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<NewOrder>,
) -> Result<impl IntoResponse> {
    draft.validate()?;
    let order = state.orders().create(draft);
    tracing::info!(order_id = %order.id, total = order.total, "Order created");
    Ok((StatusCode::CREATED, Json(order)))
}
