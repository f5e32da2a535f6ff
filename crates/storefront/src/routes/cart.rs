//! Cart and checkout route handlers.
//!
//! The cart rides in the client's session under a fixed key, serialized as
//! the `{productId, quantity}` sequence. Handlers load it, apply one cart
//! aggregate operation, and save it back; products are resolved against the
//! current catalog only when building the response view, so lines whose
//! product has been deleted simply drop out of the view and the totals.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use afrishop_core::cart::Cart;
use afrishop_core::checkout::assemble_order;
use afrishop_core::{CustomerInfo, Order, Product, ProductId, ValidationError};

use crate::error::{AppError, Result};
use crate::services::whatsapp;
use crate::state::AppState;

/// Fixed session key the serialized cart lives under.
pub const CART_SESSION_KEY: &str = "afrishop-cart";

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, defaulting to empty.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(CART_SESSION_KEY)
        .await?
        .unwrap_or_default())
}

/// Save the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(CART_SESSION_KEY, cart).await?;
    Ok(())
}

// =============================================================================
// Request / Response Types
// =============================================================================

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Defaults to one unit.
    pub quantity: Option<u32>,
}

/// Set-quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    /// Zero removes the line.
    pub quantity: u32,
}

/// Remove-line request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// One resolved cart line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: u64,
}

/// The cart as rendered to clients.
///
/// `items` holds only lines whose product still exists; `item_count` counts
/// every unit in the cart, resolved or not, and `total` skips vanished
/// products the same way order assembly does.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub item_count: u32,
    pub total: u64,
}

impl CartView {
    fn build(cart: &Cart, products: &[Product]) -> Self {
        let items = cart
            .items()
            .iter()
            .filter_map(|line| {
                products
                    .iter()
                    .find(|product| product.id == line.product_id)
                    .map(|product| CartLineView {
                        product: product.clone(),
                        quantity: line.quantity,
                        subtotal: u64::from(product.price) * u64::from(line.quantity),
                    })
            })
            .collect();

        Self {
            items,
            item_count: cart.item_count(),
            total: cart.total(products),
        }
    }
}

/// Checkout response: the stored order plus the hand-off link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order: Order,
    pub whatsapp_url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart resolved against the current catalog.
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    let products = state.catalog().list();
    Ok(Json(CartView::build(&cart, &products)))
}

/// Add units of a product to the cart (merge-on-add).
///
/// Deliberately no stock check: whether to block adding an out-of-stock
/// product is a presentation decision made before calling this.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let quantity = request.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::Validation(ValidationError::InvalidQuantity));
    }

    let mut cart = load_cart(&session).await?;
    cart.add_item(request.product_id, quantity);
    save_cart(&session, &cart).await?;

    let products = state.catalog().list();
    Ok(Json(CartView::build(&cart, &products)))
}

/// Set a line's quantity; zero removes the line.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(&request.product_id, request.quantity);
    save_cart(&session, &cart).await?;

    let products = state.catalog().list();
    Ok(Json(CartView::build(&cart, &products)))
}

/// Remove a line from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.remove_item(&request.product_id);
    save_cart(&session, &cart).await?;

    let products = state.catalog().list();
    Ok(Json(CartView::build(&cart, &products)))
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    let products = state.catalog().list();
    Ok(Json(CartView::build(&cart, &products)))
}

/// Complete checkout: assemble the order from the cart, store it, hand off.
///
/// Cart lines referencing deleted products are dropped during assembly, so
/// the stored total always equals the cart total the client was shown. The
/// cart is cleared only after the order is stored.
#[instrument(skip(state, session, customer_info), fields(customer = %customer_info.name))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(customer_info): Json<CustomerInfo>,
) -> Result<impl IntoResponse> {
    let mut cart = load_cart(&session).await?;
    let products = state.catalog().list();

    let draft = assemble_order(&cart, &products, customer_info)?;
    let order = state.orders().create(draft);
    tracing::info!(order_id = %order.id, total = order.total, "Checkout completed");

    let whatsapp_url =
        whatsapp::handoff_url(&order, state.config().whatsapp_number.as_deref());

    cart.clear();
    save_cart(&session, &cart).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            order,
            whatsapp_url,
        }),
    ))
}
