//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Products
//! GET    /api/products         - List products (filter/sort via query string)
//! GET    /api/products/{id}    - Single product
//! POST   /api/products         - Create product (admin)
//! PATCH  /api/products/{id}    - Partial update (admin)
//! DELETE /api/products/{id}    - Delete product (admin)
//!
//! # Orders
//! GET  /api/orders             - List orders (admin)
//! GET  /api/orders/{id}        - Single order
//! POST /api/orders             - Store a client-assembled order draft
//!
//! # Cart (session-backed)
//! GET  /api/cart               - Cart view resolved against the catalog
//! POST /api/cart/add           - Add units of a product (merge-on-add)
//! POST /api/cart/update        - Set a line's quantity (0 removes)
//! POST /api/cart/remove        - Remove a line
//! POST /api/cart/clear         - Empty the cart
//!
//! # Checkout
//! POST /api/checkout           - Assemble and store the order, return the
//!                                WhatsApp hand-off link, clear the cart
//! ```

pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::delete),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/{id}", get(orders::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/cart", cart_routes())
        .route("/api/checkout", post(cart::checkout))
}
