use axum::{
    routing::{get, post},
    Router,
};

pub mod categories;
pub mod numbers;
pub mod system;

/// Router for the catalog and numbers endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/categories/:categoryname/products", get(categories::top_products))
        .route("/numbers/:numberid", post(numbers::qualify_numbers))
}
