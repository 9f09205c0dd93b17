use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    Json,
};

use shopnum_core::DomainError;
use shopnum_products::Product;

use crate::app::dto::TopProductsQuery;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn top_products(
    Extension(services): Extension<Arc<AppServices>>,
    Path(category): Path<String>,
    query: Result<Query<TopProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(query) = query.map_err(|_| DomainError::invalid_parameter("Invalid 'n' parameter"))?;

    let products = services.top_products(&category, query.n.as_deref())?;
    tracing::info!(%category, returned = products.len(), "top products served");
    Ok(Json(products))
}
