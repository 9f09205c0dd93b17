use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    Json,
};

use shopnum_numbers::NumbersResponse;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn qualify_numbers(
    Extension(services): Extension<Arc<AppServices>>,
    Path(number_id): Path<String>,
    body: Bytes,
) -> Result<Json<NumbersResponse>, ApiError> {
    let request = dto::parse_numbers_request(&body)?;

    let response = services.qualify_numbers(&number_id, request).await?;
    tracing::info!(%number_id, returned = response.numbers.len(), "numbers served");
    Ok(Json(response))
}
