use serde::Deserialize;

use shopnum_numbers::NumbersRequest;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /categories/{categoryname}/products`.
///
/// `n` stays raw so that validation (and its error text) lives with the catalog.
#[derive(Debug, Default, Deserialize)]
pub struct TopProductsQuery {
    pub n: Option<String>,
}

/// Parse a numbers request body. Content-Type is not checked; a bare `null`
/// body is an empty request.
pub fn parse_numbers_request(body: &[u8]) -> Result<NumbersRequest, ApiError> {
    serde_json::from_slice::<Option<NumbersRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(ApiError::InvalidRequestBody)
}
