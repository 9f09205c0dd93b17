use std::sync::Arc;

use shopnum_infra::external::{HttpNumberSource, NumberSource};
use shopnum_numbers::{NumbersRequest, NumbersResponse, run_pipeline};
use shopnum_products::{Catalog, Product, parse_count};

use crate::app::errors::ApiError;
use crate::config::ApiConfig;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    numbers: Arc<dyn NumberSource>,
}

impl AppServices {
    pub fn new(catalog: Catalog, numbers: Arc<dyn NumberSource>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            numbers,
        }
    }

    /// Top-priced products of a category; `raw_n` is the unparsed `n` query value.
    pub fn top_products(&self, category: &str, raw_n: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let n = parse_count(raw_n)?;
        Ok(self.catalog.top_n_by_category(category, n)?)
    }

    /// Fetch the list for `number_id` upstream and run it through the qualifier pipeline.
    ///
    /// Trial division over upstream values can be slow, so the pipeline runs on
    /// the blocking pool and only this request waits for it.
    pub async fn qualify_numbers(
        &self,
        number_id: &str,
        request: NumbersRequest,
    ) -> Result<NumbersResponse, ApiError> {
        let fetched = self.numbers.fetch(number_id).await?;
        let response = tokio::task::spawn_blocking(move || run_pipeline(&fetched, &request)).await?;
        Ok(response)
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("catalog_len", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

/// Production wiring: fixture catalog + HTTP upstream.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let numbers = HttpNumberSource::new(config.numbers_base_url.clone(), config.upstream_timeout)?;
    tracing::info!(
        base_url = numbers.base_url(),
        timeout = ?config.upstream_timeout,
        "numbers upstream configured"
    );
    Ok(AppServices::new(Catalog::fixture(), Arc::new(numbers)))
}
