//! Read-only product catalog and the top-N-by-price query.

use shopnum_core::{DomainError, DomainResult};

use crate::product::Product;

/// Parse the requested result count.
///
/// Missing or non-numeric input and non-positive values are rejected. This
/// runs before any catalog lookup, so a bad count wins over an unknown category.
pub fn parse_count(raw: Option<&str>) -> DomainResult<usize> {
    let n: i64 = raw
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| DomainError::invalid_parameter("Invalid 'n' parameter"))?;

    if n <= 0 {
        return Err(DomainError::invalid_parameter(
            "'n' parameter must be greater than zero",
        ));
    }

    usize::try_from(n).map_err(|_| DomainError::invalid_parameter("Invalid 'n' parameter"))
}

/// Immutable product list, built once at startup and shared by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog the service ships with.
    pub fn fixture() -> Self {
        Self::new(vec![
            Product::new(1, "Product 1", "Electronics", 500.0),
            Product::new(2, "Product 2", "Clothing", 50.0),
            Product::new(3, "Product 3", "Electronics", 800.0),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Return up to `n` products of `category`, most expensive first.
    ///
    /// Equal prices keep catalog order. Asking for more than the category
    /// holds returns everything in it; an empty category is `NotFound`.
    pub fn top_n_by_category(&self, category: &str, n: usize) -> DomainResult<Vec<Product>> {
        let mut matching: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect();

        if matching.is_empty() {
            return Err(DomainError::not_found(
                "No products found in the specified category",
            ));
        }

        // `sort_by` is stable.
        matching.sort_by(|a, b| b.price.total_cmp(&a.price));
        matching.truncate(n);

        tracing::debug!(category, requested = n, returned = matching.len(), "top-n query");
        Ok(matching)
    }
}
