//! Products domain module (static catalog).
//!
//! This crate contains the catalog query rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, parse_count};
pub use product::{Product, ProductId};
