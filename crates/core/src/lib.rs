//! `shopnum-core`: domain foundation shared by the catalog and numbers crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
