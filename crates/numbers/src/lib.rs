//! Number qualifier pipeline.
//!
//! Pure filtering logic over an already-fetched number list: qualifier
//! predicates, order-preserving dedup and windowing. Fetching lives in
//! `shopnum-infra`.

pub mod pipeline;
pub mod qualifier;

pub use pipeline::{
    NumbersRequest, NumbersResponse, apply_qualifiers, apply_window, dedup_preserving_order,
    run_pipeline,
};
pub use qualifier::{Qualifier, is_even, is_fibonacci, is_prime};
