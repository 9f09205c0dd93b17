//! External service clients/adapters.

pub mod numbers;

pub use numbers::{
    DEFAULT_NUMBERS_BASE_URL, HttpNumberSource, NumberSource, UpstreamError, decode_numbers_payload,
};
