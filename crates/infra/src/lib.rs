//! Infrastructure layer: external service clients.

pub mod external;
