//! DNS test server application layer
pub mod ports;
pub mod use_cases;
