pub mod health;
pub mod local_records;

pub use health::health_check;
