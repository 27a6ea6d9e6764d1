pub mod dns;
pub mod shutdown;
pub mod web;

pub use dns::DnsListeners;
pub use shutdown::shutdown_signal;
pub use web::{bind_web, start_web_server};
