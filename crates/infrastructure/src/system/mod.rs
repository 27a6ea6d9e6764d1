pub mod resolv_conf;

pub use resolv_conf::{load_upstreams, ResolvConf};
