use serde::{Deserialize, Serialize};

/// Where forwarded queries go when the local store cannot answer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// resolv.conf-format file supplying the ordered nameserver list
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Explicit upstreams (`ip` or `ip:port`). Replaces `resolv_conf` when set.
    #[serde(default)]
    pub servers: Vec<String>,

    /// Port shared by every upstream that does not carry its own
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            servers: Vec::new(),
            port: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
