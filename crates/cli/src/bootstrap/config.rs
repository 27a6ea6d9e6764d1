use dns_test_server_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    // logging is not up yet, so failures go straight to stderr via main
    Config::load(path, overrides).map_err(|e| anyhow::anyhow!("configuration error: {}", e))
}
