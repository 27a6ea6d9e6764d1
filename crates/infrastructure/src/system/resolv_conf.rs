//! resolv.conf reader
//!
//! Parsing is delegated to hickory-resolver. Only the nameserver list is kept;
//! it yields one UDP and one TCP entry per address, which collapse back to one
//! upstream here.

use dns_test_server_domain::{ConfigError, UpstreamConfig};
use hickory_resolver::system_conf::parse_resolv_conf;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info, warn};

pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvConf {
    pub nameservers: Vec<IpAddr>,
    pub port: u16,
}

impl ResolvConf {
    pub async fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ResolverConfig(path.to_string(), e.to_string()))?;
        Self::parse(&content).map_err(|e| ConfigError::ResolverConfig(path.to_string(), e))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let (config, opts) = parse_resolv_conf(content).map_err(|e| e.to_string())?;

        let mut nameservers: Vec<IpAddr> = Vec::new();
        for server in config.name_servers() {
            let ip = server.socket_addr.ip();
            if !nameservers.contains(&ip) {
                nameservers.push(ip);
            }
        }

        // forwarding applies its own timeout and makes one pass
        debug!(
            nameservers = nameservers.len(),
            timeout_ms = opts.timeout.as_millis() as u64,
            attempts = opts.attempts,
            "resolv.conf parsed"
        );

        Ok(Self {
            nameservers,
            port: DEFAULT_DNS_PORT,
        })
    }

    pub fn socket_addrs(&self) -> Vec<SocketAddr> {
        self.nameservers
            .iter()
            .map(|ip| SocketAddr::new(*ip, self.port))
            .collect()
    }
}

/// Resolve the ordered upstream list from configuration.
///
/// An explicit `servers` list wins over the resolv.conf file. Read once at
/// startup; any failure here is fatal for the caller.
pub async fn load_upstreams(config: &UpstreamConfig) -> Result<Vec<SocketAddr>, ConfigError> {
    let upstreams = if config.servers.is_empty() {
        let mut conf = ResolvConf::from_file(&config.resolv_conf).await?;
        if let Some(port) = config.port {
            conf.port = port;
        }
        conf.socket_addrs()
    } else {
        let port = config.port.unwrap_or(DEFAULT_DNS_PORT);
        config
            .servers
            .iter()
            .map(|server| parse_server(server, port))
            .collect::<Result<Vec<_>, _>>()?
    };

    if upstreams.is_empty() {
        warn!(
            resolv_conf = %config.resolv_conf,
            "No upstream resolvers configured; unanswerable queries will get NXDOMAIN"
        );
    } else {
        info!(upstreams = ?upstreams, "Upstream resolvers loaded");
    }

    Ok(upstreams)
}

fn parse_server(server: &str, default_port: u16) -> Result<SocketAddr, ConfigError> {
    let server = server.trim();
    if let Ok(addr) = SocketAddr::from_str(server) {
        return Ok(addr);
    }
    IpAddr::from_str(server.trim_start_matches('[').trim_end_matches(']'))
        .map(|ip| SocketAddr::new(ip, default_port))
        .map_err(|_| ConfigError::Validation(format!("invalid upstream server '{}'", server)))
}
