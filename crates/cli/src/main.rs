use anyhow::Context;
use clap::Parser;
use dns_test_server_api::AppState;
use dns_test_server_domain::CliOverrides;
use dns_test_server_infrastructure::repositories::InMemoryRecordStore;
use dns_test_server_infrastructure::system::load_upstreams;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dns-test-server")]
#[command(version)]
#[command(about = "DNS test double: local records first, upstream resolvers second")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS port (UDP and TCP)
    #[arg(short = 'd', long, env = "DNS_PORT")]
    dns_port: Option<u16>,

    /// Administrative HTTP port
    #[arg(short = 'w', long, env = "DNS_HTTP_PORT")]
    http_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// resolv.conf-format file listing upstream resolvers
    #[arg(long, value_name = "FILE")]
    resolv_conf: Option<String>,

    /// Upstream resolver (ip or ip:port), in priority order; replaces resolv.conf
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstreams: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.dns_port,
            http_port: self.http_port,
            bind_address: self.bind.clone(),
            resolv_conf: self.resolv_conf.clone(),
            upstream_servers: (!self.upstreams.is_empty()).then(|| self.upstreams.clone()),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    info!("Starting DNS test server v{}", env!("CARGO_PKG_VERSION"));

    let upstreams = load_upstreams(&config.upstream)
        .await
        .context("failed to load upstream resolvers")?;

    let store = Arc::new(InMemoryRecordStore::new());
    let di::DnsServices {
        handler,
        event_logger,
    } = di::DnsServices::new(&config, store.clone(), upstreams);
    let use_cases = di::UseCases::new(store);

    let app_state = AppState {
        put_record: use_cases.put_record,
        get_records: use_cases.get_records,
        delete_record: use_cases.delete_record,
    };

    let dns_listeners = server::DnsListeners::bind(&config.server.dns_addr()).await?;
    let web_listener = server::bind_web(&config.server.http_addr()).await?;

    let shutdown = CancellationToken::new();
    let mut tasks = JoinSet::new();
    tasks.spawn(dns_listeners.serve(handler, shutdown.clone()));
    tasks.spawn(server::start_web_server(
        web_listener,
        app_state,
        shutdown.clone(),
    ));

    tokio::select! {
        _ = server::shutdown_signal() => {}
        Some(result) = tasks.join_next() => match result {
            Ok(Ok(())) => warn!("Server task exited early"),
            Ok(Err(e)) => error!(error = %e, "Server task failed"),
            Err(e) => error!(error = %e, "Server task panicked"),
        },
    }

    shutdown.cancel();

    let grace = Duration::from_secs(config.server.shutdown_grace_secs);
    let deadline = Instant::now() + grace;
    let drained = tokio::time::timeout_at(deadline, async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                error!(error = %e, "Server task failed during shutdown");
            }
        }
    })
    .await;

    if drained.is_err() {
        warn!(grace_secs = grace.as_secs(), "Shutdown grace period elapsed, aborting");
        tasks.shutdown().await;
    }

    // the DNS task owned the last handler, so the event channel is closed now
    match tokio::time::timeout_at(deadline, event_logger).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Query event logger panicked"),
        Err(_) => warn!("Query event logger did not drain before the grace period elapsed"),
    }

    info!("Server shutdown complete");
    Ok(())
}
