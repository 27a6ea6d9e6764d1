use anyhow::Context;
use dns_test_server_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// UDP socket and TCP listener sharing one address and port.
pub struct DnsListeners {
    udp: UdpSocket,
    tcp: TcpListener,
}

impl DnsListeners {
    pub async fn bind(bind_addr: &str) -> anyhow::Result<Self> {
        let udp = UdpSocket::bind(bind_addr)
            .await
            .with_context(|| format!("failed to bind DNS UDP socket on {}", bind_addr))?;
        // follow the UDP socket so an ephemeral port is shared too
        let local_addr = udp.local_addr()?;
        let tcp = TcpListener::bind(local_addr)
            .await
            .with_context(|| format!("failed to bind DNS TCP listener on {}", local_addr))?;

        Ok(Self { udp, tcp })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.udp.local_addr()
    }

    pub async fn serve(
        self,
        handler: DnsServerHandler,
        shutdown: CancellationToken,
    ) -> anyhow::Result<()> {
        let bind_address = self.local_addr()?;

        let mut server = ServerFuture::new(handler);
        server.register_socket(self.udp);
        server.register_listener(self.tcp, TCP_IDLE_TIMEOUT);

        info!(bind_address = %bind_address, "DNS server ready (UDP+TCP)");

        tokio::select! {
            _ = shutdown.cancelled() => {}
            result = server.block_until_done() => {
                if let Err(e) = &result {
                    error!(error = %e, "DNS server error");
                }
                result.context("DNS server stopped unexpectedly")?;
                return Ok(());
            }
        }

        server
            .shutdown_gracefully()
            .await
            .context("DNS server failed to shut down")?;

        info!("DNS server stopped");
        Ok(())
    }
}
