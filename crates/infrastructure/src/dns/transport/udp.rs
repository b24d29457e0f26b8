//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Each exchange binds its own
//! ephemeral socket, which is released when the call returns on any path.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Receive buffer size for a single datagram.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    verify_response: bool,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self {
            verify_response: true,
        }
    }

    /// When disabled, the first datagram received is taken as the reply.
    pub fn with_response_verification(mut self, enabled: bool) -> Self {
        self.verify_response = enabled;
        self
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that `response` carries the transaction id of `query`.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::Transport {
            server: server.to_string(),
            reason: "message too short to carry a transaction id".to_string(),
        });
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::Transport {
            server: server.to_string(),
            reason: format!(
                "transaction id mismatch: sent {:#06x}, received {:#06x}",
                query_id, response_id
            ),
        });
    }

    Ok(())
}

fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::QueryTimeout {
        server: server.to_string(),
    }
}

fn io_error(server: SocketAddr, action: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: format!("{}: {}", action, e),
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| io_error(server, "failed to bind UDP socket", e))?;

        let deadline = Instant::now() + timeout;

        let bytes_sent = timeout_at(deadline, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "failed to send UDP query", e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| timeout_error(server))?
                    .map_err(|e| io_error(server, "failed to receive UDP response", e))?;

            if self.verify_response {
                if from_addr != server {
                    warn!(
                        expected = %server,
                        received_from = %from_addr,
                        "Discarding UDP datagram from unexpected source"
                    );
                    continue;
                }

                if let Err(e) =
                    validate_response_id(message_bytes, &recv_buf[..bytes_received], server)
                {
                    warn!(server = %server, error = %e, "Discarding UDP datagram");
                    continue;
                }
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %server,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
