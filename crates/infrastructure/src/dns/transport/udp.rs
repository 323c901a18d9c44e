//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Blocking, one datagram out and one matching datagram back. Messages are
//! sent as-is (no framing). Datagrams from another source or carrying another
//! message ID are discarded until the deadline passes.

use super::TransportResponse;
use digsip_domain::LookupError;
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

const DNS_HEADER_LEN: usize = 12;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn protocol_name(&self) -> &'static str {
        "UDP"
    }

    /// Send `message_bytes` and wait up to `timeout` for the response whose ID
    /// equals `expected_id`.
    pub fn exchange(
        &self,
        message_bytes: &[u8],
        expected_id: u16,
        timeout: Duration,
    ) -> Result<TransportResponse, LookupError> {
        if timeout.is_zero() {
            return Err(LookupError::InvalidQuery("timeout must be positive".to_string()));
        }

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).map_err(|e| self.io_error("bind", e))?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .map_err(|e| self.io_error("send", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let deadline = Instant::now() + timeout;
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(self.timeout());
            }
            socket
                .set_read_timeout(Some(remaining))
                .map_err(|e| self.io_error("configure", e))?;

            let (bytes_received, from_addr) = match socket.recv_from(&mut recv_buf) {
                Ok(received) => received,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Err(self.timeout());
                }
                Err(e) => return Err(self.io_error("receive", e)),
            };

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            if bytes_received < DNS_HEADER_LEN {
                debug!(bytes_received = bytes_received, "Ignoring runt UDP datagram");
                continue;
            }

            let response_id = u16::from_be_bytes([recv_buf[0], recv_buf[1]]);
            if response_id != expected_id {
                debug!(
                    expected_id = expected_id,
                    response_id = response_id,
                    "Ignoring UDP response with mismatched ID"
                );
                continue;
            }

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            recv_buf.truncate(bytes_received);
            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: self.protocol_name(),
            });
        }
    }

    fn timeout(&self) -> LookupError {
        LookupError::Timeout {
            server: self.server_addr.to_string(),
        }
    }

    fn io_error(&self, action: &str, error: std::io::Error) -> LookupError {
        LookupError::Io {
            server: self.server_addr.to_string(),
            message: format!("failed to {} UDP socket: {}", action, error),
        }
    }
}
