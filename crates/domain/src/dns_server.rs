use crate::config::ConfigError;
use std::fmt;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Address of the DNS server every query of a run is sent to.
///
/// Accepts `IP`, `IP:PORT`, `[IPv6]:PORT`, `HOSTNAME` and `HOSTNAME:PORT`.
/// The port defaults to 53.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsServerAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl DnsServerAddr {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            DnsServerAddr::Resolved(addr) => Some(*addr),
            DnsServerAddr::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            DnsServerAddr::Resolved(addr) => addr.port(),
            DnsServerAddr::Unresolved { port, .. } => *port,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, DnsServerAddr::Unresolved { .. })
    }

    /// Turns a hostname into a socket address using the system resolver.
    ///
    /// IPv4 results are preferred since the ENUM walk itself only yields IPv4.
    pub fn resolve(&self) -> Result<SocketAddr, ConfigError> {
        let (hostname, port) = match self {
            DnsServerAddr::Resolved(addr) => return Ok(*addr),
            DnsServerAddr::Unresolved { hostname, port } => (hostname, *port),
        };

        let candidates: Vec<SocketAddr> = (hostname.as_ref(), port)
            .to_socket_addrs()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Cannot resolve DNS server '{}': {}",
                    hostname, e
                ))
            })?
            .collect();

        candidates
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| candidates.first())
            .copied()
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "DNS server '{}' resolved to no addresses",
                    hostname
                ))
            })
    }
}

impl fmt::Display for DnsServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsServerAddr::Resolved(addr) => write!(f, "{}", addr),
            DnsServerAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let rest = &s[end + 1..];
        let port_str = rest.strip_prefix(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

fn is_valid_hostname(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_')
}

impl FromStr for DnsServerAddr {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(DnsServerAddr::Resolved(addr));
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(DnsServerAddr::Resolved(SocketAddr::new(ip, DEFAULT_DNS_PORT)));
        }
        if let Some((host, port)) = parse_host_port(s) {
            if let Ok(ip) = host.parse::<IpAddr>() {
                return Ok(DnsServerAddr::Resolved(SocketAddr::new(ip, port)));
            }
            if is_valid_hostname(host) {
                return Ok(DnsServerAddr::Unresolved {
                    hostname: host.into(),
                    port,
                });
            }
        } else if is_valid_hostname(s) {
            return Ok(DnsServerAddr::Unresolved {
                hostname: s.into(),
                port: DEFAULT_DNS_PORT,
            });
        }

        Err(ConfigError::Validation(format!(
            "Invalid DNS server '{}'. Expected IP, IP:PORT, HOSTNAME or HOSTNAME:PORT",
            s
        )))
    }
}
