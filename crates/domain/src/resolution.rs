use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Steps of the phone number → SIP proxy address walk, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResolutionStage {
    Normalize,
    DomainNaptr,
    ServiceNaptr,
    Srv,
    A,
}

impl ResolutionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::Normalize => "E.164 normalization",
            ResolutionStage::DomainNaptr => "NAPTR domain discovery",
            ResolutionStage::ServiceNaptr => "NAPTR service discovery",
            ResolutionStage::Srv => "SRV lookup",
            ResolutionStage::A => "A lookup",
        }
    }
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value produced by the most recent successful stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageValue {
    QueryName(String),
    SipDomain(String),
    ServiceName(String),
    Target { host: String, port: u16 },
    Address(Ipv4Addr),
}

/// Per-run pipeline state. Created fresh for every resolution and dropped with it.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    server: SocketAddr,
    timeout: Duration,
    stage: ResolutionStage,
    query_name: Option<String>,
    last_value: Option<StageValue>,
}

impl ResolutionContext {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            server,
            timeout,
            stage: ResolutionStage::Normalize,
            query_name: None,
            last_value: None,
        }
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn stage(&self) -> ResolutionStage {
        self.stage
    }

    pub fn query_name(&self) -> Option<&str> {
        self.query_name.as_deref()
    }

    pub fn last_value(&self) -> Option<&StageValue> {
        self.last_value.as_ref()
    }

    pub fn enter(&mut self, stage: ResolutionStage, query_name: impl Into<String>) {
        self.stage = stage;
        self.query_name = Some(query_name.into());
    }

    pub fn record(&mut self, value: StageValue) {
        self.last_value = Some(value);
    }
}

/// Everything a successful run learned on the way to the proxy address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipResolution {
    pub phone_number: String,
    pub query_name: String,
    pub sip_domain: String,
    pub service_name: String,
    pub target: String,
    pub port: u16,
    pub address: Ipv4Addr,
}

impl SipResolution {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.address, self.port))
    }
}

impl fmt::Display for SipResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} -> {} -> {}:{} -> {}",
            self.phone_number,
            self.sip_domain,
            self.service_name,
            self.target,
            self.port,
            self.address
        )
    }
}
