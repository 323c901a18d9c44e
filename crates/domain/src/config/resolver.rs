use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::dns_server::DnsServerAddr;
use crate::e164::{normalize_suffix, DEFAULT_DOMAIN_SUFFIX};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How NAPTR records are scanned when looking for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NaptrOrdering {
    /// First match in the order the server returned the records.
    #[default]
    Answer,
    /// Records sorted by (order, preference), lowest first.
    Preference,
}

impl NaptrOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            NaptrOrdering::Answer => "answer",
            NaptrOrdering::Preference => "preference",
        }
    }
}

impl fmt::Display for NaptrOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NaptrOrdering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "answer" => Ok(NaptrOrdering::Answer),
            "preference" => Ok(NaptrOrdering::Preference),
            other => Err(ConfigError::Validation(format!(
                "Unknown NAPTR ordering '{}', expected 'answer' or 'preference'",
                other
            ))),
        }
    }
}

/// Settings for a single resolution run.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub dns_server: DnsServerAddr,
    pub domain_suffix: String,
    pub query_timeout: Duration,
    pub naptr_ordering: NaptrOrdering,
    pub logging: LoggingConfig,
}

impl ResolverConfig {
    pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(dns_server: DnsServerAddr) -> Self {
        Self {
            dns_server,
            domain_suffix: DEFAULT_DOMAIN_SUFFIX.to_string(),
            query_timeout: Self::DEFAULT_QUERY_TIMEOUT,
            naptr_ordering: NaptrOrdering::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.dns_server.port() == 0 {
            return Err(ConfigError::Validation(
                "DNS server port cannot be 0".to_string(),
            ));
        }

        normalize_suffix(&self.domain_suffix)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        self.logging.validate()
    }
}
