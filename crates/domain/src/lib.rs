//! Digsip Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_server;
pub mod e164;
pub mod errors;
pub mod resolution;

pub use config::{ConfigError, LoggingConfig, NaptrOrdering, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{ARecord, AnswerSet, DnsRecord, NaptrRecord, RecordType, SrvRecord};
pub use dns_server::DnsServerAddr;
pub use e164::{E164Name, DEFAULT_DOMAIN_SUFFIX};
pub use errors::{DomainError, LookupError};
pub use resolution::{ResolutionContext, ResolutionStage, SipResolution, StageValue};
