use crate::dns_query::DnsQuery;
use crate::dns_record::RecordType;
use crate::resolution::ResolutionStage;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("{stage} failed: {record_type} lookup for {query_name}: {reason}")]
    LookupFailed {
        stage: ResolutionStage,
        query_name: String,
        record_type: RecordType,
        reason: String,
    },

    #[error("{stage} failed: {detail}")]
    ExtractionFailed {
        stage: ResolutionStage,
        detail: String,
    },
}

impl DomainError {
    /// Stage the pipeline halted at, if the error came from a running pipeline.
    pub fn stage(&self) -> Option<ResolutionStage> {
        match self {
            DomainError::InvalidPhoneNumber(_) | DomainError::InvalidDomainName(_) => {
                Some(ResolutionStage::Normalize)
            }
            DomainError::LookupFailed { stage, .. }
            | DomainError::ExtractionFailed { stage, .. } => Some(*stage),
        }
    }

    pub fn lookup_failed(stage: ResolutionStage, query: &DnsQuery, cause: &LookupError) -> Self {
        DomainError::LookupFailed {
            stage,
            query_name: query.domain.to_string(),
            record_type: query.record_type,
            reason: cause.to_string(),
        }
    }
}

/// Failure of a single query against the DNS server.
///
/// The pipeline collapses every variant into [`DomainError::LookupFailed`];
/// the variants only exist so the reason can be reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("I/O error talking to {server}: {message}")]
    Io { server: String, message: String },

    #[error("timed out waiting for {server}")]
    Timeout { server: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("server answered {0}")]
    ResponseCode(&'static str),

    #[error("no data in answer section")]
    NoData,
}
