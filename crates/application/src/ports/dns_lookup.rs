use digsip_domain::{AnswerSet, DnsQuery, LookupError};
use std::net::SocketAddr;
use std::time::Duration;

/// Single blocking DNS query against one server.
///
/// Implementations send exactly one request per call and never retry or cache.
/// The returned set holds only records of `query.record_type`, in answer order.
/// An answer section without such records is reported as [`LookupError::NoData`].
pub trait DnsLookup: Send + Sync {
    fn lookup(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<AnswerSet, LookupError>;
}
