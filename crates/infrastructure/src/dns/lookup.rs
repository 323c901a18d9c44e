//! Blocking `DnsLookup` adapter: one UDP exchange per query.

use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use digsip_application::ports::DnsLookup;
use digsip_domain::{AnswerSet, DnsQuery, LookupError};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct UdpDnsLookup;

impl UdpDnsLookup {
    pub fn new() -> Self {
        Self
    }
}

impl DnsLookup for UdpDnsLookup {
    fn lookup(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<AnswerSet, LookupError> {
        let (id, request) = MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;

        let transport = UdpTransport::new(server);
        let response = transport.exchange(&request, id, timeout)?;
        let parsed = ResponseParser::parse(&response.bytes, query.record_type)?;

        if parsed.truncated {
            warn!(
                domain = %query.domain,
                record_type = %query.record_type,
                "Truncated response, using the records that fit"
            );
        }

        if parsed.rcode != ResponseCode::NoError {
            return Err(LookupError::ResponseCode(ResponseParser::rcode_to_status(
                parsed.rcode,
            )));
        }

        if parsed.answers.is_empty() {
            return Err(LookupError::NoData);
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            answers = parsed.answers.len(),
            protocol = response.protocol_used,
            "Lookup answered"
        );

        Ok(parsed.answers)
    }
}
