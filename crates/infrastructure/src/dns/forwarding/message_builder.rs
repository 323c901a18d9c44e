//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use digsip_domain::{LookupError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `domain` and serialize it.
    ///
    /// Returns the random message ID alongside the bytes so the response can be
    /// matched against it.
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), LookupError> {
        if domain.is_empty() {
            return Err(LookupError::InvalidQuery("empty query name".to_string()));
        }

        let name = Name::from_str(domain).map_err(|e| {
            LookupError::InvalidQuery(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, LookupError> {
        Self::build_query_with_id(domain, record_type).map(|(_, bytes)| bytes)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, LookupError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            LookupError::InvalidQuery(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
