#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, NAPTR, SRV};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use std::collections::HashMap;
use std::str::FromStr;

use super::dns_server_mock::ZoneEntry;

pub const TEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(2);

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub fn naptr_regexp(order: u16, preference: u16, regexp: &str) -> RData {
    RData::NAPTR(NAPTR::new(
        order,
        preference,
        b"u".to_vec().into_boxed_slice(),
        b"E2U+sip".to_vec().into_boxed_slice(),
        regexp.as_bytes().to_vec().into_boxed_slice(),
        Name::root(),
    ))
}

pub fn naptr_replacement(order: u16, preference: u16, replacement: &str) -> RData {
    RData::NAPTR(NAPTR::new(
        order,
        preference,
        b"s".to_vec().into_boxed_slice(),
        b"SIP+D2T".to_vec().into_boxed_slice(),
        Vec::new().into_boxed_slice(),
        name(replacement),
    ))
}

pub fn srv(priority: u16, port: u16, target: &str) -> RData {
    RData::SRV(SRV::new(priority, 0, port, name(target)))
}

pub fn a(ip: &str) -> RData {
    RData::A(A(ip.parse().unwrap()))
}

pub fn query(domain: &str, record_type: RecordType) -> Query {
    let mut query = Query::new();
    query.set_name(name(domain));
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);
    query
}

/// Serialize a response to `query` carrying `answers` under the query name.
pub fn response_bytes(
    id: u16,
    query: &Query,
    rcode: ResponseCode,
    truncated: bool,
    answers: Vec<RData>,
) -> Vec<u8> {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.set_response_code(rcode);
    message.set_truncated(truncated);
    message.add_query(query.clone());
    for rdata in answers {
        message.add_answer(Record::from_rdata(query.name().clone(), 60, rdata));
    }
    message.to_vec().unwrap()
}

/// Zone for +1 555 123 4567 ending at 203.0.113.7.
pub fn carrier_zone() -> HashMap<(String, RecordType), ZoneEntry> {
    let mut zone = HashMap::new();
    zone.insert(
        ("7.6.5.4.3.2.1.5.5.5.1.1.itrs.us".to_string(), RecordType::NAPTR),
        ZoneEntry::Answers(vec![naptr_regexp(10, 100, r"!^.*$!sip:\\1@sip.carrier.net!")]),
    );
    zone.insert(
        ("sip.carrier.net".to_string(), RecordType::NAPTR),
        ZoneEntry::Answers(vec![naptr_replacement(10, 100, "_sip._tcp.carrier.net.")]),
    );
    zone.insert(
        ("_sip._tcp.carrier.net".to_string(), RecordType::SRV),
        ZoneEntry::Answers(vec![srv(10, 5060, "proxy1.carrier.net.")]),
    );
    zone.insert(
        ("proxy1.carrier.net".to_string(), RecordType::A),
        ZoneEntry::Answers(vec![a("203.0.113.7")]),
    );
    zone
}
