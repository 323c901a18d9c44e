#![allow(dead_code)]

use digsip_application::ports::{DnsLookup, ProgressReporter};
use digsip_domain::{
    ARecord, AnswerSet, DnsQuery, DnsRecord, LookupError, NaptrRecord, RecordType, SrvRecord,
};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub const SERVER: &str = "192.0.2.53:53";
pub const TIMEOUT: Duration = Duration::from_secs(2);

pub fn server() -> SocketAddr {
    SERVER.parse().unwrap()
}

type Key = (String, RecordType);

/// In-memory zone answering from canned responses. Unknown names get NXDOMAIN.
#[derive(Clone, Default)]
pub struct MockDnsLookup {
    responses: Arc<RwLock<HashMap<Key, Result<AnswerSet, LookupError>>>>,
    calls: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answers(&self, name: &str, record_type: RecordType, answers: AnswerSet) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), Ok(answers));
    }

    pub fn set_error(&self, name: &str, record_type: RecordType, error: LookupError) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn queried(&self, record_type: RecordType) -> bool {
        self.calls
            .read()
            .unwrap()
            .iter()
            .any(|q| q.record_type == record_type)
    }
}

impl DnsLookup for MockDnsLookup {
    fn lookup(
        &self,
        query: &DnsQuery,
        _server: SocketAddr,
        _timeout: Duration,
    ) -> Result<AnswerSet, LookupError> {
        self.calls.write().unwrap().push(query.clone());
        self.responses
            .read()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .unwrap_or(Err(LookupError::ResponseCode("NXDOMAIN")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Default)]
pub struct RecordingReporter {
    messages: RwLock<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.messages
            .read()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.messages
            .write()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl ProgressReporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

pub fn naptr_regexp(order: u16, preference: u16, regexp: &str) -> DnsRecord {
    NaptrRecord::new(order, preference)
        .with_flags("u")
        .with_services("E2U+sip")
        .with_regexp(regexp)
        .with_replacement(".")
        .into()
}

pub fn naptr_replacement(order: u16, preference: u16, replacement: &str) -> DnsRecord {
    NaptrRecord::new(order, preference)
        .with_flags("s")
        .with_services("SIP+D2T")
        .with_replacement(replacement)
        .into()
}

pub fn srv(port: u16, target: &str) -> DnsRecord {
    SrvRecord::new(10, 60, port, target).into()
}

pub fn a(address: &str) -> DnsRecord {
    ARecord::new(address.parse::<Ipv4Addr>().unwrap()).into()
}

pub fn answers(records: Vec<DnsRecord>) -> AnswerSet {
    AnswerSet::new(records)
}

/// The carrier.net zone walked through by a complete, successful resolution.
pub fn carrier_zone() -> MockDnsLookup {
    let lookup = MockDnsLookup::new();
    lookup.set_answers(
        "7.6.5.4.3.2.1.5.5.5.1.1.itrs.us",
        RecordType::NAPTR,
        answers(vec![naptr_regexp(10, 100, r"!sip:\1@sip.carrier.net!")]),
    );
    lookup.set_answers(
        "sip.carrier.net",
        RecordType::NAPTR,
        answers(vec![naptr_replacement(10, 100, "_sip._tcp.carrier.net.")]),
    );
    lookup.set_answers(
        "_sip._tcp.carrier.net",
        RecordType::SRV,
        answers(vec![srv(5060, "proxy1.carrier.net.")]),
    );
    lookup.set_answers(
        "proxy1.carrier.net",
        RecordType::A,
        answers(vec![a("203.0.113.7")]),
    );
    lookup
}
