#![allow(dead_code)]
use digsip_domain::{ARecord, AnswerSet, DnsRecord, NaptrRecord, SrvRecord};
use std::net::Ipv4Addr;

pub struct AnswerSetBuilder {
    records: Vec<DnsRecord>,
}

impl AnswerSetBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn naptr_regexp(mut self, order: u16, preference: u16, regexp: &str) -> Self {
        self.records.push(
            NaptrRecord::new(order, preference)
                .with_flags("u")
                .with_services("E2U+sip")
                .with_regexp(regexp)
                .with_replacement(".")
                .into(),
        );
        self
    }

    pub fn naptr_replacement(mut self, order: u16, preference: u16, replacement: &str) -> Self {
        self.records.push(
            NaptrRecord::new(order, preference)
                .with_flags("s")
                .with_services("SIP+D2T")
                .with_replacement(replacement)
                .into(),
        );
        self
    }

    pub fn srv(mut self, port: u16, target: &str) -> Self {
        self.records
            .push(SrvRecord::new(10, 60, port, target).into());
        self
    }

    pub fn a(mut self, address: &str) -> Self {
        let address: Ipv4Addr = address.parse().unwrap();
        self.records.push(ARecord::new(address).into());
        self
    }

    pub fn build(self) -> AnswerSet {
        AnswerSet::new(self.records)
    }
}
