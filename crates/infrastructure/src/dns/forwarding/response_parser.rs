use super::record_type_map::RecordTypeMapper;
use digsip_domain::{
    ARecord, AnswerSet, DnsRecord, LookupError, NaptrRecord, RecordType, SrvRecord,
};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer records of the requested type, in the order the server sent them.
    pub answers: AnswerSet,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a wire response, keeping only answers of `record_type`.
    pub fn parse(
        response_bytes: &[u8],
        record_type: RecordType,
    ) -> Result<DnsResponse, LookupError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            LookupError::Malformed(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut answers = AnswerSet::default();
        let mut skipped = 0;

        for record in message.answers() {
            match Self::convert(record) {
                Some(converted) if converted.record_type() == record_type => {
                    answers.push(converted);
                }
                _ => {
                    skipped += 1;
                    debug!(
                        name = %record.name().to_utf8(),
                        record_type = ?record.record_type(),
                        "Skipping answer record"
                    );
                }
            }
        }

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            skipped = skipped,
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            answers,
        })
    }

    fn convert(record: &Record) -> Option<DnsRecord> {
        RecordTypeMapper::from_hickory(record.record_type())?;

        match record.data() {
            RData::NAPTR(naptr) => {
                let replacement = naptr.replacement();
                let mut converted = NaptrRecord::new(naptr.order(), naptr.preference())
                    .with_flags(lossy(naptr.flags()))
                    .with_services(lossy(naptr.services()))
                    .with_regexp(lossy(naptr.regexp()));
                if !replacement.is_root() {
                    converted = converted.with_replacement(replacement.to_utf8());
                }
                Some(converted.into())
            }
            RData::SRV(srv) => Some(
                SrvRecord::new(
                    srv.priority(),
                    srv.weight(),
                    srv.port(),
                    srv.target().to_utf8(),
                )
                .into(),
            ),
            RData::A(a) => Some(ARecord::new(a.0).into()),
            _ => None,
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
