mod record;
mod record_type;

pub use record::{ARecord, AnswerSet, DnsRecord, NaptrRecord, SrvRecord};
pub use record_type::RecordType;
