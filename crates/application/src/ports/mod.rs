mod dns_lookup;
mod progress_reporter;

pub use dns_lookup::DnsLookup;
pub use progress_reporter::ProgressReporter;

pub use digsip_domain::{AnswerSet, DnsQuery, LookupError};
