mod naptr_extractor;
mod record_lookup;

pub use naptr_extractor::NaptrExtractor;
pub use record_lookup::{RecordLookup, SrvTarget};
