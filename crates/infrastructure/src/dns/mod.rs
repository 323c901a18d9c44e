pub mod forwarding;
pub mod lookup;
pub mod transport;

pub use forwarding::{DnsResponse, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use lookup::UdpDnsLookup;
pub use transport::{TransportResponse, UdpTransport};
