use super::RecordType;
use std::net::Ipv4Addr;

/// Naming Authority Pointer record (RFC 3403) with its text fields decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaptrRecord {
    pub order: u16,
    pub preference: u16,
    pub flags: String,
    pub services: String,
    pub regexp: Option<String>,
    pub replacement: Option<String>,
}

impl NaptrRecord {
    pub fn new(order: u16, preference: u16) -> Self {
        Self {
            order,
            preference,
            flags: String::new(),
            services: String::new(),
            regexp: None,
            replacement: None,
        }
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn with_services(mut self, services: impl Into<String>) -> Self {
        self.services = services.into();
        self
    }

    pub fn with_regexp(mut self, regexp: impl Into<String>) -> Self {
        self.regexp = Some(regexp.into());
        self
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// The substitution expression, if the record carries a non-empty one.
    pub fn regexp(&self) -> Option<&str> {
        self.regexp.as_deref().filter(|r| !r.is_empty())
    }

    /// The replacement name without its trailing dot.
    ///
    /// `None` when the field is unset, empty, or the root name `.`.
    pub fn replacement(&self) -> Option<&str> {
        let raw = self.replacement.as_deref()?;
        let name = raw.strip_suffix('.').unwrap_or(raw);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvRecord {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

impl SrvRecord {
    pub fn new(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }

    /// Target hostname with the trailing dot stripped. Empty for the root target.
    pub fn target_host(&self) -> &str {
        self.target.strip_suffix('.').unwrap_or(&self.target)
    }

    /// RFC 2782: a target of `.` means the service is decidedly not available.
    pub fn is_unavailable(&self) -> bool {
        self.target_host().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ARecord {
    pub address: Ipv4Addr,
}

impl ARecord {
    pub fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    Naptr(NaptrRecord),
    Srv(SrvRecord),
    A(ARecord),
}

impl DnsRecord {
    pub fn record_type(&self) -> RecordType {
        match self {
            DnsRecord::Naptr(_) => RecordType::NAPTR,
            DnsRecord::Srv(_) => RecordType::SRV,
            DnsRecord::A(_) => RecordType::A,
        }
    }
}

impl From<NaptrRecord> for DnsRecord {
    fn from(record: NaptrRecord) -> Self {
        DnsRecord::Naptr(record)
    }
}

impl From<SrvRecord> for DnsRecord {
    fn from(record: SrvRecord) -> Self {
        DnsRecord::Srv(record)
    }
}

impl From<ARecord> for DnsRecord {
    fn from(record: ARecord) -> Self {
        DnsRecord::A(record)
    }
}

/// Records from the answer section of one response, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    records: Vec<DnsRecord>,
}

impl AnswerSet {
    pub fn new(records: Vec<DnsRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    pub fn push(&mut self, record: impl Into<DnsRecord>) {
        self.records.push(record.into());
    }

    pub fn naptr(&self) -> impl Iterator<Item = &NaptrRecord> + '_ {
        self.records.iter().filter_map(|r| match r {
            DnsRecord::Naptr(naptr) => Some(naptr),
            _ => None,
        })
    }

    pub fn srv(&self) -> impl Iterator<Item = &SrvRecord> + '_ {
        self.records.iter().filter_map(|r| match r {
            DnsRecord::Srv(srv) => Some(srv),
            _ => None,
        })
    }

    pub fn a(&self) -> impl Iterator<Item = &ARecord> + '_ {
        self.records.iter().filter_map(|r| match r {
            DnsRecord::A(a) => Some(a),
            _ => None,
        })
    }
}

impl FromIterator<DnsRecord> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = DnsRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
