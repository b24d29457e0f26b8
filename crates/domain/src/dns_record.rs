use std::fmt;
use std::net::Ipv4Addr;

/// The Internet class (IN).
pub const CLASS_IN: u16 = 1;

/// Resource record types the resolver interprets. Everything else is carried
/// through as `Unknown` with its raw wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    Unknown(u16),
}

impl RecordType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            other => RecordType::Unknown(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::Unknown(value) => value,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(value) => write!(f, "TYPE{}", value),
            known => f.write_str(known.as_str()),
        }
    }
}

/// Type-specific interpretation layered over the raw rdata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// Type A with exactly four bytes of rdata.
    A(Ipv4Addr),
    /// Type NS: the delegated name server's name.
    Ns(String),
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn is_a(&self) -> bool {
        self.record_type == RecordType::A
    }

    pub fn is_ns(&self) -> bool {
        self.record_type == RecordType::NS
    }

    /// The IPv4 address of an A record, when its rdata was well-formed.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn nameserver(&self) -> Option<&str> {
        match &self.data {
            RecordData::Ns(name) => Some(name),
            _ => None,
        }
    }

    pub fn rdlength(&self) -> usize {
        self.rdata.len()
    }
}
