//! DNS Message Builder
//!
//! Constructs iterative A/IN queries in wire format: a 12-byte header with
//! recursion not requested, followed by a single question.

use ferrous_lookup_domain::{
    normalize_domain_name, validate_domain_name, Header, RecordType, WireError, CLASS_IN,
};

/// Standard query, recursion not desired.
pub const FLAGS_STANDARD_QUERY: u16 = 0x0000;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an A query for `domain` with a random transaction id.
    pub fn build_query(domain: &str) -> Result<Vec<u8>, WireError> {
        Self::build_query_with_id(domain).map(|(_, bytes)| bytes)
    }

    /// Same as [`build_query`](Self::build_query), also returning the
    /// random id so the resolver can log it against the reply.
    pub fn build_query_with_id(domain: &str) -> Result<(u16, Vec<u8>), WireError> {
        let id = fastrand::u16(..);
        let bytes = Self::encode_query(domain, id)?;
        Ok((id, bytes))
    }

    /// Deterministic encoding with a caller-chosen transaction id.
    pub fn encode_query(domain: &str, id: u16) -> Result<Vec<u8>, WireError> {
        validate_domain_name(domain)?;
        let domain = normalize_domain_name(domain);

        let mut buf = Vec::with_capacity(Header::LEN + domain.len() + 6);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&FLAGS_STANDARD_QUERY.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

        Self::encode_name(domain, &mut buf);
        buf.extend_from_slice(&RecordType::A.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(buf)
    }

    /// Appends `domain` as uncompressed length-prefixed labels. The caller
    /// is responsible for validating the name first.
    pub fn encode_name(domain: &str, buf: &mut Vec<u8>) {
        for label in domain.split('.').filter(|l| !l.is_empty()) {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
    }
}
