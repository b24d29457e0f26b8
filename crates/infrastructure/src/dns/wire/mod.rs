//! RFC 1035 message codec
//!
//! Encodes single-question A/IN queries and decodes responses into
//! [`DecodedMessage`], resolving name compression pointers. Every read is
//! bounds-checked; a short buffer yields `TruncatedMessage` rather than a
//! partial result.

pub mod message_builder;
pub mod name;
pub mod reader;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use name::{decode_name, skip_name, MAX_POINTER_JUMPS};
pub use reader::WireReader;
pub use response_parser::{decode_record, decode_records, ResponseParser};

use ferrous_lookup_domain::{DecodedMessage, WireError};

/// Encodes an A/IN query for `domain` with a random transaction id.
pub fn encode_query(domain: &str) -> Result<Vec<u8>, WireError> {
    MessageBuilder::build_query(domain)
}

pub fn decode_response(bytes: &[u8]) -> Result<DecodedMessage, WireError> {
    ResponseParser::parse(bytes)
}
