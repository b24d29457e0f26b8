use super::name::{decode_name, skip_name};
use super::reader::WireReader;
use ferrous_lookup_domain::{
    DecodedMessage, Header, RecordData, RecordType, ResourceRecord, WireError,
};
use std::net::Ipv4Addr;
use tracing::debug;

/// Smallest possible record: root name, fixed fields, empty rdata.
const MIN_RECORD_LEN: usize = 11;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a full response. Any error discards the whole message.
    pub fn parse(response_bytes: &[u8]) -> Result<DecodedMessage, WireError> {
        let header = Self::parse_header(response_bytes)?;

        let offset = Self::skip_questions(response_bytes, Header::LEN, header.qdcount)?;
        let (answers, offset) = decode_records(response_bytes, offset, header.ancount)?;
        let (authorities, offset) = decode_records(response_bytes, offset, header.nscount)?;
        let (additionals, offset) = decode_records(response_bytes, offset, header.arcount)?;

        debug!(
            id = header.id,
            rcode = header.rcode(),
            answers = answers.len(),
            authority = authorities.len(),
            additional = additionals.len(),
            trailing = response_bytes.len() - offset,
            "DNS response parsed"
        );

        Ok(DecodedMessage {
            header,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn parse_header(bytes: &[u8]) -> Result<Header, WireError> {
        let mut reader = WireReader::new(bytes);
        Ok(Header {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        })
    }

    /// Each question is a name followed by QTYPE and QCLASS.
    fn skip_questions(bytes: &[u8], offset: usize, count: u16) -> Result<usize, WireError> {
        let mut reader = WireReader::at(bytes, offset);
        for _ in 0..count {
            let after_name = skip_name(bytes, reader.position())?;
            reader.seek(after_name);
            reader.skip(4)?;
        }
        Ok(reader.position())
    }
}

/// Decodes exactly `count` records starting at `offset`, returning them with
/// the offset just past the last one.
pub fn decode_records(
    bytes: &[u8],
    offset: usize,
    count: u16,
) -> Result<(Vec<ResourceRecord>, usize), WireError> {
    let upper_bound = bytes.len().saturating_sub(offset) / MIN_RECORD_LEN;
    let mut records = Vec::with_capacity((count as usize).min(upper_bound));
    let mut offset = offset;

    for _ in 0..count {
        let (record, next) = decode_record(bytes, offset)?;
        records.push(record);
        offset = next;
    }

    Ok((records, offset))
}

/// Decodes one record: owner name, `type class ttl rdlength`, then rdata.
pub fn decode_record(bytes: &[u8], offset: usize) -> Result<(ResourceRecord, usize), WireError> {
    let (name, after_name) = decode_name(bytes, offset)?;

    let mut reader = WireReader::at(bytes, after_name);
    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()? as usize;
    let rdata_start = reader.position();
    let rdata = reader.read_bytes(rdlength)?;

    let data = match record_type {
        RecordType::A if rdlength == 4 => {
            RecordData::A(Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]))
        }
        // The target may be compressed against any earlier part of the message.
        RecordType::NS => RecordData::Ns(decode_name(bytes, rdata_start)?.0),
        _ => RecordData::Other,
    };

    Ok((
        ResourceRecord {
            name,
            record_type,
            class,
            ttl,
            rdata: rdata.to_vec(),
            data,
        },
        reader.position(),
    ))
}
