//! Domain name decoding (RFC 1035 §4.1.4)
//!
//! A name is a run of length-prefixed labels ending in a zero byte, or
//! ending in a two-byte compression pointer (top two bits set) whose low 14
//! bits give an absolute offset where the name continues. Pointer targets
//! may themselves contain pointers, so the chain is followed in a loop that
//! refuses to revisit a target and gives up after [`MAX_POINTER_JUMPS`].

use ferrous_lookup_domain::domain_name::MAX_NAME_WIRE_LEN;
use ferrous_lookup_domain::WireError;
use smallvec::SmallVec;
use std::fmt::Write;

pub const MAX_POINTER_JUMPS: usize = 128;

const POINTER_TAG: u8 = 0xC0;
const LABEL_TYPE_MASK: u8 = 0xC0;

/// Decodes the name starting at `offset` into its dotted form.
///
/// Label bytes are rendered in zone-file presentation: `.` and `\` inside a
/// label are backslash-escaped and any byte outside printable ASCII becomes
/// `\DDD`, so distinct labels never decode to the same text.
///
/// Returns the name and the offset just past it in the original byte
/// stream: after the terminating zero byte, or after the first pointer when
/// the name is compressed. The root name decodes to an empty string.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), WireError> {
    let mut pos = offset;
    let mut resume_at: Option<usize> = None;
    let mut visited: SmallVec<[usize; 8]> = SmallVec::new();
    let mut name = String::new();
    let mut wire_len = 1;

    loop {
        let len = *buf.get(pos).ok_or(WireError::TruncatedMessage {
            offset: pos,
            needed: 1,
        })?;

        match len & LABEL_TYPE_MASK {
            0x00 if len == 0 => {
                return Ok((name, resume_at.unwrap_or(pos + 1)));
            }
            0x00 => {
                let start = pos + 1;
                let label_len = len as usize;
                let label = buf
                    .get(start..start + label_len)
                    .ok_or(WireError::TruncatedMessage {
                        offset: start,
                        needed: label_len,
                    })?;

                wire_len += label_len + 1;
                if wire_len > MAX_NAME_WIRE_LEN {
                    return Err(WireError::MalformedName(format!(
                        "name at offset {} exceeds {} bytes",
                        offset, MAX_NAME_WIRE_LEN
                    )));
                }

                if !name.is_empty() {
                    name.push('.');
                }
                push_label(&mut name, label);
                pos = start + label_len;
            }
            POINTER_TAG => {
                let low = *buf.get(pos + 1).ok_or(WireError::TruncatedMessage {
                    offset: pos + 1,
                    needed: 1,
                })?;
                let target = (((len & !LABEL_TYPE_MASK) as usize) << 8) | low as usize;

                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }
                if visited.len() >= MAX_POINTER_JUMPS || visited.contains(&target) {
                    return Err(WireError::CompressionLoop { offset: pos });
                }
                visited.push(target);
                pos = target;
            }
            _ => {
                return Err(WireError::MalformedName(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    len, pos
                )));
            }
        }
    }
}

fn push_label(name: &mut String, label: &[u8]) {
    for &b in label {
        match b {
            b'.' | b'\\' => {
                name.push('\\');
                name.push(b as char);
            }
            0x21..=0x7E => name.push(b as char),
            _ => {
                let _ = write!(name, "\\{:03}", b);
            }
        }
    }
}

/// Returns the offset just past the name at `offset` without resolving
/// pointers. Used for the question section, whose content is not needed.
pub fn skip_name(buf: &[u8], offset: usize) -> Result<usize, WireError> {
    let mut pos = offset;
    let mut wire_len = 1;

    loop {
        let len = *buf.get(pos).ok_or(WireError::TruncatedMessage {
            offset: pos,
            needed: 1,
        })?;

        match len & LABEL_TYPE_MASK {
            0x00 if len == 0 => return Ok(pos + 1),
            0x00 => {
                let end = pos + 1 + len as usize;
                if end > buf.len() {
                    return Err(WireError::TruncatedMessage {
                        offset: pos + 1,
                        needed: len as usize,
                    });
                }
                wire_len += len as usize + 1;
                if wire_len > MAX_NAME_WIRE_LEN {
                    return Err(WireError::MalformedName(format!(
                        "name at offset {} exceeds {} bytes",
                        offset, MAX_NAME_WIRE_LEN
                    )));
                }
                pos = end;
            }
            POINTER_TAG => {
                if pos + 1 >= buf.len() {
                    return Err(WireError::TruncatedMessage {
                        offset: pos + 1,
                        needed: 1,
                    });
                }
                return Ok(pos + 2);
            }
            _ => {
                return Err(WireError::MalformedName(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    len, pos
                )));
            }
        }
    }
}
