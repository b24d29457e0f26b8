use super::ResourceRecord;

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub const LEN: usize = 12;

    /// QR bit: set on responses.
    pub fn is_response(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & 0x0400 != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & 0x0200 != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }
}

/// A decoded response. Questions are skipped, not retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedMessage {
    pub header: Header,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DecodedMessage {
    pub fn answer_count(&self) -> usize {
        self.header.ancount as usize
    }

    pub fn authority_count(&self) -> usize {
        self.header.nscount as usize
    }

    pub fn additional_count(&self) -> usize {
        self.header.arcount as usize
    }
}
