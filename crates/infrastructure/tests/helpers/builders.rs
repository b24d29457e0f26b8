#![allow(dead_code)]
use ferrous_lookup_infrastructure::dns::wire::decode_name;
use std::collections::HashMap;
use std::net::Ipv4Addr;

enum FixtureData {
    A([u8; 4]),
    Ns(String),
    Raw(u16, Vec<u8>),
}

struct FixtureRecord {
    name: String,
    ttl: u32,
    data: FixtureData,
}

/// Builds response messages in wire format. Names are compressed against
/// every suffix written earlier, the way real servers do it.
pub struct ResponseFixture {
    id: u16,
    flags: u16,
    question: Option<String>,
    answers: Vec<FixtureRecord>,
    authorities: Vec<FixtureRecord>,
    additionals: Vec<FixtureRecord>,
    compress: bool,
}

impl ResponseFixture {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8000,
            question: None,
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
            compress: true,
        }
    }

    /// Echoes the id and question of `query`.
    pub fn reply_to(query: &[u8]) -> Self {
        let id = u16::from_be_bytes([query[0], query[1]]);
        let (qname, _) = decode_name(query, 12).unwrap();
        Self::new(id).question(&qname)
    }

    pub fn question(mut self, name: &str) -> Self {
        self.question = Some(name.to_string());
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn uncompressed(mut self) -> Self {
        self.compress = false;
        self
    }

    pub fn answer_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.answers.push(record(name, 3600, FixtureData::A(ip.octets())));
        self
    }

    pub fn answer_raw(mut self, name: &str, rtype: u16, rdata: &[u8]) -> Self {
        self.answers
            .push(record(name, 300, FixtureData::Raw(rtype, rdata.to_vec())));
        self
    }

    pub fn authority_ns(mut self, owner: &str, nameserver: &str) -> Self {
        self.authorities.push(record(
            owner,
            172_800,
            FixtureData::Ns(nameserver.to_string()),
        ));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.additionals
            .push(record(name, 172_800, FixtureData::A(ip.octets())));
        self
    }

    pub fn additional_raw(mut self, name: &str, rtype: u16, rdata: &[u8]) -> Self {
        self.additionals
            .push(record(name, 172_800, FixtureData::Raw(rtype, rdata.to_vec())));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut w = NameWriter::new(self.compress);

        w.buf.extend_from_slice(&self.id.to_be_bytes());
        w.buf.extend_from_slice(&self.flags.to_be_bytes());
        let qdcount = u16::from(self.question.is_some());
        for count in [
            qdcount,
            self.answers.len() as u16,
            self.authorities.len() as u16,
            self.additionals.len() as u16,
        ] {
            w.buf.extend_from_slice(&count.to_be_bytes());
        }

        if let Some(ref q) = self.question {
            w.write_name(q);
            w.buf.extend_from_slice(&[0, 1, 0, 1]);
        }

        for r in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            w.write_record(r);
        }

        w.buf
    }
}

fn record(name: &str, ttl: u32, data: FixtureData) -> FixtureRecord {
    FixtureRecord {
        name: name.to_string(),
        ttl,
        data,
    }
}

struct NameWriter {
    buf: Vec<u8>,
    offsets: HashMap<String, usize>,
    compress: bool,
}

impl NameWriter {
    fn new(compress: bool) -> Self {
        Self {
            buf: Vec::with_capacity(512),
            offsets: HashMap::new(),
            compress,
        }
    }

    fn write_name(&mut self, name: &str) {
        let labels: Vec<&str> = name.split('.').filter(|l| !l.is_empty()).collect();

        for i in 0..labels.len() {
            let suffix = labels[i..].join(".").to_ascii_lowercase();
            if self.compress {
                if let Some(&offset) = self.offsets.get(&suffix) {
                    self.buf.push(0xC0 | (offset >> 8) as u8);
                    self.buf.push(offset as u8);
                    return;
                }
                if self.buf.len() < 0x4000 {
                    self.offsets.insert(suffix, self.buf.len());
                }
            }
            self.buf.push(labels[i].len() as u8);
            self.buf.extend_from_slice(labels[i].as_bytes());
        }
        self.buf.push(0);
    }

    fn write_record(&mut self, r: &FixtureRecord) {
        self.write_name(&r.name);

        let rtype = match &r.data {
            FixtureData::A(_) => 1u16,
            FixtureData::Ns(_) => 2,
            FixtureData::Raw(t, _) => *t,
        };
        self.buf.extend_from_slice(&rtype.to_be_bytes());
        self.buf.extend_from_slice(&1u16.to_be_bytes());
        self.buf.extend_from_slice(&r.ttl.to_be_bytes());

        let len_at = self.buf.len();
        self.buf.extend_from_slice(&[0, 0]);
        match &r.data {
            FixtureData::A(octets) => self.buf.extend_from_slice(octets),
            FixtureData::Ns(target) => self.write_name(target),
            FixtureData::Raw(_, bytes) => self.buf.extend_from_slice(bytes),
        }
        let rdlength = (self.buf.len() - len_at - 2) as u16;
        self.buf[len_at..len_at + 2].copy_from_slice(&rdlength.to_be_bytes());
    }
}

pub fn query_id(query: &[u8]) -> u16 {
    u16::from_be_bytes([query[0], query[1]])
}
