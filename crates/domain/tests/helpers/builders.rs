#![allow(dead_code)]
use ferrous_lookup_domain::{RecordData, RecordType, ResourceRecord, CLASS_IN};
use std::net::Ipv4Addr;

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    rdata: Vec<u8>,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn a(name: &str, ip: Ipv4Addr) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::A,
            ttl: 300,
            rdata: ip.octets().to_vec(),
            data: RecordData::A(ip),
        }
    }

    pub fn ns(name: &str, nameserver: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::NS,
            ttl: 172_800,
            rdata: Vec::new(),
            data: RecordData::Ns(nameserver.to_string()),
        }
    }

    pub fn unknown(name: &str, rtype: u16, rdata: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::Unknown(rtype),
            ttl: 60,
            rdata: rdata.to_vec(),
            data: RecordData::Other,
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord {
            name: self.name,
            record_type: self.record_type,
            class: CLASS_IN,
            ttl: self.ttl,
            rdata: self.rdata,
            data: self.data,
        }
    }
}
