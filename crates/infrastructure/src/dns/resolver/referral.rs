//! Answer extraction and referral selection over a decoded response.

use ferrous_lookup_domain::{names_equal, DecodedMessage};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextServer {
    pub address: Ipv4Addr,
    /// NS name the glue record matched, or `None` for the fallback pick.
    pub via_ns: Option<String>,
}

/// First A record in the answer section, if any. Multiple answers are not
/// aggregated.
pub fn find_answer(message: &DecodedMessage) -> Option<Ipv4Addr> {
    message.answers.iter().find_map(|r| r.ipv4())
}

/// Chooses the next server from a referral.
///
/// NS names are taken from the authority section in order; the first one
/// with a matching A record in the additional section wins. Without any
/// matching glue, the first A record of any name in the additional section
/// is used instead.
pub fn select_next_server(message: &DecodedMessage) -> Option<NextServer> {
    let ns_names: Vec<&str> = message
        .authorities
        .iter()
        .filter_map(|r| r.nameserver())
        .collect();

    for ns in &ns_names {
        let glue = message
            .additionals
            .iter()
            .filter(|r| names_equal(&r.name, ns))
            .find_map(|r| r.ipv4());

        if let Some(address) = glue {
            return Some(NextServer {
                address,
                via_ns: Some((*ns).to_string()),
            });
        }
    }

    message
        .additionals
        .iter()
        .find_map(|r| r.ipv4())
        .map(|address| NextServer {
            address,
            via_ns: None,
        })
}
