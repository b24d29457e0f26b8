use ferrous_lookup_domain::DecodedMessage;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// What the resolver decided after one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDecision {
    Answer(Ipv4Addr),
    Referral {
        next: Ipv4Addr,
        /// The NS name whose glue matched; `None` when the resolver fell back
        /// to the first address record in the additional section.
        via_ns: Option<String>,
    },
    Failed(String),
}

/// Trace of one hop in an iterative lookup. Purely observational.
#[derive(Debug, Clone)]
pub struct LookupStep {
    pub domain: Arc<str>,

    /// 1-based hop number.
    pub hop: usize,

    pub server: Ipv4Addr,

    pub response_time_us: u64,

    /// The decoded reply; absent when the exchange or decode failed.
    pub response: Option<Arc<DecodedMessage>>,

    pub decision: StepDecision,
}

impl LookupStep {
    pub fn answer_count(&self) -> usize {
        self.response.as_ref().map_or(0, |m| m.answer_count())
    }

    pub fn authority_count(&self) -> usize {
        self.response.as_ref().map_or(0, |m| m.authority_count())
    }

    pub fn additional_count(&self) -> usize {
        self.response.as_ref().map_or(0, |m| m.additional_count())
    }

    pub fn response_time_ms(&self) -> f64 {
        self.response_time_us as f64 / 1000.0
    }

    pub fn is_final(&self) -> bool {
        !matches!(self.decision, StepDecision::Referral { .. })
    }
}
