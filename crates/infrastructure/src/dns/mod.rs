pub mod events;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use events::{LookupEventEmitter, LookupStep, StepDecision};
pub use resolver::{IterativeResolver, IterativeResolverConfig};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use wire::{decode_response, encode_query, MessageBuilder, ResponseParser};
