//! Ferrous Lookup Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod lookup;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::{DecodedMessage, Header};
pub use dns_record::{RecordData, RecordType, ResourceRecord, CLASS_IN};
pub use domain_name::{names_equal, normalize_domain_name, validate_domain_name};
pub use errors::{DomainError, WireError};
pub use lookup::{LookupQuery, Resolution};
