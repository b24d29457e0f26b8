pub mod config;
pub mod iterative;
pub mod referral;

pub use config::IterativeResolverConfig;
pub use iterative::IterativeResolver;
pub use referral::{find_answer, select_next_server, NextServer};
