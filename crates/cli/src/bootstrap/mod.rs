mod config;
mod logging;

pub use config::{load_config, start_server};
pub use logging::init_logging;
