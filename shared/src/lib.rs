pub mod config;
pub mod types;
pub mod utils;

pub use config::{load_config, FlinkConfig, ServiceConfig};
pub use types::*;
pub use utils::{iso_timestamp, now_utc};
