pub mod health;
pub mod pipeline;

pub use health::{health_check, not_found, readiness_check};
pub use pipeline::{pipeline_status, service_info};
