use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ServiceConfig;

pub const SERVICE_NAME: &str = "billing";
pub const SERVICE_VERSION: &str = "0.1.0";
pub const PIPELINE_NAME: &str = "billing-processor";

// 健康检查 / 就绪检查响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }

    pub fn ready() -> Self {
        Self {
            status: "ready".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

// 服务信息 (GET /)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub flink: FlinkInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlinkInfo {
    pub enabled: bool,
    pub parallelism: i64,
    pub checkpoint_interval: i64,
}

impl From<&ServiceConfig> for ServiceInfo {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            flink: FlinkInfo {
                enabled: config.flink.enabled,
                parallelism: config.flink.parallelism,
                checkpoint_interval: config.flink.checkpoint_interval_ms,
            },
        }
    }
}

// 流水线状态标签：只由 FLINK_ENABLED 决定，不代表真实运行状况
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    Running,
    Disabled,
}

impl PipelineState {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            PipelineState::Running
        } else {
            PipelineState::Disabled
        }
    }
}

// 流水线状态 (GET /pipeline/status)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStatus {
    pub pipeline: String,
    pub status: PipelineState,
    pub config: PipelineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    pub parallelism: i64,
    pub checkpoint_interval: i64,
}

impl From<&ServiceConfig> for PipelineStatus {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            pipeline: PIPELINE_NAME.to_string(),
            status: PipelineState::from_enabled(config.flink.enabled),
            config: PipelineConfig {
                parallelism: config.flink.parallelism,
                checkpoint_interval: config.flink.checkpoint_interval_ms,
            },
        }
    }
}

// 错误响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn not_found() -> Self {
        Self {
            error: "Not Found".to_string(),
        }
    }
}

// 错误类型
#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidConfig {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_bodies() {
        assert_eq!(
            serde_json::to_value(HealthStatus::healthy()).unwrap(),
            json!({"status": "healthy", "service": "billing"})
        );
        assert_eq!(
            serde_json::to_value(HealthStatus::ready()).unwrap(),
            json!({"status": "ready", "service": "billing"})
        );
    }

    #[test]
    fn test_service_info_defaults() {
        let info = ServiceInfo::from(&ServiceConfig::default());

        assert_eq!(
            serde_json::to_value(info).unwrap(),
            json!({
                "service": "billing",
                "version": "0.1.0",
                "flink": {"enabled": false, "parallelism": 1, "checkpointInterval": 60000}
            })
        );
    }

    #[test]
    fn test_pipeline_status_follows_flag() {
        let mut config = ServiceConfig::default();
        config.flink.enabled = true;
        config.flink.parallelism = 4;
        config.flink.checkpoint_interval_ms = 30000;

        assert_eq!(
            serde_json::to_value(PipelineStatus::from(&config)).unwrap(),
            json!({
                "pipeline": "billing-processor",
                "status": "running",
                "config": {"parallelism": 4, "checkpointInterval": 30000}
            })
        );

        config.flink.enabled = false;
        assert_eq!(PipelineStatus::from(&config).status, PipelineState::Disabled);
    }

    #[test]
    fn test_not_found_body() {
        assert_eq!(
            serde_json::to_string(&ErrorBody::not_found()).unwrap(),
            r#"{"error":"Not Found"}"#
        );
    }
}
