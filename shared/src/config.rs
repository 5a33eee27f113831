use crate::types::BillingError;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

pub const ENV_PORT: &str = "PORT";
pub const ENV_FLINK_ENABLED: &str = "FLINK_ENABLED";
pub const ENV_FLINK_PARALLELISM: &str = "FLINK_PARALLELISM";
pub const ENV_FLINK_CHECKPOINT_INTERVAL: &str = "FLINK_CHECKPOINT_INTERVAL";

/// 服务配置，启动时读取一次，之后只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub flink: FlinkConfig,
}

/// 流处理相关配置，仅用于回显
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlinkConfig {
    pub enabled: bool,
    pub parallelism: i64,
    pub checkpoint_interval_ms: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            flink: FlinkConfig::default(),
        }
    }
}

impl Default for FlinkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            parallelism: 1,
            checkpoint_interval_ms: 60_000,
        }
    }
}

pub fn load_config() -> Result<ServiceConfig, BillingError> {
    // 加载 .env 文件
    dotenv().ok();

    ServiceConfig::from_lookup(|key| env::var(key).ok())
}

impl ServiceConfig {
    // 从任意键值来源构建配置，未设置的键保留默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BillingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServiceConfig::default();

        if let Some(port) = lookup(ENV_PORT) {
            config.port = parse_number(ENV_PORT, &port)?;
        }

        if let Some(enabled) = lookup(ENV_FLINK_ENABLED) {
            config.flink.enabled = parse_flag(&enabled);
        }

        if let Some(parallelism) = lookup(ENV_FLINK_PARALLELISM) {
            config.flink.parallelism = parse_number(ENV_FLINK_PARALLELISM, &parallelism)?;
        }

        if let Some(interval) = lookup(ENV_FLINK_CHECKPOINT_INTERVAL) {
            config.flink.checkpoint_interval_ms =
                parse_number(ENV_FLINK_CHECKPOINT_INTERVAL, &interval)?;
        }

        validate_config(&config)?;

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

// 只有 "true"（不区分大小写，不去除空白）才算开启
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn parse_number<T>(var: &'static str, value: &str) -> Result<T, BillingError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| BillingError::InvalidConfig {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn validate_config(config: &ServiceConfig) -> Result<(), BillingError> {
    if config.port == 0 {
        return Err(BillingError::InvalidConfig {
            var: ENV_PORT,
            value: config.port.to_string(),
            reason: "port must be between 1 and 65535".to_string(),
        });
    }

    Ok(())
}
