use axum::{extract::State, response::Json};
use billing_shared::{PipelineStatus, ServiceInfo};

use crate::app::SharedConfig;

// 服务信息及流处理配置
pub async fn service_info(State(config): State<SharedConfig>) -> Json<ServiceInfo> {
    Json(ServiceInfo::from(config.as_ref()))
}

// 流水线状态：只根据 FLINK_ENABLED 返回 running / disabled
pub async fn pipeline_status(State(config): State<SharedConfig>) -> Json<PipelineStatus> {
    Json(PipelineStatus::from(config.as_ref()))
}
