use axum::{http::StatusCode, response::Json};
use billing_shared::{ErrorBody, HealthStatus};

// 健康检查
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

// 就绪检查
pub async fn readiness_check() -> Json<HealthStatus> {
    Json(HealthStatus::ready())
}

// 未知路径、带查询串的请求、以及已知路径上的非 GET 方法
pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found()))
}
