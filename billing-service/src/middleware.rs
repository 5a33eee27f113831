use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::handlers::not_found;

// 访问日志：每个请求一行，格式类似 "GET /health HTTP/1.1" 200
pub async fn request_logging(
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let start = Instant::now();
    let method = req.method().clone();
    let version = req.version();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    let summary = format!("\"{} {} {:?}\" {}", method, target, version, status.as_u16());

    if status.is_server_error() {
        error!("{} - {}ms", summary, duration.as_millis());
    } else if status.is_client_error() {
        warn!("{} - {}ms", summary, duration.as_millis());
    } else {
        info!("{} - {}ms", summary, duration.as_millis());
    }

    Ok(response)
}

// 路径必须完全匹配：带查询串（包括空查询串 "?"）的请求一律 404
pub async fn exact_path(
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if req.uri().query().is_some() {
        return Ok(not_found().await.into_response());
    }

    Ok(next.run(req).await)
}
