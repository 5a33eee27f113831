use axum::{
    handler::Handler,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use billing_shared::ServiceConfig;
use std::sync::Arc;

use crate::handlers;
use crate::middleware::{exact_path, request_logging};

// 进程级配置，在 main 中构建一次，只读共享
pub type SharedConfig = Arc<ServiceConfig>;

pub fn create_app(config: SharedConfig) -> Router {
    Router::new()
        .route("/", get_only(handlers::service_info))
        .route("/health", get_only(handlers::health_check))
        .route("/ready", get_only(handlers::readiness_check))
        .route("/pipeline/status", get_only(handlers::pipeline_status))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(exact_path))
        .layer(middleware::from_fn(request_logging))
        .with_state(config)
}

// GET 之外的方法（包括 HEAD）一律返回 404
fn get_only<H, T>(handler: H) -> MethodRouter<SharedConfig>
where
    H: Handler<T, SharedConfig>,
    T: 'static,
{
    get(handler)
        .head(handlers::not_found)
        .fallback(handlers::not_found)
}
