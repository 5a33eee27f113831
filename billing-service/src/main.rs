use anyhow::{Context, Result};
use billing_shared::{load_config, BillingError, ServiceConfig};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

mod app;
mod handlers;
mod logging;
mod middleware;

use app::{create_app, SharedConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init_logging();

    // 加载配置（只读取一次）
    let config = load_config().context("Failed to load configuration")?;

    run(config, shutdown_signal()).await
}

// 绑定失败时在打印启动日志和处理任何请求之前返回错误，main 以非零状态退出
async fn run<F>(config: ServiceConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // 绑定端口失败直接退出，不重试
    let listener = bind_listener(config.bind_addr()).await?;

    log_startup(&config);

    serve(listener, Arc::new(config), shutdown)
        .await
        .context("Server error")?;

    Ok(())
}

async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, BillingError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| BillingError::Bind { addr, source })
}

fn log_startup(config: &ServiceConfig) {
    info!("Billing Service started on port {}", config.port);
    info!(
        "Flink pipeline: {}",
        if config.flink.enabled { "enabled" } else { "disabled" }
    );
    if config.flink.enabled {
        info!("Flink parallelism: {}", config.flink.parallelism);
        info!(
            "Flink checkpoint interval: {}ms",
            config.flink.checkpoint_interval_ms
        );
    }
}

// 停止接收新连接，等待进行中的请求完成
async fn serve<F>(listener: TcpListener, config: SharedConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app(config))
        .with_graceful_shutdown(shutdown)
        .await
}

// 等待 Ctrl+C 或 SIGTERM（Unix）
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down...");
}
