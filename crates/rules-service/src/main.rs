//! 规则管理后台服务
//!
//! 启动时根据 `storage.mock_data` 选定存储实现，然后提供 REST API。

use std::sync::Arc;

use reguler_rules_service::{
    MemoryRuleStore, PgRuleStore, RuleStore, StorageMode, repository::MIGRATOR, routes,
    state::AppState,
};
use reguler_shared::{config::AppConfig, database::Database, observability};
use tokio::net::TcpListener;
use tracing::{info, warn};

const SERVICE_NAME: &str = "reguler-rules-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 配置加载失败时回退到默认值，待日志初始化后再报告
    let (config, config_error) = match AppConfig::load(SERVICE_NAME) {
        Ok(config) => (config, None),
        Err(e) => (
            AppConfig {
                service_name: SERVICE_NAME.to_string(),
                ..Default::default()
            },
            Some(e),
        ),
    };

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config).await?;

    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let mode = StorageMode::from_mock_flag(config.storage.mock_data);
    info!(
        storage = %mode,
        environment = %config.environment,
        "Starting {} on {}",
        SERVICE_NAME,
        config.server_addr()
    );

    let store = build_store(&config, mode).await?;
    let state = AppState::new(store);
    let app = routes::build_router(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 按存储模式构造规则仓储
///
/// 仅在启动时调用一次，运行期间不可切换
async fn build_store(config: &AppConfig, mode: StorageMode) -> anyhow::Result<Arc<dyn RuleStore>> {
    match mode {
        StorageMode::Mock => {
            info!("Using in-memory mock rules");
            Ok(Arc::new(MemoryRuleStore::seeded()))
        }
        StorageMode::Postgres => {
            let db = Database::connect(&config.database).await?;
            if config.storage.run_migrations {
                db.run_migrations(&MIGRATOR).await?;
            }
            Ok(Arc::new(PgRuleStore::new(db.pool().clone())))
        }
    }
}

/// 监听关闭信号
///
/// 收到 Ctrl+C 或 SIGTERM 后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
