//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router, middleware,
    routing::{get, put},
};
use reguler_shared::observability::middleware as obs_middleware;
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, state::AppState};

/// 构建规则管理路由
///
/// 静态路径 `/rules/fields`、`/rules/export` 与 `/rules/{id}` 共存，
/// 前者按 GET 匹配，后者只接受 PUT。静态路径优先匹配，因此 id 为
/// `fields` 或 `export` 的 PUT 不会进入更新处理器，而是返回 405。
pub fn rule_routes() -> Router<AppState> {
    Router::new()
        .route("/rules/fields", get(handlers::rule::get_fields))
        .route(
            "/rules",
            get(handlers::rule::list_rules).post(handlers::rule::create_rule),
        )
        .route("/rules/export", get(handlers::rule::export_rules))
        .route("/rules/{id}", put(handlers::rule::update_rule))
}

/// 构建完整的 API 路由（不含前缀，由 `build_router` 挂载到 /api）
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(rule_routes())
}

/// 跨域配置：允许任意来源、方法和请求头
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 构建应用路由
///
/// 包含 API 路由、探针、CORS 以及可观测性中间件
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .layer(cors_layer())
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
