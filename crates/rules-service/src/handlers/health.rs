//! 健康检查处理器

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::state::AppState;

/// 服务名（用于探针响应）
const SERVICE_NAME: &str = "reguler-rules-service";

/// 存活探针：服务进程正常即返回 ok
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// 就绪探针：检查当前存储是否可用
///
/// GET /ready
///
/// mock 存储始终就绪；持久化存储执行一次 `SELECT 1`。
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let storage_ok = state.rule_service.health_check().await.is_ok();
    let status = if storage_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if storage_ok { "ok" } else { "degraded" },
            "service": SERVICE_NAME,
            "checks": {
                "storage": {
                    "mode": state.rule_service.storage_mode().as_str(),
                    "status": if storage_ok { "ok" } else { "fail" }
                }
            }
        })),
    )
}
