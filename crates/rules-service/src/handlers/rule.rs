//! 规则 API 处理器
//!
//! 四个核心端点一一映射到 `RuleService`，外加一个 CSV 导出端点。
//! 创建和更新不返回响应体；更新不存在的 id 同样返回 200。

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    dto::{RulePageQuery, RulePageResponse, RuleRowDto},
    error::RuleError,
    export::{EXPORT_FILE_NAME, rules_to_csv},
    models::Fields,
    state::AppState,
};

/// 获取字段目录
///
/// GET /api/rules/fields
pub async fn get_fields(State(state): State<AppState>) -> Json<&'static [&'static str]> {
    Json(state.rule_service.get_fields())
}

/// 分页获取规则
///
/// GET /api/rules?page=0&size=25
pub async fn list_rules(
    State(state): State<AppState>,
    Query(query): Query<RulePageQuery>,
) -> Result<Json<RulePageResponse>, RuleError> {
    let rules = state.rule_service.get_rules(query.page, query.size).await?;
    let total = state.rule_service.get_total_count().await?;

    debug!(
        page = query.page,
        size = query.size,
        total,
        returned = rules.len(),
        "Rules listed"
    );

    Ok(Json(RulePageResponse {
        data: rules.into_iter().map(RuleRowDto::from).collect(),
        total,
        page: query.page,
        size: query.size,
    }))
}

/// 创建规则
///
/// POST /api/rules
pub async fn create_rule(
    State(state): State<AppState>,
    Json(fields): Json<Fields>,
) -> Result<StatusCode, RuleError> {
    state.rule_service.add_rule(fields).await?;
    Ok(StatusCode::OK)
}

/// 更新规则
///
/// PUT /api/rules/{id}
pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Fields>,
) -> Result<StatusCode, RuleError> {
    state.rule_service.update_rule(&id, fields).await?;
    Ok(StatusCode::OK)
}

/// 导出当前页为 CSV
///
/// GET /api/rules/export?page=0&size=25
pub async fn export_rules(
    State(state): State<AppState>,
    Query(query): Query<RulePageQuery>,
) -> Result<impl IntoResponse, RuleError> {
    let rules = state.rule_service.get_rules(query.page, query.size).await?;
    let csv = rules_to_csv(state.rule_service.get_fields(), &rules);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        csv,
    ))
}
