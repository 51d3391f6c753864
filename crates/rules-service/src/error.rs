//! 规则服务错误类型定义
//!
//! 规则服务对外没有业务错误分类：更新不存在的规则只是“无效果”。
//! 这里的错误全部是存储层面的失败，统一映射为 500。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 规则服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

impl RuleError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for RuleError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 详细原因只写日志，不返回给调用方
        match &self {
            Self::Database(e) => tracing::error!(error = %e, "Database operation failed"),
        }

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": "服务内部错误，请稍后重试",
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let err = RuleError::Database(sqlx::Error::PoolTimedOut);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "DATABASE_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("pool"));
    }
}
