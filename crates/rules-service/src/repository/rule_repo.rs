//! PostgreSQL 规则仓储
//!
//! 规则以文档形式存放：`id` 为主键，`fields` 为无 schema 的 JSONB。

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::debug;
use uuid::Uuid;

use super::traits::{RuleStore, StorageMode};
use crate::error::Result;
use crate::models::{Fields, Rule};

/// 数据库查询结果行结构
#[derive(sqlx::FromRow)]
struct RuleRow {
    id: String,
    fields: Json<Fields>,
}

impl From<RuleRow> for Rule {
    fn from(row: RuleRow) -> Self {
        Rule::with_id(row.id, row.fields.0)
    }
}

/// PostgreSQL 规则仓储
pub struct PgRuleStore {
    pool: PgPool,
}

impl PgRuleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RuleStore for PgRuleStore {
    fn mode(&self) -> StorageMode {
        StorageMode::Postgres
    }

    async fn list_all(&self) -> Result<Vec<Rule>> {
        let rows = sqlx::query_as::<_, RuleRow>(
            r#"
            SELECT id, fields
            FROM rules
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Rule::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Rule>> {
        let row = sqlx::query_as::<_, RuleRow>("SELECT id, fields FROM rules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Rule::from))
    }

    async fn count(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rules")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn save(&self, rule: Rule) -> Result<Rule> {
        let id = rule.id.unwrap_or_else(|| Uuid::now_v7().to_string());

        let row = sqlx::query_as::<_, RuleRow>(
            r#"
            INSERT INTO rules (id, fields)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE
            SET fields = EXCLUDED.fields,
                updated_at = NOW()
            RETURNING id, fields
            "#,
        )
        .bind(&id)
        .bind(Json(rule.fields))
        .fetch_one(&self.pool)
        .await?;

        debug!(rule_id = %row.id, "Rule saved");

        Ok(row.into())
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
