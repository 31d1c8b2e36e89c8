//! Insert whose `location` is computed by the database with `UPPER(?)`

use super::DemoContext;
use crate::error::DemoError;
use crate::infra::storage::entity::sql_express_user;
use crate::infra::storage::repositories::{FieldValue, SqlExpressionRepository};
use crate::infra::storage::schema::{auto_migrate, MigrationReport};

#[derive(Debug, Clone)]
pub struct SqlExpressReport {
    pub migration: MigrationReport,
    pub inserted: sql_express_user::Model,
}

pub async fn run(ctx: &DemoContext) -> Result<SqlExpressReport, DemoError> {
    let migration = auto_migrate(ctx.db(), sql_express_user::Entity, &ctx.schema).await?;
    let repo = SqlExpressionRepository::new(ctx.shared_db());

    let id = repo
        .insert(vec![
            (sql_express_user::Column::Name, FieldValue::value("JinZhu")),
            (
                sql_express_user::Column::Location,
                FieldValue::expr("UPPER(?)", ["HuNan ChangSha"]),
            ),
        ])
        .await?;

    let inserted = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DemoError::not_found("sql_express_user", id))?;
    tracing::info!(name = %inserted.name, location = %inserted.location, "inserted");

    Ok(SqlExpressReport {
        migration,
        inserted,
    })
}
