//! The users insert hook: every new row gets a UUID, admins are refused.

use super::DemoContext;
use crate::contract::NewUser;
use crate::error::DemoError;
use crate::infra::storage::entity::user;
use crate::infra::storage::repositories::UserRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};
use sea_orm::DbErr;

#[derive(Debug, Clone)]
pub struct HookReport {
    pub migration: MigrationReport,
    pub created: user::Model,
    /// Hook error for the admin insert, if it was refused
    pub rejection: Option<String>,
}

pub async fn run(ctx: &DemoContext) -> Result<HookReport, DemoError> {
    let migration = auto_migrate(ctx.db(), user::Entity, &ctx.schema).await?;
    let repo = UserRepository::new(ctx.shared_db());

    let draft = NewUser::named("Jinzhu")
        .with_age(18)
        .with_birthday(chrono::Utc::now())
        .with_email("JinZhu@github.com");
    let created = repo.create(&draft).await?;
    tracing::info!(id = created.id, uuid = ?created.uuid, "user created");

    let admin = NewUser::named("root").with_role(user::FORBIDDEN_ROLE);
    let rejection = match repo.create(&admin).await {
        Ok(row) => {
            tracing::warn!(id = row.id, "admin insert was not rejected");
            None
        }
        Err(DemoError::Db(DbErr::Custom(reason))) => {
            tracing::info!(%reason, "admin insert rejected");
            Some(reason)
        }
        Err(e) => return Err(e),
    };

    Ok(HookReport {
        migration,
        created,
        rejection,
    })
}
