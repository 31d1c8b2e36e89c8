//! Create a user, keep it around for a configurable while, then delete it.

use super::DemoContext;
use crate::contract::NewUser;
use crate::error::DemoError;
use crate::infra::storage::entity::user;
use crate::infra::storage::repositories::UserRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordLifecycleReport {
    pub migration: MigrationReport,
    pub created: user::Model,
    pub held_for: Duration,
    pub deleted: u64,
}

pub async fn run(ctx: &DemoContext) -> Result<RecordLifecycleReport, DemoError> {
    let migration = auto_migrate(ctx.db(), user::Entity, &ctx.schema).await?;
    let repo = UserRepository::new(ctx.shared_db());

    let draft = NewUser::named("Jinzhu")
        .with_age(18)
        .with_birthday(chrono::Utc::now());
    let created = repo.create(&draft).await?;

    let held_for = ctx.settings.hold_before_delete;
    if !held_for.is_zero() {
        tracing::info!(id = created.id, hold = ?held_for, "holding row before delete");
        tokio::time::sleep(held_for).await;
    }

    let deleted = repo.delete(created.id).await?;
    tracing::info!(id = created.id, rows = deleted, "user deleted");

    Ok(RecordLifecycleReport {
        migration,
        created,
        held_for,
        deleted,
    })
}
