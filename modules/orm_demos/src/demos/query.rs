//! Field-restricted insert followed by a batch insert

use super::DemoContext;
use crate::contract::NewUser;
use crate::error::DemoError;
use crate::infra::storage::entity::user;
use crate::infra::storage::repositories::UserRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};

/// Columns written by the restricted insert
pub const SELECTED_COLUMNS: [user::Column; 3] =
    [user::Column::Name, user::Column::Age, user::Column::Email];

#[derive(Debug, Clone)]
pub struct SelectiveInsertReport {
    pub migration: MigrationReport,
    /// Row written from a draft with a birthday that was not selected
    pub selected: user::Model,
    /// Ids assigned to the batch, in insertion order
    pub batch_ids: Vec<i32>,
}

pub async fn run(ctx: &DemoContext) -> Result<SelectiveInsertReport, DemoError> {
    let migration = auto_migrate(ctx.db(), user::Entity, &ctx.schema).await?;
    let repo = UserRepository::new(ctx.shared_db());

    let draft = NewUser::named("Jinzhu")
        .with_age(18)
        .with_birthday(chrono::Utc::now())
        .with_email("JinZhu@github.com");
    let selected = repo.create_selected(&draft, &SELECTED_COLUMNS).await?;

    let batch = ["jinzhu1", "jinzhu2", "jinzhu3"].map(|name| NewUser::named(name));
    let created = repo.create_batch(&batch).await?;

    let batch_ids: Vec<i32> = created.iter().map(|u| u.id).collect();
    for id in &batch_ids {
        tracing::info!(id, "user id");
    }

    Ok(SelectiveInsertReport {
        migration,
        selected,
        batch_ids,
    })
}
