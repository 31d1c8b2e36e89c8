//! Many-to-many with a back reference: two users share one language row,
//! and the language can list its speakers.

use super::DemoContext;
use crate::contract::NewPolyglot;
use crate::error::DemoError;
use crate::infra::storage::entity::{mmbr_language, mmbr_user, mmbr_user_language};
use crate::infra::storage::repositories::shared_language::Speaker;
use crate::infra::storage::repositories::SharedLanguageRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};

/// Language both demo users speak
pub const SHARED_LANGUAGE: &str = "汉语";

#[derive(Debug, Clone)]
pub struct BackReferenceReport {
    pub migrations: Vec<MigrationReport>,
    pub speakers: Vec<Speaker>,
    pub shared: mmbr_language::Model,
    /// Users reached from the shared language
    pub shared_speakers: Vec<mmbr_user::Model>,
}

pub async fn run(ctx: &DemoContext) -> Result<BackReferenceReport, DemoError> {
    let migrations = vec![
        auto_migrate(ctx.db(), mmbr_user::Entity, &ctx.schema).await?,
        auto_migrate(ctx.db(), mmbr_language::Entity, &ctx.schema).await?,
        auto_migrate(ctx.db(), mmbr_user_language::Entity, &ctx.schema).await?,
    ];
    let repo = SharedLanguageRepository::new(ctx.shared_db());

    let drafts = [
        NewPolyglot::new("Yangwawa", "Yangwawa0323@163.com").speaking([SHARED_LANGUAGE, "English"]),
        NewPolyglot::new("jinzhu", "fake@qq.com").speaking([SHARED_LANGUAGE]),
    ];
    let speakers = repo.create_users(&drafts).await?;

    let shared = speakers
        .iter()
        .flat_map(|(_, languages)| languages.iter())
        .find(|l| l.name == SHARED_LANGUAGE)
        .cloned()
        .ok_or_else(|| DemoError::not_found("mmbr_language", SHARED_LANGUAGE))?;
    let shared_speakers = repo.speakers_of(shared.id).await?;
    tracing::info!(
        language = %shared.name,
        speakers = shared_speakers.len(),
        "back reference resolved"
    );

    Ok(BackReferenceReport {
        migrations,
        speakers,
        shared,
        shared_speakers,
    })
}
