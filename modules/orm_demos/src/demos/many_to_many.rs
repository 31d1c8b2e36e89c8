//! Many-to-many: one user linked to two languages through `user_languages`

use super::DemoContext;
use crate::contract::NewPolyglot;
use crate::error::DemoError;
use crate::infra::storage::entity::{mm_language, mm_user, user_language};
use crate::infra::storage::repositories::LanguageDirectoryRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};

#[derive(Debug, Clone)]
pub struct ManyToManyReport {
    pub migrations: Vec<MigrationReport>,
    pub user: mm_user::Model,
    /// Languages read back through the join table
    pub languages: Vec<mm_language::Model>,
}

pub async fn run(ctx: &DemoContext) -> Result<ManyToManyReport, DemoError> {
    let migrations = vec![
        auto_migrate(ctx.db(), mm_user::Entity, &ctx.schema).await?,
        auto_migrate(ctx.db(), mm_language::Entity, &ctx.schema).await?,
        auto_migrate(ctx.db(), user_language::Entity, &ctx.schema).await?,
    ];
    let repo = LanguageDirectoryRepository::new(ctx.shared_db());

    let draft = NewPolyglot::new("Yangwawa", "Yangwawa0323@163.com").speaking(["汉语", "English"]);
    let (user, _) = repo.create_user_with_languages(&draft).await?;

    let languages = repo.languages_of(user.id).await?;
    tracing::info!(user = user.id, languages = languages.len(), "polyglot created");

    Ok(ManyToManyReport {
        migrations,
        user,
        languages,
    })
}
