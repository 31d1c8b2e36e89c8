//! Many-to-many through `user_languages`, navigable from users only

use crate::contract::NewPolyglot;
use crate::error::DemoError;
use crate::infra::storage::entity::{mm_language, mm_user, user_language};
use crate::infra::storage::mapper;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::sync::Arc;

pub struct LanguageDirectoryRepository {
    db: Arc<DatabaseConnection>,
}

impl LanguageDirectoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert the user, one new language row per listed name, and the join
    /// rows between them.
    pub async fn create_user_with_languages(
        &self,
        draft: &NewPolyglot,
    ) -> Result<(mm_user::Model, Vec<mm_language::Model>), DemoError> {
        let txn = self.db.begin().await?;

        let user = mm_user::ActiveModel::from(draft).insert(&txn).await?;

        let mut languages = Vec::with_capacity(draft.languages.len());
        for name in &draft.languages {
            languages.push(mapper::language(name).insert(&txn).await?);
        }

        if !languages.is_empty() {
            let links = languages.iter().map(|language| user_language::ActiveModel {
                mm_user_id: Set(user.id),
                mm_language_id: Set(language.id),
            });
            user_language::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok((user, languages))
    }

    /// Languages linked to a live user, in insertion order.
    pub async fn languages_of(&self, user_id: i32) -> Result<Vec<mm_language::Model>, DemoError> {
        let user = mm_user::Entity::find_by_id(user_id)
            .filter(mm_user::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| DemoError::not_found("mm_user", user_id))?;

        let languages = user
            .find_related(mm_language::Entity)
            .order_by_asc(mm_language::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(languages)
    }
}
