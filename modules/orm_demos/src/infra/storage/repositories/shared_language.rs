//! Many-to-many with a back reference: users know their languages and
//! languages know their speakers

use crate::contract::NewPolyglot;
use crate::error::DemoError;
use crate::infra::storage::entity::{mmbr_language, mmbr_user, mmbr_user_language};
use crate::infra::storage::mapper;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

/// A created user with the languages linked to it
pub type Speaker = (mmbr_user::Model, Vec<mmbr_language::Model>);

pub struct SharedLanguageRepository {
    db: Arc<DatabaseConnection>,
}

impl SharedLanguageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a batch of users in one transaction.
    ///
    /// A language name appearing anywhere in the batch becomes a single row
    /// that every user listing it links to.
    pub async fn create_users(&self, drafts: &[NewPolyglot]) -> Result<Vec<Speaker>, DemoError> {
        let txn = self.db.begin().await?;
        let mut by_name: HashMap<&str, mmbr_language::Model> = HashMap::new();
        let mut created = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let user = mmbr_user::ActiveModel::from(draft).insert(&txn).await?;

            let mut languages: Vec<mmbr_language::Model> = Vec::new();
            for name in &draft.languages {
                let language = match by_name.get(name.as_str()) {
                    Some(existing) => existing.clone(),
                    None => {
                        let inserted = mapper::shared_language(name).insert(&txn).await?;
                        by_name.insert(name.as_str(), inserted.clone());
                        inserted
                    }
                };
                // Listing a language twice links it once
                if languages.iter().any(|l| l.id == language.id) {
                    continue;
                }

                mmbr_user_language::ActiveModel {
                    mmbr_user_id: Set(user.id),
                    mmbr_language_id: Set(language.id),
                }
                .insert(&txn)
                .await?;
                languages.push(language);
            }

            created.push((user, languages));
        }

        txn.commit().await?;
        tracing::debug!(users = created.len(), languages = by_name.len(), "batch created");
        Ok(created)
    }

    pub async fn languages_of(&self, user_id: i32) -> Result<Vec<mmbr_language::Model>, DemoError> {
        let user = mmbr_user::Entity::find_by_id(user_id)
            .filter(mmbr_user::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| DemoError::not_found("mmbr_user", user_id))?;

        let languages = user
            .find_related(mmbr_language::Entity)
            .order_by_asc(mmbr_language::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(languages)
    }

    /// Users linked to a language, through the back reference.
    pub async fn speakers_of(&self, language_id: i32) -> Result<Vec<mmbr_user::Model>, DemoError> {
        let language = mmbr_language::Entity::find_by_id(language_id)
            .filter(mmbr_language::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| DemoError::not_found("mmbr_language", language_id))?;

        let speakers = language
            .find_related(mmbr_user::Entity)
            .order_by_asc(mmbr_user::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(speakers)
    }

    pub async fn find_languages_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<mmbr_language::Model>, DemoError> {
        let languages = mmbr_language::Entity::find()
            .filter(mmbr_language::Column::Name.eq(name))
            .filter(mmbr_language::Column::DeletedAt.is_null())
            .order_by_asc(mmbr_language::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(languages)
    }
}
