//! Users with hook-assigned UUIDs

use crate::contract::NewUser;
use crate::error::DemoError;
use crate::infra::storage::entity::user;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IdenStatic, Iterable, PaginatorTrait,
    TransactionTrait,
};
use std::sync::Arc;

pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create(&self, draft: &NewUser) -> Result<user::Model, DemoError> {
        let active: user::ActiveModel = draft.into();
        Ok(active.insert(&*self.db).await?)
    }

    /// Insert only the `selected` columns of `draft`.
    ///
    /// Everything else is left to column defaults, except the columns the
    /// insert hook manages (`uuid`, timestamps), which are always written.
    pub async fn create_selected(
        &self,
        draft: &NewUser,
        selected: &[user::Column],
    ) -> Result<user::Model, DemoError> {
        let mut active: user::ActiveModel = draft.into();
        for column in user::Column::iter() {
            if !selected.iter().any(|s| s.as_str() == column.as_str()) {
                active.not_set(column);
            }
        }
        Ok(active.insert(&*self.db).await?)
    }

    /// Insert all drafts in one transaction, in order.
    ///
    /// Each row goes through the insert hook; a rejected row rolls back the
    /// whole batch.
    pub async fn create_batch(&self, drafts: &[NewUser]) -> Result<Vec<user::Model>, DemoError> {
        let txn = self.db.begin().await?;
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let active: user::ActiveModel = draft.into();
            created.push(active.insert(&txn).await?);
        }
        txn.commit().await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, DemoError> {
        Ok(user::Entity::find_by_id(id).one(&*self.db).await?)
    }

    /// Hard delete; `users` carries no soft-delete marker.
    pub async fn delete(&self, id: i32) -> Result<u64, DemoError> {
        let result = user::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DemoError> {
        Ok(user::Entity::find().count(&*self.db).await?)
    }
}
