//! Product catalog with soft deletes

use crate::contract::{NewProduct, ProductChanges};
use crate::error::DemoError;
use crate::infra::storage::entity::product;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use std::sync::Arc;

pub struct ProductRepository {
    db: Arc<DatabaseConnection>,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create(&self, draft: &NewProduct) -> Result<product::Model, DemoError> {
        let active: product::ActiveModel = draft.into();
        Ok(active.insert(&*self.db).await?)
    }

    /// Find a live product by primary key
    pub async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, DemoError> {
        let result = product::Entity::find_by_id(id)
            .filter(product::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;

        Ok(result)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<product::Model>, DemoError> {
        let result = product::Entity::find()
            .filter(product::Column::Code.eq(code))
            .filter(product::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?;

        Ok(result)
    }

    /// Find a product by primary key, soft-deleted or not
    pub async fn find_unscoped(&self, id: i32) -> Result<Option<product::Model>, DemoError> {
        Ok(product::Entity::find_by_id(id).one(&*self.db).await?)
    }

    /// Update only the price column.
    pub async fn update_price(
        &self,
        row: product::Model,
        price: i64,
    ) -> Result<product::Model, DemoError> {
        let mut active: product::ActiveModel = row.into();
        active.price = Set(price);
        Ok(active.update(&*self.db).await?)
    }

    /// Update every field present in `changes` in one statement.
    pub async fn apply_changes(
        &self,
        row: product::Model,
        changes: &ProductChanges,
    ) -> Result<product::Model, DemoError> {
        if changes.is_empty() {
            return Ok(row);
        }
        Ok(changes.apply_to(row).update(&*self.db).await?)
    }

    /// Mark a product deleted. Returns the number of rows affected.
    pub async fn soft_delete(&self, id: i32) -> Result<u64, DemoError> {
        let result = product::Entity::update_many()
            .col_expr(product::Column::DeletedAt, Expr::value(chrono::Utc::now()))
            .filter(product::Column::Id.eq(id))
            .filter(product::Column::DeletedAt.is_null())
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Remove the row for good, soft-deleted or not.
    pub async fn purge(&self, id: i32) -> Result<u64, DemoError> {
        let result = product::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}
