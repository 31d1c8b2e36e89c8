//! Has-one association: a cardholder and their credit card

use crate::contract::NewCardholder;
use crate::error::DemoError;
use crate::infra::storage::entity::{ass_credit_card, ass_user};
use crate::infra::storage::mapper;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use std::sync::Arc;

pub struct CardholderRepository {
    db: Arc<DatabaseConnection>,
}

impl CardholderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert the cardholder, then the card pointing at it.
    pub async fn create_with_card(
        &self,
        draft: &NewCardholder,
    ) -> Result<(ass_user::Model, ass_credit_card::Model), DemoError> {
        let txn = self.db.begin().await?;
        let holder = mapper::cardholder(&draft.name).insert(&txn).await?;
        let card = mapper::credit_card(&draft.card_number, holder.id)
            .insert(&txn)
            .await?;
        txn.commit().await?;

        Ok((holder, card))
    }

    pub async fn find_with_card(
        &self,
        id: i32,
    ) -> Result<Option<(ass_user::Model, Option<ass_credit_card::Model>)>, DemoError> {
        let result = ass_user::Entity::find_by_id(id)
            .filter(ass_user::Column::DeletedAt.is_null())
            .find_also_related(ass_credit_card::Entity)
            .one(&*self.db)
            .await?;

        Ok(result)
    }
}
