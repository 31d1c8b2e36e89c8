//! Cardholder side of the has-one association

use super::stamp_timestamps;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ass_users")]
pub struct Model {
    /// Auto-increment primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Cardholder name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,

    /// Soft delete timestamp
    #[sea_orm(indexed)]
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The card owned by this user
    #[sea_orm(has_one = "super::ass_credit_card::Entity")]
    AssCreditCard,
}

impl Related<super::ass_credit_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssCreditCard.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}
