//! Credit card owned by exactly one cardholder

use super::stamp_timestamps;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ass_credit_cards")]
pub struct Model {
    /// Auto-increment primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Card number
    pub number: String,

    /// Owning cardholder
    pub ass_user_id: i32,

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
    /// Foreign key to ass_users
    #[sea_orm(
        belongs_to = "super::ass_user::Entity",
        from = "Column::AssUserId",
        to = "super::ass_user::Column::Id",
        on_delete = "Cascade"
    )]
    AssUser,
}

impl Related<super::ass_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssUser.def()
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
