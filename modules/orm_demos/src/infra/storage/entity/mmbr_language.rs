//! Languages that know their speakers

use super::stamp_timestamps;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mmbr_languages")]
pub struct Model {
    /// Auto-increment primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Language name, unique within one batch insert
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
    /// Join rows linking this language back to its speakers
    #[sea_orm(has_many = "super::mmbr_user_language::Entity")]
    MmbrUserLanguage,
}

impl Related<super::mmbr_user_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MmbrUserLanguage.def()
    }
}

impl Related<super::mmbr_user::Entity> for Entity {
    fn to() -> RelationDef {
        super::mmbr_user_language::Relation::MmbrUser.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::mmbr_user_language::Relation::MmbrLanguage.def().rev())
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
