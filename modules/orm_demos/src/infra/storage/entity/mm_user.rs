//! Users reaching their languages through `user_languages`

use super::stamp_timestamps;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mm_users")]
pub struct Model {
    /// Auto-increment primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name
    pub name: String,

    /// Home location
    pub location: String,

    /// Contact address
    pub email: String,

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
    /// Join rows linking this user to languages
    #[sea_orm(has_many = "super::user_language::Entity")]
    UserLanguage,
}

impl Related<super::user_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLanguage.def()
    }
}

impl Related<super::mm_language::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_language::Relation::MmLanguage.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_language::Relation::MmUser.def().rev())
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
