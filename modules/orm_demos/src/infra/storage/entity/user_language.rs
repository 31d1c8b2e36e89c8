//! Join table between `mm_users` and `mm_languages`

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_languages")]
pub struct Model {
    /// User side (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub mm_user_id: i32,

    /// Language side (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub mm_language_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to mm_users
    #[sea_orm(
        belongs_to = "super::mm_user::Entity",
        from = "Column::MmUserId",
        to = "super::mm_user::Column::Id",
        on_delete = "Cascade"
    )]
    MmUser,
    /// Foreign key to mm_languages
    #[sea_orm(
        belongs_to = "super::mm_language::Entity",
        from = "Column::MmLanguageId",
        to = "super::mm_language::Column::Id",
        on_delete = "Cascade"
    )]
    MmLanguage,
}

impl Related<super::mm_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MmUser.def()
    }
}

impl Related<super::mm_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MmLanguage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
