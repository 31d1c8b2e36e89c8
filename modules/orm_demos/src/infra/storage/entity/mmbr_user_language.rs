//! Join table shared by both directions of the back reference

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mmbr_user_languages")]
pub struct Model {
    /// User side (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub mmbr_user_id: i32,

    /// Language side (part of composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub mmbr_language_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to mmbr_users
    #[sea_orm(
        belongs_to = "super::mmbr_user::Entity",
        from = "Column::MmbrUserId",
        to = "super::mmbr_user::Column::Id",
        on_delete = "Cascade"
    )]
    MmbrUser,
    /// Foreign key to mmbr_languages
    #[sea_orm(
        belongs_to = "super::mmbr_language::Entity",
        from = "Column::MmbrLanguageId",
        to = "super::mmbr_language::Column::Id",
        on_delete = "Cascade"
    )]
    MmbrLanguage,
}

impl Related<super::mmbr_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MmbrUser.def()
    }
}

impl Related<super::mmbr_language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MmbrLanguage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
