//! Users table, shared by the `struct`, `query` and `hook` demos

use super::stamp_timestamps;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{self, Set};

/// Role the insert hook refuses to persist
pub const FORBIDDEN_ROLE: &str = "admin";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Auto-increment primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Assigned by the insert hook
    pub uuid: Option<Uuid>,

    /// Display name
    #[sea_orm(default_value = "")]
    pub name: String,

    /// Contact address, if any
    pub email: Option<String>,

    /// Age in years; `0` when not written
    #[sea_orm(default_value = 0)]
    pub age: i32,

    /// Role name; `admin` is rejected on insert
    #[sea_orm(default_value = "")]
    pub role: String,

    /// Date of birth
    pub birthday: Option<DateTimeUtc>,

    /// Membership number
    pub member_number: Option<String>,

    /// When the account was activated
    pub activated_at: Option<DateTimeUtc>,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.uuid = Set(Some(Uuid::new_v4()));

            if let ActiveValue::Set(role) | ActiveValue::Unchanged(role) = &self.role {
                if role == FORBIDDEN_ROLE {
                    return Err(DbErr::Custom("invalid role".to_string()));
                }
            }
        }

        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}
