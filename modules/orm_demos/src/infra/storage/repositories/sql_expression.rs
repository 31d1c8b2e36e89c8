//! Inserts whose column values may be raw SQL expressions

use crate::error::DemoError;
use crate::infra::storage::entity::sql_express_user;
use sea_orm::sea_query::{Expr, Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Value};
use std::sync::Arc;

/// Value written to one column
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Bound as a plain parameter
    Value(Value),
    /// Raw SQL with `?` placeholders, bound to `args` in order
    Expr { sql: String, args: Vec<Value> },
}

impl FieldValue {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn expr<I, V>(sql: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Expr {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn into_simple_expr(self) -> SimpleExpr {
        match self {
            Self::Value(value) => SimpleExpr::Value(value),
            Self::Expr { sql, args } => Expr::cust_with_values(sql, args),
        }
    }
}

pub struct SqlExpressionRepository {
    db: Arc<DatabaseConnection>,
}

impl SqlExpressionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert one row built from column/value pairs. Returns the new id.
    pub async fn insert(
        &self,
        fields: Vec<(sql_express_user::Column, FieldValue)>,
    ) -> Result<i32, DemoError> {
        if fields.is_empty() {
            return Err(DbErr::Custom("no columns to insert".to_string()).into());
        }

        let (columns, values): (Vec<_>, Vec<_>) = fields
            .into_iter()
            .map(|(column, value)| (column, value.into_simple_expr()))
            .unzip();

        let mut insert = Query::insert();
        insert
            .into_table(sql_express_user::Entity)
            .columns(columns)
            .values(values)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let backend = self.db.get_database_backend();
        let result = self.db.execute(backend.build(&insert)).await?;

        let id = i32::try_from(result.last_insert_id())
            .map_err(|_| DbErr::Custom("inserted id out of range".to_string()))?;
        Ok(id)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<sql_express_user::Model>, DemoError> {
        Ok(sql_express_user::Entity::find_by_id(id).one(&*self.db).await?)
    }
}
