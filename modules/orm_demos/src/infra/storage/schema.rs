//! Entity-driven auto-migration
//!
//! Tables are derived from entity definitions rather than hand-written
//! migrations: a missing table is created with its indexes, an existing one
//! gains whatever entity columns it lacks. Columns are never dropped or
//! retyped.

use sea_orm::sea_query::{Alias, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, Schema};
use sea_orm_migration::SchemaManager;

/// Table options applied when creating tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// `DEFAULT CHARSET` for new tables; ignored outside MySQL
    pub charset: Option<String>,
}

impl SchemaOptions {
    pub fn with_charset(charset: impl Into<String>) -> Self {
        Self {
            charset: Some(charset.into()),
        }
    }
}

/// What a single `auto_migrate` call changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub table: String,
    /// The table did not exist and was created
    pub created: bool,
    /// Columns appended to an existing table
    pub added_columns: Vec<String>,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        !self.created && self.added_columns.is_empty()
    }
}

/// `CREATE TABLE IF NOT EXISTS` for `entity`; the charset is only set on MySQL.
pub fn create_table_statement<E>(
    backend: DbBackend,
    entity: E,
    opts: &SchemaOptions,
) -> TableCreateStatement
where
    E: EntityTrait,
{
    let mut create = Schema::new(backend).create_table_from_entity(entity);
    create.if_not_exists();
    if backend == DbBackend::MySql {
        if let Some(charset) = &opts.charset {
            create.character_set(charset.as_str());
        }
    }
    create
}

/// Bring the table behind `entity` in line with its definition.
pub async fn auto_migrate<E>(
    db: &DatabaseConnection,
    entity: E,
    opts: &SchemaOptions,
) -> Result<MigrationReport, DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let manager = SchemaManager::new(db);
    let table = entity.table_name().to_string();

    if !manager.has_table(&table).await? {
        manager
            .create_table(create_table_statement(backend, entity, opts))
            .await?;

        for index in schema.create_index_from_entity(E::default()) {
            manager.create_index(index).await?;
        }

        tracing::info!(table = %table, "table created");
        return Ok(MigrationReport {
            table,
            created: true,
            added_columns: Vec::new(),
        });
    }

    let definition = schema.create_table_from_entity(E::default());
    let mut added_columns = Vec::new();
    for column in definition.get_columns() {
        let name = column.get_column_name();
        if manager.has_column(&table, &name).await? {
            continue;
        }

        let mut column = column.clone();
        manager
            .alter_table(
                Table::alter()
                    .table(Alias::new(table.as_str()))
                    .add_column(&mut column)
                    .to_owned(),
            )
            .await?;
        tracing::info!(table = %table, column = %name, "column added");
        added_columns.push(name);
    }

    if added_columns.is_empty() {
        tracing::debug!(table = %table, "no schema changes detected");
    }

    Ok(MigrationReport {
        table,
        created: false,
        added_columns,
    })
}
