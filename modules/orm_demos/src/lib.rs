//! ORM demonstrations
//!
//! A catalog of small, independent scenarios exercising sea-orm against a
//! relational database: auto-migration, inserts and batch inserts, single and
//! multi-field updates, soft deletes, has-one and many-to-many associations,
//! a pre-insert hook, and raw SQL expressions inside an insert.

pub mod config;
pub use config::{Config, DatabaseConfig, DemoConfig, LoggingConfig};

pub mod error;
pub use error::DemoError;

pub mod contract;
pub use contract::{NewCardholder, NewPolyglot, NewProduct, NewUser, ProductChanges};

pub mod demos;
pub use demos::{Demo, DemoContext, DemoReport};

pub mod infra;
pub use infra::db::connect;
pub use infra::storage::{entity, repositories};
pub use infra::storage::schema::{
    auto_migrate, create_table_statement, MigrationReport, SchemaOptions,
};
