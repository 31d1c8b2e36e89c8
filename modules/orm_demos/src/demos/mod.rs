//! Demo catalog
//!
//! Every demo migrates the tables it needs, performs a short, fixed
//! sequence of ORM calls and returns a typed report of what happened.

pub mod associate;
pub mod back_reference;
pub mod get_start;
pub mod hook;
pub mod many_to_many;
pub mod query;
pub mod record_lifecycle;
pub mod sql_express;

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::infra::storage::schema::SchemaOptions;
use sea_orm::DatabaseConnection;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Shared handles for running demos against one database
pub struct DemoContext {
    db: Arc<DatabaseConnection>,
    pub settings: DemoConfig,
    pub schema: SchemaOptions,
}

impl DemoContext {
    pub fn new(db: DatabaseConnection, settings: DemoConfig, schema: SchemaOptions) -> Self {
        Self {
            db: Arc::new(db),
            settings,
            schema,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub(crate) fn shared_db(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    GetStart,
    Struct,
    Query,
    Hook,
    SqlExpress,
    Associate,
    ManyToMany,
    BackReference,
}

impl Demo {
    const ALL: [Demo; 8] = [
        Demo::GetStart,
        Demo::Struct,
        Demo::Query,
        Demo::Hook,
        Demo::SqlExpress,
        Demo::Associate,
        Demo::ManyToMany,
        Demo::BackReference,
    ];

    /// Every demo, in catalog order
    pub fn all() -> &'static [Demo] {
        &Self::ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            Demo::GetStart => "get-start",
            Demo::Struct => "struct",
            Demo::Query => "query",
            Demo::Hook => "hook",
            Demo::SqlExpress => "sql-express",
            Demo::Associate => "associate",
            Demo::ManyToMany => "many2many",
            Demo::BackReference => "m2m-back-refer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::GetStart => "migrate, create, read, update and soft-delete a product",
            Demo::Struct => "create a user, hold it for a while, then delete it",
            Demo::Query => "field-restricted insert and batch insert",
            Demo::Hook => "pre-insert hook assigning a UUID and rejecting the admin role",
            Demo::SqlExpress => "insert with a raw SQL expression as a column value",
            Demo::Associate => "has-one association between a user and a credit card",
            Demo::ManyToMany => "many-to-many users and languages through a join table",
            Demo::BackReference => "many-to-many with a back reference from languages to users",
        }
    }

    pub async fn run(self, ctx: &DemoContext) -> Result<DemoReport, DemoError> {
        tracing::info!(demo = self.name(), "running demo");
        let report = match self {
            Demo::GetStart => DemoReport::GetStart(get_start::run(ctx).await?),
            Demo::Struct => DemoReport::Struct(record_lifecycle::run(ctx).await?),
            Demo::Query => DemoReport::Query(query::run(ctx).await?),
            Demo::Hook => DemoReport::Hook(hook::run(ctx).await?),
            Demo::SqlExpress => DemoReport::SqlExpress(sql_express::run(ctx).await?),
            Demo::Associate => DemoReport::Associate(associate::run(ctx).await?),
            Demo::ManyToMany => DemoReport::ManyToMany(many_to_many::run(ctx).await?),
            Demo::BackReference => DemoReport::BackReference(back_reference::run(ctx).await?),
        };
        Ok(report)
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|d| d.name()).collect();
                format!("unknown demo '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Outcome of a single demo run
#[derive(Debug, Clone)]
pub enum DemoReport {
    GetStart(get_start::GetStartReport),
    Struct(record_lifecycle::RecordLifecycleReport),
    Query(query::SelectiveInsertReport),
    Hook(hook::HookReport),
    SqlExpress(sql_express::SqlExpressReport),
    Associate(associate::AssociateReport),
    ManyToMany(many_to_many::ManyToManyReport),
    BackReference(back_reference::BackReferenceReport),
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoReport::GetStart(r) => write!(
                f,
                "product #{} {} -> {} at {}, soft-deleted: {}",
                r.created.id,
                r.created.code,
                r.after_changes.code,
                r.after_changes.price,
                !r.visible_after_delete
            ),
            DemoReport::Struct(r) => write!(
                f,
                "user #{} held for {:?}, rows deleted: {}",
                r.created.id, r.held_for, r.deleted
            ),
            DemoReport::Query(r) => write!(
                f,
                "selected insert #{}, batch ids: {:?}",
                r.selected.id, r.batch_ids
            ),
            DemoReport::Hook(r) => write!(
                f,
                "user #{} uuid {}, admin rejected: {}",
                r.created.id,
                r.created.uuid.map(|u| u.to_string()).unwrap_or_default(),
                r.rejection.as_deref().unwrap_or("no")
            ),
            DemoReport::SqlExpress(r) => write!(
                f,
                "{} lives in {}",
                r.inserted.name, r.inserted.location
            ),
            DemoReport::Associate(r) => write!(
                f,
                "{} holds card {}",
                r.holder.name, r.card.number
            ),
            DemoReport::ManyToMany(r) => write!(
                f,
                "{} speaks {}",
                r.user.name,
                r.languages
                    .iter()
                    .map(|l| l.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            DemoReport::BackReference(r) => write!(
                f,
                "{} users, {} spoken by {}",
                r.speakers.len(),
                r.shared.name,
                r.shared_speakers
                    .iter()
                    .map(|u| u.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
