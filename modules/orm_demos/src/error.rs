//! Error type shared by repositories and demos

use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The database could not be reached
    #[error("failed to connect to database")]
    Connect {
        #[source]
        source: DbErr,
    },

    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid configuration: {0}")]
    Config(#[source] Box<figment::Error>),
}

impl DemoError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
