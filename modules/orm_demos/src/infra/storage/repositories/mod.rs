//! SeaORM repositories, one per demo table group

pub mod cardholder;
pub mod language_directory;
pub mod product;
pub mod shared_language;
pub mod sql_expression;
pub mod user;

pub use cardholder::CardholderRepository;
pub use language_directory::LanguageDirectoryRepository;
pub use product::ProductRepository;
pub use shared_language::SharedLanguageRepository;
pub use sql_expression::{FieldValue, SqlExpressionRepository};
pub use user::UserRepository;
