//! Contract layer - input models handed to repositories
//!
//! Stored rows are the sea-orm entity models themselves; these types only
//! describe what a caller wants written.

pub mod model;

pub use model::{NewCardholder, NewPolyglot, NewProduct, NewUser, ProductChanges};
