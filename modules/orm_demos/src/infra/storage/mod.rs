//! Storage layer - entities, auto-migration and repositories

pub mod entity;
pub mod mapper;
pub mod repositories;
pub mod schema;
