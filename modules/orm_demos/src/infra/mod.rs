//! Infrastructure - database connection and storage

pub mod db;
pub mod storage;
