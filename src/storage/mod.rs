//! SQLite storage layer for Ticklist.
//!
//! This module provides the persistence layer using SQLite with:
//! - WAL mode and foreign-key enforcement
//! - Transaction discipline for the multi-row template seed
//! - Cache-invalidation publishing after every committed mutation
//!
//! # Submodules
//!
//! - [`schema`] - Table and index definitions
//! - [`migrations`] - Additive column migrations for older databases
//! - [`sqlite`] - Main SQLite storage implementation

pub mod migrations;
pub mod schema;
pub mod sqlite;

pub use sqlite::{MutationScope, SqliteStorage};
