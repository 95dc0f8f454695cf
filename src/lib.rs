//! Ticklist persistence and query core.
//!
//! The local storage layer of the Ticklist checklist app: relational
//! schema, repository operations over checklists/topics/items, derived
//! aggregation (progress, reminder grouping), template seeding, and the
//! cache-invalidation contract the UI read layer consumes.
//!
//! # Architecture
//!
//! - [`model`] - Data types (Checklist, Topic, Item) and typed patches
//! - [`storage`] - SQLite database layer
//! - [`aggregate`] - Pure derived-value computation over fetched rows
//! - [`templates`] - Static checklist blueprints
//! - [`invalidate`] - Push-based cache invalidation for UI read caches
//! - [`config`] - Database path resolution
//! - [`error`] - Error types and handling
//!
//! # Read/invalidate cycle
//!
//! Consumers query through [`storage::SqliteStorage`], cache the results,
//! and subscribe to [`invalidate::Notifier`]; every committed mutation
//! publishes the stale [`invalidate::CacheKey`]s and the consumer
//! re-queries. Aggregates (progress, counts) are recomputed from live rows
//! on every read and never persisted.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod invalidate;
pub mod model;
pub mod storage;
pub mod templates;

pub use error::{Error, Result};
pub use storage::SqliteStorage;
