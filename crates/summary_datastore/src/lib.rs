//! # DataStore Module
//!
//! This module provides persistence for summaries of tracked videos.
//!
//! Only summaries of tracked videos are ever written here; ad-hoc summaries
//! are ephemeral and never reach the store. Lookups are keyed by the YouTube
//! video id.

mod datastore;
mod domain;

pub use datastore::postgres::PgDataStore;
pub use datastore::{DataStore, NullStore};
pub use domain::StoredSummary;
