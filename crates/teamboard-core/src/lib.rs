//! Teamboard Core Library
//!
//! Entity model, snapshot repository, aggregation and filtering for the
//! Teamboard project dashboard. Everything here is a pure function of an
//! immutable [`Snapshot`](repository::Snapshot).

pub mod activity;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod priority;
pub mod progress;
pub mod project;
pub mod repository;
pub mod stats;
pub mod task;
pub mod team;
pub mod user;

#[cfg(test)]
mod fixtures;

pub use error::{TeamboardError, TeamboardResult};
pub use repository::{Snapshot, SnapshotData};
