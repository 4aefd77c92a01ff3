// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local storage for the Awards Portal.
//!
//! This crate provides the key/value store that stands in for browser
//! storage, the wizard snapshot adapter, and the demo services that emulate
//! the participation backend (Nominee Research Corps, notifications and the
//! waitlist).
//!
//! ## Storage Backends
//!
//! - **`SQLite`** via Diesel, in memory or on disk. Migrations are embedded
//!   and run when the connection is opened.
//! - **Memory**, a shared map for tests and throwaway demos.
//!
//! ## Consistency
//!
//! Every collection is a single JSON array under a fixed key and every
//! update rewrites it in full. Operations that span two collections are two
//! independent writes with no locking between them. This is only sound for a
//! single writer, which is the demo's operating assumption.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod collections;
mod diesel_schema;
mod error;
mod services;
mod snapshot;
mod storage;

#[cfg(test)]
mod tests;

pub use collections::{
    APPLICATIONS_KEY, AUTH_TOKEN_KEY, NOMINEE_PROFILES_KEY, NOTIFICATIONS_KEY, SNAPSHOT_KEY,
    VOLUNTEERS_KEY, WAITLIST_KEY, read_collection, write_collection,
};
pub use error::PersistenceError;
pub use services::{NotificationService, NrcService, ServiceOptions, WaitlistService};
pub use snapshot::SnapshotRepository;
pub use storage::{MemoryStorage, SqliteStorage, Storage};
