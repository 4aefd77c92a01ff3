// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-array JSON collections stored under fixed keys.
//!
//! A collection is read, modified in memory and written back in full. Two
//! writers working on the same key at once will lose one update; the demo
//! services assume a single writer.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::PersistenceError;
use crate::storage::Storage;

pub const APPLICATIONS_KEY: &str = "nrc_applications";
pub const VOLUNTEERS_KEY: &str = "nrc_volunteers";
pub const NOMINEE_PROFILES_KEY: &str = "nrc_nominee_profiles";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const WAITLIST_KEY: &str = "waitlist_entries";
pub const SNAPSHOT_KEY: &str = "signup_wizard_snapshot";
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Reads the collection under `key`. A missing key is an empty collection.
///
/// # Errors
///
/// Returns an error if the storage cannot be read or the stored value is not
/// a JSON array of `T`. Callers must not write the collection back in that
/// case, or the records they could not read are lost.
pub fn read_collection<T, S>(storage: &S, key: &str) -> Result<Vec<T>, PersistenceError>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    let raw: Option<String> = storage.get(key).inspect_err(|err| {
        warn!(key, error = %err, "Failed to read collection");
    })?;
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    serde_json::from_str::<Vec<T>>(&raw).map_err(|err| {
        warn!(key, error = %err, "Stored collection is not valid JSON");
        PersistenceError::from(err)
    })
}

/// Replaces the collection under `key`.
///
/// # Errors
///
/// Returns an error if the items cannot be serialized or stored.
pub fn write_collection<T, S>(storage: &S, key: &str, items: &[T]) -> Result<(), PersistenceError>
where
    T: Serialize,
    S: Storage + ?Sized,
{
    let raw: String = serde_json::to_string(items)?;
    storage.set(key, &raw)
}
