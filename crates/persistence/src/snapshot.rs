// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards::{CoreError, SnapshotStore};

use crate::collections::SNAPSHOT_KEY;
use crate::storage::Storage;

/// Keeps the signup wizard snapshot under a single storage key.
#[derive(Debug, Clone)]
pub struct SnapshotRepository<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> SnapshotRepository<S> {
    /// Uses the default wizard snapshot key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SNAPSHOT_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }
}

impl<S: Storage> SnapshotStore for SnapshotRepository<S> {
    fn read(&self) -> Result<Option<String>, CoreError> {
        Ok(self.storage.get(&self.key)?)
    }

    fn write(&self, contents: &str) -> Result<(), CoreError> {
        Ok(self.storage.set(&self.key, contents)?)
    }

    fn clear(&self) -> Result<(), CoreError> {
        Ok(self.storage.remove(&self.key)?)
    }
}
