// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer tokens attached to backend requests.

use awards_persistence::{AUTH_TOKEN_KEY, Storage};
use tracing::warn;

/// Supplies the bearer token for the next request, if the user has one.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token.
pub struct StaticToken(String);

impl StaticToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        (!self.0.is_empty()).then(|| self.0.clone())
    }
}

/// Reads the token saved after login from local storage.
///
/// The value is read on every request so a login or logout takes effect
/// without rebuilding the client.
#[derive(Debug, Clone)]
pub struct StoredToken<S: Storage> {
    storage: S,
}

impl<S: Storage> StoredToken<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> TokenSource for StoredToken<S> {
    fn token(&self) -> Option<String> {
        match self.storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                warn!(error = %err, "Failed to read auth token; sending request without it");
                None
            }
        }
    }
}
