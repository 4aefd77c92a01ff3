// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod notification_tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use awards_domain::{FieldValue, FormData, fields};

use crate::{MemoryStorage, PersistenceError, ServiceOptions, Storage};

pub fn create_test_options() -> ServiceOptions {
    ServiceOptions::default()
}

pub fn create_application_form(email: &str) -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::FIRST_NAME, "Amara".into()),
        (fields::LAST_NAME, "Okafor".into()),
        (fields::EMAIL, email.into()),
        (fields::COUNTRY, "Nigeria".into()),
        (
            fields::EDUCATION_BACKGROUND,
            "B.Ed. in Science Education".into(),
        ),
        (
            fields::MOTIVATION,
            "I want to help surface the teachers who changed my community for the better."
                .into(),
        ),
        (fields::HOURS_PER_WEEK, "6-10".into()),
        (fields::EXPERTISE_CATEGORIES, vec!["stem_excellence"].into()),
    ];
    pairs.into_iter().collect()
}

pub fn create_nominee_form(name: &str) -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::NOMINEE_NAME, name.into()),
        (fields::SCHOOL, "Kisumu Girls High".into()),
        (fields::COUNTRY, "Kenya".into()),
        (fields::CATEGORY, "stem_excellence".into()),
        (
            fields::JUSTIFICATION,
            "Started a coding club that now runs in four neighbouring schools.".into(),
        ),
    ];
    pairs.into_iter().collect()
}

pub fn create_waitlist_form(name: &str, email: &str) -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::NAME, name.into()),
        (fields::EMAIL, email.into()),
        (fields::CATEGORIES, vec!["vote_nominate"].into()),
    ];
    pairs.into_iter().collect()
}

/// Storage that reads nothing and refuses every write.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::QueryFailed(String::from("read-only")))
    }

    fn remove(&self, _key: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::QueryFailed(String::from("read-only")))
    }
}

/// Memory storage whose reads can be made to fail on demand.
#[derive(Debug, Clone, Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    failing_reads: Arc<AtomicBool>,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, failing: bool) {
        self.failing_reads.store(failing, Ordering::SeqCst);
    }
}

impl Storage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.failing_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::QueryFailed(String::from("disk I/O error")));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.inner.remove(key)
    }
}
