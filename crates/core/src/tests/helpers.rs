// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use awards_domain::{FieldValue, FormData, Registration, fields};

use crate::{CoreError, FormStore, RegistrationSink, SnapshotStore, SubmitFailure, SubmitReceipt};

/// Snapshot store backed by a shared string, so tests can look inside.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshots {
    pub contents: Arc<Mutex<Option<String>>>,
}

impl MemorySnapshots {
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.to_string()))),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl SnapshotStore for MemorySnapshots {
    fn read(&self) -> Result<Option<String>, CoreError> {
        Ok(self.contents.lock().unwrap().clone())
    }

    fn write(&self, contents: &str) -> Result<(), CoreError> {
        *self.contents.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.contents.lock().unwrap() = None;
        Ok(())
    }
}

/// Snapshot store whose backend is always unavailable.
#[derive(Debug, Default)]
pub struct BrokenSnapshots;

impl SnapshotStore for BrokenSnapshots {
    fn read(&self) -> Result<Option<String>, CoreError> {
        Err(CoreError::SnapshotUnavailable(String::from("disk on fire")))
    }

    fn write(&self, _contents: &str) -> Result<(), CoreError> {
        Err(CoreError::SnapshotUnavailable(String::from("disk on fire")))
    }

    fn clear(&self) -> Result<(), CoreError> {
        Err(CoreError::SnapshotUnavailable(String::from("disk on fire")))
    }
}

/// Sink that records calls and answers with a fixed result.
#[derive(Debug)]
pub struct ScriptedSink {
    pub result: Result<SubmitReceipt, SubmitFailure>,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<Registration>>,
}

impl ScriptedSink {
    pub fn accepting() -> Self {
        Self {
            result: Ok(SubmitReceipt {
                message: Some(String::from("Welcome aboard")),
            }),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(SubmitFailure {
                message: message.to_string(),
            }),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RegistrationSink for ScriptedSink {
    async fn register(&self, registration: &Registration) -> Result<SubmitReceipt, SubmitFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(registration.clone());
        self.result.clone()
    }
}

/// Answers for a company account that wants to judge, which walks every step.
pub fn create_company_judge_answers() -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::ACCOUNT_TYPE, "company".into()),
        (fields::FIRST_NAME, "Ada".into()),
        (fields::LAST_NAME, "Obi".into()),
        (fields::EMAIL, "ada@edtech.example".into()),
        (fields::COUNTRY, "Ghana".into()),
        (fields::ORGANIZATION_NAME, "EdTech Ltd".into()),
        (fields::ORGANIZATION_SIZE, "11-50".into()),
        (fields::INTENTS, vec!["judge"].into()),
        (
            fields::JUDGE_EXPERTISE,
            "Curriculum design for rural schools".into(),
        ),
        (fields::PASSWORD, "s3cure-enough".into()),
        (fields::CONFIRM_PASSWORD, "s3cure-enough".into()),
        (fields::AGREE_TERMS, true.into()),
    ];
    pairs.into_iter().collect()
}

/// Answers for an individual voter.
pub fn create_individual_answers() -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::ACCOUNT_TYPE, "individual".into()),
        (fields::FIRST_NAME, "Jane".into()),
        (fields::LAST_NAME, "Doe".into()),
        (fields::EMAIL, "jane@x.com".into()),
        (fields::COUNTRY, "Kenya".into()),
        (fields::INTENTS, vec!["vote_nominate"].into()),
        (fields::PASSWORD, "correct-horse".into()),
        (fields::CONFIRM_PASSWORD, "correct-horse".into()),
        (fields::AGREE_TERMS, true.into()),
    ];
    pairs.into_iter().collect()
}

/// A store holding `answers`, positioned on the first step.
pub fn create_store_with(answers: FormData) -> FormStore<MemorySnapshots> {
    let mut store: FormStore<MemorySnapshots> = FormStore::new(MemorySnapshots::default());
    store.update_form_data(answers);
    store
}

/// Advances until the wizard reaches `Review`.
pub fn walk_to_review(store: &mut FormStore<MemorySnapshots>) {
    while store.advance() {}
}
