// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_domain::{AccountType, FormData, Step, fields};

use crate::{SubmitOutcome, UiEffect};

use super::helpers::{
    ScriptedSink, create_company_judge_answers, create_individual_answers, create_store_with,
    walk_to_review,
};

#[tokio::test]
async fn test_successful_submit_completes_the_wizard() {
    let mut store = create_store_with(create_company_judge_answers());
    walk_to_review(&mut store);
    let _ = store.take_effects();
    let sink: ScriptedSink = ScriptedSink::accepting();

    let outcome: SubmitOutcome = store.submit(&sink).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.message(), Some("Welcome aboard"));
    assert_eq!(store.current_step(), Step::Complete);
    assert_eq!(store.progress().progress_percentage, 100);
    assert!(store.last_error().is_none());
    assert!(store.snapshot_store().stored().is_none());
    assert_eq!(store.take_effects(), vec![UiEffect::ScrollToTop]);

    assert_eq!(sink.call_count(), 1);
    let sent = sink.last.lock().unwrap().clone().unwrap();
    assert_eq!(sent.account.account_type(), AccountType::Company);
    assert_eq!(sent.account.organization().unwrap().name, "EdTech Ltd");
}

#[tokio::test]
async fn test_failed_submit_keeps_answers_and_progress() {
    let mut store = create_store_with(create_individual_answers());
    walk_to_review(&mut store);
    let answers_before: FormData = store.form_data().clone();
    let progress_before = store.progress().clone();
    let sink: ScriptedSink = ScriptedSink::failing("This email is already registered.");

    let outcome: SubmitOutcome = store.submit(&sink).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: String::from("This email is already registered.")
        }
    );
    assert_eq!(store.last_error(), Some("This email is already registered."));
    assert_eq!(store.form_data(), &answers_before);
    assert_eq!(store.progress(), &progress_before);
    assert!(store.snapshot_store().stored().is_some());

    store.set_field(fields::EMAIL, "jane.doe@x.com");
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn test_submit_with_missing_fields_never_reaches_the_sink() {
    let mut answers: FormData = create_individual_answers();
    answers.remove(fields::EMAIL);
    answers.remove(fields::PASSWORD);
    let mut store = create_store_with(answers);
    let sink: ScriptedSink = ScriptedSink::accepting();

    let outcome: SubmitOutcome = store.submit(&sink).await;

    let SubmitOutcome::Incomplete { message, errors } = outcome else {
        panic!("expected incomplete outcome");
    };
    assert_eq!(errors.fields(), vec![fields::EMAIL, fields::PASSWORD]);
    assert_eq!(message, "Please complete all required fields: email, password");
    assert_eq!(sink.call_count(), 0);
    assert_eq!(store.current_step(), Step::AccountType);
}

#[tokio::test]
async fn test_submit_validates_every_step_on_the_path() {
    let mut answers: FormData = create_individual_answers();
    answers.set(fields::CONFIRM_PASSWORD, "something-else");
    let mut store = create_store_with(answers);
    walk_to_review(&mut store);
    let sink: ScriptedSink = ScriptedSink::accepting();

    let outcome: SubmitOutcome = store.submit(&sink).await;

    let SubmitOutcome::Incomplete { errors, .. } = outcome else {
        panic!("expected incomplete outcome");
    };
    assert_eq!(errors.get(fields::CONFIRM_PASSWORD), Some("Passwords do not match"));
    assert_eq!(store.last_error(), Some("Passwords do not match"));
    assert_eq!(sink.call_count(), 0);
    assert_eq!(store.current_step(), Step::Review);
}

#[tokio::test]
async fn test_second_submit_is_refused() {
    let mut store = create_store_with(create_individual_answers());
    walk_to_review(&mut store);
    let sink: ScriptedSink = ScriptedSink::accepting();

    assert!(store.submit(&sink).await.is_success());
    assert!(!store.submit(&sink).await.is_success());
    assert_eq!(sink.call_count(), 1);
    assert!(!store.advance());
    assert!(!store.retreat());
}

#[tokio::test]
async fn test_successful_submit_forgets_the_answers() {
    let mut store = create_store_with(create_individual_answers());
    walk_to_review(&mut store);
    let sink: ScriptedSink = ScriptedSink::accepting();

    assert!(store.submit(&sink).await.is_success());
    assert!(store.form_data().is_empty());
    assert!(store.history().is_empty());

    store.set_field(fields::MARKETING_OPT_IN, true);
    assert!(store.snapshot_store().stored().is_none());
    assert_eq!(store.form_data().text(fields::PASSWORD), None);

    store.reset();
    store.set_field(fields::FIRST_NAME, "Jane");
    let stored: String = store.snapshot_store().stored().unwrap();
    assert!(!stored.contains(fields::PASSWORD));
    assert!(!stored.contains("correct-horse"));
}
