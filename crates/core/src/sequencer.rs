// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure step transitions for the signup wizard.
//!
//! The path through the wizard is the canonical step order filtered by the
//! answers collected so far. Nothing here holds state: the same step and data
//! always produce the same result.

use awards_domain::{FormData, Step};

/// Returns the steps the given answers select, in canonical order.
#[must_use]
pub fn active_path(data: &FormData) -> Vec<Step> {
    Step::NAVIGABLE
        .iter()
        .copied()
        .filter(|step| step.is_on_path(data))
        .collect()
}

/// Returns the step after `current` on the selected path.
///
/// `Review` has no next step: leaving it is a submission, not navigation.
/// `Complete` is terminal.
#[must_use]
pub fn next_step(current: Step, data: &FormData) -> Option<Step> {
    if matches!(current, Step::Review | Step::Complete) {
        return None;
    }
    Step::NAVIGABLE
        .iter()
        .copied()
        .filter(|step| step.position() > current.position())
        .find(|step| step.is_on_path(data))
}

/// Returns the step before `current` on the selected path.
///
/// Going back from `Complete` is not possible; from the first step there is
/// nowhere to go.
#[must_use]
pub fn previous_step(current: Step, data: &FormData) -> Option<Step> {
    if current == Step::Complete {
        return None;
    }
    Step::NAVIGABLE
        .iter()
        .rev()
        .copied()
        .filter(|step| step.position() < current.position())
        .find(|step| step.is_on_path(data))
}
