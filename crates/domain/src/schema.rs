// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declarative field validation.
//!
//! A `Schema` lists per-field rules and cross-field rules. Validation is pure:
//! it maps a `FormData` to a field-name → message map, and an empty map means
//! the data is valid. Per-field rules run first; cross-field rules run after
//! and never replace an error already recorded for a field.

use crate::form::{FieldValue, FormData};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9\s\-()]{5,19}$").ok());
static URL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$").ok());
static PERSON_NAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[\p{L}][\p{L}\s'.\-]*$").ok());

/// Built-in text patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `local@domain.tld`
    Email,
    /// Digits with optional leading `+`, spaces, dashes and parentheses.
    Phone,
    /// An `http` or `https` URL.
    Url,
    /// Letters, spaces, apostrophes, dots and hyphens.
    PersonName,
}

impl PatternKind {
    fn regex(self) -> Option<&'static Regex> {
        let pattern: &LazyLock<Option<Regex>> = match self {
            Self::Email => &EMAIL_PATTERN,
            Self::Phone => &PHONE_PATTERN,
            Self::Url => &URL_PATTERN,
            Self::PersonName => &PERSON_NAME_PATTERN,
        };
        pattern.as_ref()
    }

    /// Returns true if `text` matches the pattern.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(text.trim()))
    }

    fn message(self, label: &str) -> String {
        match self {
            Self::Email => format!("{label} must be a valid email address"),
            Self::Phone => format!("{label} must be a valid phone number"),
            Self::Url => format!("{label} must be a valid URL starting with http:// or https://"),
            Self::PersonName => format!("{label} may only contain letters, spaces and - ' ."),
        }
    }
}

/// A rule checked against a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present and not blank.
    Required,
    /// At least this many characters (text) or selections (list).
    MinLength(usize),
    /// At most this many characters (text) or selections (list).
    MaxLength(usize),
    /// Text must match the pattern.
    Pattern(PatternKind),
    /// Text, or every item of a list, must be one of these options.
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// Checks a non-blank value, returning the failure message if any.
    fn check(self, label: &str, value: &FieldValue) -> Option<String> {
        match self {
            Self::Required => None,
            Self::MinLength(min) => match (value, value.measure()) {
                (FieldValue::List(_), Some(n)) if n < min => {
                    Some(format!("Select at least {min} option(s) for {label}"))
                }
                (_, Some(n)) if n < min => {
                    Some(format!("{label} must be at least {min} characters"))
                }
                _ => None,
            },
            Self::MaxLength(max) => match (value, value.measure()) {
                (FieldValue::List(_), Some(n)) if n > max => {
                    Some(format!("Select at most {max} option(s) for {label}"))
                }
                (_, Some(n)) if n > max => Some(format!("{label} must be at most {max} characters")),
                _ => None,
            },
            Self::Pattern(kind) => match value.as_text() {
                Some(text) if kind.matches(text) => None,
                _ => Some(kind.message(label)),
            },
            Self::OneOf(options) => {
                let valid: bool = match value {
                    FieldValue::Text(text) => options.contains(&text.trim()),
                    FieldValue::List(items) => {
                        items.iter().all(|item| options.contains(&item.as_str()))
                    }
                    FieldValue::Flag(_) | FieldValue::Number(_) | FieldValue::File(_) => false,
                };
                if valid {
                    None
                } else {
                    Some(format!("{label} must be one of: {}", options.join(", ")))
                }
            }
        }
    }
}

/// A rule relating two or more fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossRule {
    /// `field` must hold the same value as `other` once `other` is answered.
    MustMatch {
        field: &'static str,
        other: &'static str,
        message: &'static str,
    },
    /// The list `field` may not select both `first` and `second`.
    MutuallyExclusive {
        field: &'static str,
        first: &'static str,
        second: &'static str,
        message: &'static str,
    },
    /// `field` is required once `when` is answered with anything but `equals`.
    RequiredUnless {
        field: &'static str,
        when: &'static str,
        equals: &'static str,
        message: &'static str,
    },
    /// `field` is required when `when` selects `option`.
    RequiredWhenSelected {
        field: &'static str,
        when: &'static str,
        option: &'static str,
        message: &'static str,
    },
}

impl CrossRule {
    /// Returns the field an error for this rule is reported on.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MustMatch { field, .. }
            | Self::MutuallyExclusive { field, .. }
            | Self::RequiredUnless { field, .. }
            | Self::RequiredWhenSelected { field, .. } => field,
        }
    }

    fn violated(&self, data: &FormData) -> Option<&'static str> {
        match *self {
            Self::MustMatch {
                field,
                other,
                message,
            } => (data.has_value(other) && data.get(field) != data.get(other)).then_some(message),
            Self::MutuallyExclusive {
                field,
                first,
                second,
                message,
            } => (data.selects(field, first) && data.selects(field, second)).then_some(message),
            Self::RequiredUnless {
                field,
                when,
                equals,
                message,
            } => (data.has_value(when) && !data.selects(when, equals) && !data.has_value(field))
                .then_some(message),
            Self::RequiredWhenSelected {
                field,
                when,
                option,
                message,
            } => (data.selects(when, option) && !data.has_value(field)).then_some(message),
        }
    }
}

/// The rules declared for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// The field name in `FormData`.
    pub field: &'static str,
    /// The human-readable label used in messages.
    pub label: &'static str,
    /// Rules in evaluation order; the first failure wins.
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    /// Returns true if the field carries a `Required` rule.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// Field-name → message map produced by validation. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty (valid) result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error unless the field already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns true if the field has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Returns the names of the fields with errors, in name order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }

    /// Iterates over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Folds another result into this one, keeping existing messages.
    pub fn extend(&mut self, other: Self) {
        for (field, message) in other.errors {
            self.errors.entry(field).or_insert(message);
        }
    }

    /// Converts to `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the errors if any field failed validation.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// A set of field rules and cross-field rules for one form or wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
    cross: Vec<CrossRule>,
}

impl Schema {
    /// Creates an empty schema (every input is valid).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            cross: Vec::new(),
        }
    }

    /// Declares the rules for a field.
    #[must_use]
    pub fn field(mut self, field: &'static str, label: &'static str, rules: &[Rule]) -> Self {
        self.fields.push(FieldSchema {
            field,
            label,
            rules: rules.to_vec(),
        });
        self
    }

    /// Declares a cross-field rule.
    #[must_use]
    pub fn cross(mut self, rule: CrossRule) -> Self {
        self.cross.push(rule);
        self
    }

    /// Appends every rule of `other` to this schema.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.fields.extend(other.fields);
        self.cross.extend(other.cross);
        self
    }

    /// The declared fields.
    #[must_use]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// The declared cross-field rules.
    #[must_use]
    pub fn cross_rules(&self) -> &[CrossRule] {
        &self.cross
    }

    /// Validates `data` against this schema.
    ///
    /// Fields the schema does not declare are ignored, and a blank field
    /// without a `Required` rule is never flagged by its own rules.
    #[must_use]
    pub fn validate(&self, data: &FormData) -> ValidationErrors {
        let mut errors: ValidationErrors = ValidationErrors::new();

        for spec in &self.fields {
            let value: Option<&FieldValue> = data.get(spec.field).filter(|v| !v.is_blank());
            let Some(value) = value else {
                if spec.is_required() {
                    errors.add(spec.field, format!("{} is required", spec.label));
                }
                continue;
            };

            if let Some(message) = spec
                .rules
                .iter()
                .find_map(|rule| rule.check(spec.label, value))
            {
                errors.add(spec.field, message);
            }
        }

        for rule in &self.cross {
            if errors.contains(rule.field()) {
                continue;
            }
            if let Some(message) = rule.violated(data) {
                errors.add(rule.field(), message);
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(PatternKind::Email.matches("jane@x.com"));
        assert!(PatternKind::Email.matches("  jane.doe+awards@school.edu "));
        assert!(!PatternKind::Email.matches("jane@"));
        assert!(!PatternKind::Email.matches("jane x@y.com"));
    }

    #[test]
    fn test_phone_and_url_patterns() {
        assert!(PatternKind::Phone.matches("+1 (555) 010-2000"));
        assert!(!PatternKind::Phone.matches("call me"));
        assert!(PatternKind::Url.matches("https://school.example.org"));
        assert!(!PatternKind::Url.matches("school.example.org"));
    }

    #[test]
    fn test_person_name_pattern_accepts_unicode() {
        assert!(PatternKind::PersonName.matches("Zoë O'Neil-Smith"));
        assert!(!PatternKind::PersonName.matches("R2D2"));
    }

    #[test]
    fn test_list_min_length_message_mentions_selection() {
        let message = Rule::MinLength(1).check("Interests", &FieldValue::List(Vec::new()));
        assert_eq!(
            message.as_deref(),
            Some("Select at least 1 option(s) for Interests")
        );
    }
}
