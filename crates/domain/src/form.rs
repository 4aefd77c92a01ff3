// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progressive form data.
//!
//! Wizards collect answers one field at a time, so the in-progress record is
//! an ordered map from field name to a loosely typed value. It only becomes a
//! typed payload (see `registration`) once it crosses the submission boundary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A reference to a file the user attached (the bytes live elsewhere).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// The original file name.
    pub name: String,
    /// The size in bytes.
    pub size_bytes: u64,
    /// The MIME type reported by the browser.
    pub content_type: String,
}

/// A single form field value.
///
/// Serialized untagged so snapshots stay plain JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A checkbox or toggle.
    Flag(bool),
    /// A numeric field (for example the wallet bonus balance).
    Number(i64),
    /// Free text, a select value, or a radio choice.
    Text(String),
    /// A multi-select.
    List(Vec<String>),
    /// An attached file.
    File(FileRef),
}

impl FieldValue {
    /// Returns true if the value counts as "not provided".
    ///
    /// Whitespace-only text, empty lists, unchecked flags and unnamed files
    /// are blank. Numbers are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Flag(checked) => !checked,
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::File(file) => file.name.trim().is_empty(),
        }
    }

    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the selected items, if this is a list value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the flag, if this is a flag value.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(checked) => Some(*checked),
            _ => None,
        }
    }

    /// Returns the number, if this is a numeric value.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The measured size used by length rules: characters for text, items for lists.
    ///
    /// Other kinds have no meaningful length and return `None`.
    #[must_use]
    pub fn measure(&self) -> Option<usize> {
        match self {
            Self::Text(text) => Some(text.trim().chars().count()),
            Self::List(items) => Some(items.len()),
            Self::Flag(_) | Self::Number(_) | Self::File(_) => None,
        }
    }

    /// Returns true if a list contains `option`, or a text value equals it.
    #[must_use]
    pub fn selects(&self, option: &str) -> bool {
        match self {
            Self::Text(text) => text == option,
            Self::List(items) => items.iter().any(|item| item == option),
            Self::Flag(_) | Self::Number(_) | Self::File(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<FileRef> for FieldValue {
    fn from(value: FileRef) -> Self {
        Self::File(value)
    }
}

/// The in-progress values of a multi-step form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: BTreeMap<String, FieldValue>,
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns true if the field is present and not blank.
    #[must_use]
    pub fn has_value(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|value| !value.is_blank())
    }

    /// Returns the trimmed text of a field, or `None` if absent, blank or not text.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(FieldValue::as_text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Returns the items of a list field; absent or non-list fields read as empty.
    #[must_use]
    pub fn list(&self, field: &str) -> &[String] {
        self.fields
            .get(field)
            .and_then(FieldValue::as_list)
            .unwrap_or_default()
    }

    /// Returns a flag field; absent or non-flag fields read as `false`.
    #[must_use]
    pub fn flag(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .and_then(FieldValue::as_flag)
            .unwrap_or(false)
    }

    /// Returns a numeric field.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(FieldValue::as_number)
    }

    /// Returns true if the field selects `option` (list membership or text equality).
    #[must_use]
    pub fn selects(&self, field: &str, option: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|value| value.selects(option))
    }

    /// Sets a single field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    /// Shallow-merges `partial` into this form: every field in `partial`
    /// replaces the field of the same name, other fields are kept.
    pub fn merge(&mut self, partial: Self) {
        self.fields.extend(partial.fields);
    }

    /// Returns true if no field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
