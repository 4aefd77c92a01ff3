// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV and JSON export of participation records.
//!
//! Filters run in a fixed order (date range, status, category, country) and
//! combine with AND. A filter left empty matches everything. Nothing here
//! touches the network or storage; the caller decides where the file goes.

use awards_domain::{
    Application, AwardCategory, NomineeProfile, Volunteer, WaitlistCategory, WaitlistEntry,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use time::{Date, OffsetDateTime};

/// Separator used when a list field is flattened into one CSV cell.
pub const LIST_SEPARATOR: &str = "; ";

/// Errors that can occur while producing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Export is not valid UTF-8: {0}")]
    Encoding(String),
}

/// A record type that can be exported.
///
/// `FIELDS` lists the serialized keys written as CSV columns, in order.
pub trait Exportable: Serialize {
    /// Entity name used in the file name.
    const ENTITY: &'static str;
    const FIELDS: &'static [&'static str];

    /// The timestamp the date range filter looks at.
    fn export_date(&self) -> OffsetDateTime;

    fn export_status(&self) -> Option<&str> {
        None
    }

    fn export_categories(&self) -> Vec<&str> {
        Vec::new()
    }

    fn export_country(&self) -> Option<&str> {
        None
    }
}

/// Inclusive calendar date range, compared in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    #[must_use]
    pub fn contains(&self, at: OffsetDateTime) -> bool {
        let date: Date = at.to_offset(time::UtcOffset::UTC).date();
        self.start <= date && date <= self.end
    }
}

/// Which records to export.
///
/// A record lacking the attribute a non-empty filter looks at does not
/// match it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFilter {
    pub date_range: Option<DateRange>,
    pub statuses: Vec<String>,
    pub categories: Vec<String>,
    pub countries: Vec<String>,
}

impl ExportFilter {
    /// Returns the records that pass every filter, in their original order.
    #[must_use]
    pub fn apply<'a, T: Exportable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut selected: Vec<&'a T> = items.iter().collect();

        if let Some(range) = &self.date_range {
            selected.retain(|item| range.contains(item.export_date()));
        }
        if !self.statuses.is_empty() {
            selected.retain(|item| {
                item.export_status()
                    .is_some_and(|status| self.statuses.iter().any(|s| s == status))
            });
        }
        if !self.categories.is_empty() {
            selected.retain(|item| {
                item.export_categories()
                    .iter()
                    .any(|category| self.categories.iter().any(|c| c == category))
            });
        }
        if !self.countries.is_empty() {
            selected.retain(|item| {
                item.export_country().is_some_and(|country| {
                    self.countries
                        .iter()
                        .any(|c| c.eq_ignore_ascii_case(country))
                })
            });
        }
        selected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown export format: {other}")),
        }
    }
}

/// A finished export, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

/// `<entity>_export_<YYYY-MM-DD>.<ext>`
#[must_use]
pub fn export_filename(entity: &str, format: ExportFormat, on: Date) -> String {
    format!("{entity}_export_{on}.{}", format.extension())
}

/// Filters `items` and serializes the rest.
///
/// `on` is the date stamped into the file name.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn export<T: Exportable>(
    items: &[T],
    filter: &ExportFilter,
    format: ExportFormat,
    on: Date,
) -> Result<ExportFile, ExportError> {
    let selected: Vec<&T> = filter.apply(items);
    let content: String = match format {
        ExportFormat::Csv => to_csv(&selected)?,
        ExportFormat::Json => to_json(&selected)?,
    };
    Ok(ExportFile {
        filename: export_filename(T::ENTITY, format, on),
        content,
        mime_type: format.mime_type(),
    })
}

/// Writes a header row of `T::FIELDS` and one row per record.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn to_csv<T: Exportable>(items: &[&T]) -> Result<String, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::FIELDS)?;
    for item in items {
        let value: Value = serde_json::to_value(item)?;
        let row: Vec<String> = T::FIELDS
            .iter()
            .map(|field| cell(value.get(*field)))
            .collect();
        writer.write_record(&row)?;
    }
    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| ExportError::Encoding(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Encoding(err.to_string()))
}

/// Pretty-printed JSON array of the records.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn to_json<T: Exportable>(items: &[&T]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(items)?)
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<String>>()
            .join(LIST_SEPARATOR),
        Some(other) => other.to_string(),
    }
}

// ============================================================================
// Exportable records
// ============================================================================

impl Exportable for Application {
    const ENTITY: &'static str = "applications";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "firstName",
        "lastName",
        "email",
        "phone",
        "country",
        "educationBackground",
        "motivation",
        "hoursPerWeek",
        "expertiseCategories",
        "status",
        "submittedAt",
        "reviewedAt",
        "reviewedBy",
        "reviewNotes",
    ];

    fn export_date(&self) -> OffsetDateTime {
        self.submitted_at
    }

    fn export_status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn export_categories(&self) -> Vec<&str> {
        self.expertise_categories
            .iter()
            .map(AwardCategory::as_str)
            .collect()
    }

    fn export_country(&self) -> Option<&str> {
        Some(&self.country)
    }
}

impl Exportable for Volunteer {
    const ENTITY: &'static str = "volunteers";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "applicationId",
        "email",
        "firstName",
        "lastName",
        "country",
        "status",
        "targetNominees",
        "nomineesUploaded",
        "completionRate",
        "joinedAt",
    ];

    fn export_date(&self) -> OffsetDateTime {
        self.joined_at
    }

    fn export_status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn export_country(&self) -> Option<&str> {
        Some(&self.country)
    }
}

impl Exportable for NomineeProfile {
    const ENTITY: &'static str = "nominee_profiles";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "volunteerId",
        "nomineeName",
        "nomineeEmail",
        "school",
        "country",
        "category",
        "subcategory",
        "justification",
        "status",
        "createdAt",
        "updatedAt",
        "submittedAt",
        "reviewNotes",
    ];

    fn export_date(&self) -> OffsetDateTime {
        self.created_at
    }

    fn export_status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn export_categories(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn export_country(&self) -> Option<&str> {
        Some(&self.country)
    }
}

impl Exportable for WaitlistEntry {
    const ENTITY: &'static str = "waitlist";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "categories",
        "createdAt",
        "syncedToSheets",
    ];

    fn export_date(&self) -> OffsetDateTime {
        self.created_at
    }

    fn export_categories(&self) -> Vec<&str> {
        self.categories.iter().map(WaitlistCategory::as_str).collect()
    }
}
