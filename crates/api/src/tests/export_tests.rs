// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_domain::{
    Application, ApplicationInput, ApplicationStatus, AwardCategory, WaitlistCategory,
    WaitlistEntry, WaitlistInput,
};
use serde::Serialize;
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::macros::{date, datetime};

use crate::export::{to_csv, to_json};
use crate::{DateRange, ExportFile, ExportFilter, ExportFormat, Exportable, export};

fn create_application(
    id: &str,
    country: &str,
    categories: Vec<AwardCategory>,
    submitted_at: OffsetDateTime,
) -> Application {
    let input: ApplicationInput = ApplicationInput {
        first_name: String::from("Amara"),
        last_name: String::from("Okafor"),
        email: format!("{id}@example.org"),
        phone: None,
        country: country.to_string(),
        education_background: String::from("B.Ed., Science Education"),
        motivation: String::from("I want to say \"thank you\" to great teachers"),
        hours_per_week: String::from("6-10"),
        expertise_categories: categories,
    };
    Application::new(id.to_string(), input, submitted_at)
}

fn create_applications() -> Vec<Application> {
    vec![
        create_application(
            "app_1",
            "Kenya",
            vec![AwardCategory::StemExcellence, AwardCategory::Leadership],
            datetime!(2026-03-02 09:00 UTC),
        ),
        create_application(
            "app_2",
            "Ghana",
            vec![AwardCategory::CommunityImpact],
            datetime!(2026-03-15 18:30 UTC),
        ),
        create_application(
            "app_3",
            "Kenya",
            vec![AwardCategory::Leadership],
            datetime!(2026-05-01 12:00 UTC),
        ),
    ]
}

fn parse_csv(content: &str) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers: csv::StringRecord = reader.headers().unwrap().clone();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    (headers, rows)
}

#[test]
fn test_csv_header_matches_declared_fields() {
    let applications: Vec<Application> = create_applications();
    let selected: Vec<&Application> = applications.iter().collect();

    let content: String = to_csv(&selected).unwrap();
    let (headers, rows) = parse_csv(&content);

    assert_eq!(headers.len(), Application::FIELDS.len());
    assert_eq!(headers.get(1), Some("firstName"));
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.len(), Application::FIELDS.len());
    }
}

#[test]
fn test_csv_quotes_commas_and_quotes() {
    let applications: Vec<Application> = create_applications();
    let selected: Vec<&Application> = applications.iter().take(1).collect();

    let content: String = to_csv(&selected).unwrap();

    assert!(content.contains("\"B.Ed., Science Education\""));
    assert!(content.contains("\"I want to say \"\"thank you\"\" to great teachers\""));
    let (_, rows) = parse_csv(&content);
    assert_eq!(rows[0].get(6), Some("B.Ed., Science Education"));
}

#[test]
fn test_csv_joins_lists_and_blanks_missing_values() {
    let applications: Vec<Application> = create_applications();
    let selected: Vec<&Application> = applications.iter().take(1).collect();

    let (_, rows) = parse_csv(&to_csv(&selected).unwrap());

    assert_eq!(rows[0].get(9), Some("stem_excellence; leadership"));
    assert_eq!(rows[0].get(4), Some(""));
    assert_eq!(rows[0].get(10), Some("pending"));
    assert_eq!(rows[0].get(11), Some("2026-03-02T09:00:00Z"));
}

#[derive(Serialize)]
struct Sponsor {
    name: String,
    contact: Value,
}

impl Exportable for Sponsor {
    const ENTITY: &'static str = "sponsors";
    const FIELDS: &'static [&'static str] = &["name", "contact"];

    fn export_date(&self) -> OffsetDateTime {
        datetime!(2026-01-01 00:00 UTC)
    }
}

#[test]
fn test_csv_writes_objects_as_json_text() {
    let sponsor: Sponsor = Sponsor {
        name: String::from("Acme"),
        contact: json!({"email": "hi@acme.example"}),
    };

    let content: String = to_csv(&[&sponsor]).unwrap();

    assert!(content.contains(r#""{""email"":""hi@acme.example""}""#));
    let (_, rows) = parse_csv(&content);
    assert_eq!(rows[0].get(1), Some(r#"{"email":"hi@acme.example"}"#));
}

#[test]
fn test_date_range_excludes_records_outside_it() {
    let applications: Vec<Application> = create_applications();
    let filter: ExportFilter = ExportFilter {
        date_range: Some(DateRange {
            start: date!(2026 - 03 - 01),
            end: date!(2026 - 03 - 31),
        }),
        ..ExportFilter::default()
    };

    let file: ExportFile = export(&applications, &filter, ExportFormat::Csv, date!(2026 - 06 - 01)).unwrap();

    let (_, rows) = parse_csv(&file.content);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(0), Some("app_1"));
    assert_eq!(rows[1].get(0), Some("app_2"));
}

#[test]
fn test_date_range_is_inclusive() {
    let applications: Vec<Application> = create_applications();
    let range: DateRange = DateRange {
        start: date!(2026 - 03 - 15),
        end: date!(2026 - 05 - 01),
    };
    let filter: ExportFilter = ExportFilter {
        date_range: Some(range),
        ..ExportFilter::default()
    };

    let selected: Vec<&Application> = filter.apply(&applications);

    let ids: Vec<&str> = selected.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["app_2", "app_3"]);
}

#[test]
fn test_filters_are_conjunctive() {
    let mut applications: Vec<Application> = create_applications();
    applications[2].status = ApplicationStatus::Approved;

    let filter: ExportFilter = ExportFilter {
        statuses: vec![String::from("pending")],
        categories: vec![String::from("leadership")],
        countries: vec![String::from("kenya")],
        ..ExportFilter::default()
    };

    let selected: Vec<&Application> = filter.apply(&applications);

    let ids: Vec<&str> = selected.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["app_1"]);
}

#[test]
fn test_empty_filter_keeps_everything() {
    let applications: Vec<Application> = create_applications();
    assert_eq!(ExportFilter::default().apply(&applications).len(), 3);
}

#[test]
fn test_status_filter_drops_records_without_status() {
    let entry: WaitlistEntry = WaitlistEntry::new(
        String::from("wl_1"),
        WaitlistInput {
            name: String::from("Jane Doe"),
            email: String::from("jane@x.com"),
            categories: vec![WaitlistCategory::Judge],
        },
        datetime!(2026-02-01 08:00 UTC),
    );
    let entries: Vec<WaitlistEntry> = vec![entry];

    let by_status: ExportFilter = ExportFilter {
        statuses: vec![String::from("pending")],
        ..ExportFilter::default()
    };
    let by_category: ExportFilter = ExportFilter {
        categories: vec![String::from("judge")],
        ..ExportFilter::default()
    };

    assert!(by_status.apply(&entries).is_empty());
    assert_eq!(by_category.apply(&entries).len(), 1);
}

#[test]
fn test_json_export_is_pretty_and_filtered() {
    let applications: Vec<Application> = create_applications();
    let filter: ExportFilter = ExportFilter {
        countries: vec![String::from("Ghana")],
        ..ExportFilter::default()
    };

    let file: ExportFile = export(&applications, &filter, ExportFormat::Json, date!(2026 - 06 - 01)).unwrap();

    assert_eq!(file.filename, "applications_export_2026-06-01.json");
    assert_eq!(file.mime_type, "application/json");
    assert!(file.content.contains("\n  {"));
    let parsed: Vec<Value> = serde_json::from_str(&file.content).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["id"], "app_2");
    assert_eq!(parsed[0]["expertiseCategories"], json!(["community_impact"]));
}

#[test]
fn test_csv_filename_and_mime_type() {
    let entries: Vec<WaitlistEntry> = Vec::new();
    let file: ExportFile = export(
        &entries,
        &ExportFilter::default(),
        ExportFormat::Csv,
        date!(2026 - 10 - 18),
    )
    .unwrap();

    assert_eq!(file.filename, "waitlist_export_2026-10-18.csv");
    assert_eq!(file.mime_type, "text/csv");
    assert_eq!(file.content.trim_end(), WaitlistEntry::FIELDS.join(","));
}

#[test]
fn test_json_of_nothing_is_empty_array() {
    let applications: Vec<&Application> = Vec::new();
    assert_eq!(to_json(&applications).unwrap(), "[]");
}

#[test]
fn test_export_format_parses_case_insensitively() {
    assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
    assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
    assert!("xlsx".parse::<ExportFormat>().is_err());
}
