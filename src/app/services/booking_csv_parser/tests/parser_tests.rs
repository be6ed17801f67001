//! Tests for the booking export parser orchestration

use super::*;
use crate::app::models::{CanonicalField, RowIssue};
use crate::app::services::booking_csv_parser::{BookingCsvParser, DetectedEncoding};
use crate::error::InsightError;
use encoding_rs::SHIFT_JIS;

#[test]
fn test_parse_japanese_export() {
    let parser = BookingCsvParser::new();
    let preview = parser.parse_text(&create_japanese_export(), DetectedEncoding::Utf8);

    assert_eq!(preview.headers.len(), 7);
    assert!(preview.unmapped_fields.is_empty());
    assert_eq!(preview.rows.len(), 3);
    assert_eq!(preview.stats.data_lines, 3);
    assert_eq!(preview.stats.rows_with_issues, 0);
    assert_eq!(preview.stats.ragged_rows, 0);
    assert!(preview.stats.is_clean());

    let first = &preview.rows[0];
    assert_eq!(first.platform_property_name, "渋谷会議室A");
    assert_eq!(first.usage_date, "2024-03-01");
    assert_eq!(first.start_time.as_deref(), Some("09:00"));
    assert_eq!(first.end_time.as_deref(), Some("12:00"));
    assert_eq!(first.gross_amount, 12000);
    assert_eq!(first.net_amount, Some(10800));
    assert_eq!(first.guest_name.as_deref(), Some("山田"));

    assert_eq!(preview.rows[1].usage_date, "2024-03-02");
    assert_eq!(preview.rows[2].guest_name, None);
    assert_eq!(preview.rows[2].gross_amount, 5500);
}

#[test]
fn test_mapping_report_names_headers() {
    let parser = BookingCsvParser::new();
    let preview = parser.parse_text(&create_japanese_export(), DetectedEncoding::Utf8);

    let gross = preview
        .mapping
        .iter()
        .find(|m| m.field == CanonicalField::GrossAmount)
        .unwrap();
    assert_eq!(gross.header_index, 4);
    assert_eq!(gross.header, "金額");

    let net = preview
        .mapping
        .iter()
        .find(|m| m.field == CanonicalField::NetAmount)
        .unwrap();
    assert_eq!(net.header, "入金額");
}

#[test]
fn test_parse_english_export_with_bad_cells() {
    let parser = BookingCsvParser::new();
    let preview = parser.parse_text(&create_english_export(), DetectedEncoding::Utf8);

    assert_eq!(preview.rows.len(), 2);
    assert_eq!(preview.stats.rows_with_issues, 2);

    let first = &preview.rows[0];
    assert_eq!(first.platform_property_name, "Loft, Room 2");
    assert_eq!(first.usage_date, "");
    assert_eq!(first.start_time, None);
    assert_eq!(first.end_time.as_deref(), Some("21:00"));
    assert_eq!(first.gross_amount, 0);
    assert_eq!(first.net_amount, Some(900));
    assert_eq!(first.guest_name.as_deref(), Some("Smith, J"));
    assert!(first.issues.contains(&RowIssue::UnrecognizedDate {
        raw: "03/01/2024".to_string()
    }));
    assert!(first.issues.contains(&RowIssue::UnparsedAmount {
        field: CanonicalField::GrossAmount,
        raw: "$1,200".to_string()
    }));

    let second = &preview.rows[1];
    assert_eq!(second.usage_date, "2024-02-30");
    assert_eq!(second.start_time.as_deref(), Some("08:15"));
    assert_eq!(second.end_time.as_deref(), Some("10:00"));
    assert_eq!(second.net_amount, None);
    assert_eq!(second.guest_name, None);
}

#[test]
fn test_ragged_rows_counted() {
    let parser = BookingCsvParser::new();
    let text = "利用日,金額\n2024-03-01\n2024-03-02,100,extra";
    let preview = parser.parse_text(text, DetectedEncoding::Utf8);

    assert_eq!(preview.stats.ragged_rows, 2);
    assert_eq!(preview.rows[0].gross_amount, 0);
    assert_eq!(preview.rows[1].gross_amount, 100);
}

#[test]
fn test_parse_bytes_with_shift_jis() {
    let (bytes, _, _) = SHIFT_JIS.encode("施設名,利用日,金額\n会議室,2024年3月1日,\"￥3,000\"\n");

    let preview = BookingCsvParser::new().parse_bytes(&bytes);

    assert_eq!(preview.encoding, DetectedEncoding::ShiftJis);
    assert_eq!(preview.headers[0], "施設名");
    assert_eq!(preview.rows[0].usage_date, "2024-03-01");
    assert_eq!(preview.rows[0].gross_amount, 3000);
}

#[test]
fn test_preview_serializes_camel_case_without_absent_fields() {
    let preview = BookingCsvParser::new()
        .parse_text("利用日,金額,ゲスト\n2024-03-01,\"¥12,000\",山田", DetectedEncoding::Utf8);

    let json = serde_json::to_value(&preview.rows[0]).unwrap();
    assert_eq!(json["usageDate"], "2024-03-01");
    assert_eq!(json["grossAmount"], 12000);
    assert_eq!(json["guestName"], "山田");
    assert!(json.get("startTime").is_none());
    assert!(json.get("netAmount").is_none());
    assert!(json.get("issues").is_none());
}

#[tokio::test]
async fn test_parse_file_reads_from_disk() {
    let temp_file = create_temp_file(create_japanese_export().as_bytes());

    let preview = BookingCsvParser::new()
        .parse_file(temp_file.path())
        .await
        .unwrap();

    assert_eq!(preview.encoding, DetectedEncoding::Utf8);
    assert_eq!(preview.rows.len(), 3);
}

#[tokio::test]
async fn test_parse_file_missing_is_error() {
    let result = BookingCsvParser::new()
        .parse_file(std::path::Path::new("/nonexistent/export.csv"))
        .await;

    assert!(matches!(result, Err(InsightError::FileNotFound { .. })));
}

#[tokio::test]
async fn test_parse_file_blank_is_error() {
    let temp_file = create_temp_file(b"\r\n  \n");

    let result = BookingCsvParser::new().parse_file(temp_file.path()).await;

    assert!(matches!(result, Err(InsightError::EmptyInput { .. })));
}
