//! Header to canonical field mapping
//!
//! Every canonical field owns an ordered list of header patterns covering the
//! Japanese and English vocabularies seen in platform exports. Patterns are
//! tried in list order against the lower-cased headers and the first header
//! a pattern matches wins. Adding a vocabulary means appending a pattern.

use super::field_parsers::{
    AmountParse, DateNormalization, TimeNormalization, is_calendar_date, normalize_date,
    normalize_time, parse_amount,
};
use crate::app::models::{CanonicalBookingRow, CanonicalField, RowIssue};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// Built-in header vocabulary, most specific pattern first
const BUILTIN_PATTERNS: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::PropertyName,
        &[
            "施設名",
            "スペース名",
            "物件名",
            "部屋名",
            "店舗名",
            "会場",
            "property",
            "space",
            "room",
            "venue",
            "listing",
        ],
    ),
    (
        CanonicalField::UsageDate,
        &["利用日", "利用開始日", "日付", r"usage.?date", "date"],
    ),
    (
        CanonicalField::StartTime,
        &[
            "開始時間",
            "開始時刻",
            "利用開始時",
            "チェックイン",
            r"start.?time",
            "^start$",
            "^from$",
            r"check.?in",
        ],
    ),
    (
        CanonicalField::EndTime,
        &[
            "終了時間",
            "終了時刻",
            "利用終了時",
            "チェックアウト",
            r"end.?time",
            "^end$",
            "^to$",
            r"check.?out",
        ],
    ),
    (
        CanonicalField::GrossAmount,
        &[
            "売上",
            "料金",
            "合計金額",
            "総額",
            "^(利用)?金額",
            "gross",
            "total",
            "^amount$",
            "price",
            "revenue",
            "sales",
            "金額",
            "amount",
        ],
    ),
    (
        CanonicalField::NetAmount,
        &[
            "入金",
            "振込",
            "手取",
            "受取",
            "純額",
            "net",
            "payout",
            "earning",
        ],
    ),
    (
        CanonicalField::GuestName,
        &[
            "ゲスト",
            "利用者",
            "予約者",
            "顧客",
            "お客様",
            "氏名",
            "guest",
            "customer",
            "booker",
            "user",
        ],
    ),
];

static BUILTIN: LazyLock<FieldPatterns> = LazyLock::new(|| {
    let fields = BUILTIN_PATTERNS
        .iter()
        .map(|(field, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("Invalid builtin header pattern"))
                .collect();
            (*field, compiled)
        })
        .collect();
    FieldPatterns { fields }
});

/// Ordered `(field, patterns)` table driving the mapper
#[derive(Debug, Clone)]
pub struct FieldPatterns {
    fields: Vec<(CanonicalField, Vec<Regex>)>,
}

impl Default for FieldPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FieldPatterns {
    /// The built-in Japanese and English header vocabulary
    pub fn builtin() -> Self {
        (*BUILTIN).clone()
    }

    /// Append a pattern to a field; it is tried after the existing ones
    pub fn push(&mut self, field: CanonicalField, pattern: Regex) {
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, patterns)) => patterns.push(pattern),
            None => self.fields.push((field, vec![pattern])),
        }
    }
}

/// Canonical field to header index mapping for one export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub field_to_index: BTreeMap<CanonicalField, usize>,
}

impl ColumnMapping {
    /// Analyze headers with the built-in vocabulary
    pub fn analyze(headers: &[String]) -> Self {
        Self::analyze_with(headers, &BUILTIN)
    }

    /// Analyze headers, first match wins per field
    pub fn analyze_with(headers: &[String], patterns: &FieldPatterns) -> Self {
        let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let mut field_to_index = BTreeMap::new();

        for (field, field_patterns) in &patterns.fields {
            let found = field_patterns
                .iter()
                .find_map(|pattern| lowered.iter().position(|h| pattern.is_match(h)));

            if let Some(index) = found {
                debug!("Mapped {} -> header {} '{}'", field, index, headers[index]);
                field_to_index.insert(*field, index);
            }
        }

        ColumnMapping { field_to_index }
    }

    /// Get the header index for a field
    pub fn get_index(&self, field: CanonicalField) -> Option<usize> {
        self.field_to_index.get(&field).copied()
    }

    /// Canonical fields that matched no header
    pub fn unmapped_fields(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| !self.field_to_index.contains_key(field))
            .collect()
    }

    /// Trimmed, non-empty cell for a field, if mapped and present in the row
    pub fn get_field<'a>(&self, row: &'a [String], field: CanonicalField) -> Option<&'a str> {
        self.get_index(field)
            .and_then(|index| row.get(index))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Build a normalized row draft; never fails
    pub fn map_row(&self, row: &[String]) -> CanonicalBookingRow {
        let mut issues = Vec::new();

        let usage_date = match self.get_field(row, CanonicalField::UsageDate).map(normalize_date) {
            Some(DateNormalization::Iso(date)) => {
                if !is_calendar_date(&date) {
                    issues.push(RowIssue::ImplausibleDate { raw: date.clone() });
                }
                date
            }
            Some(DateNormalization::Unrecognized(raw)) => {
                issues.push(RowIssue::UnrecognizedDate { raw });
                String::new()
            }
            None => String::new(),
        };

        let start_time = self.time_field(row, CanonicalField::StartTime, &mut issues);
        let end_time = self.time_field(row, CanonicalField::EndTime, &mut issues);

        let gross_amount = self
            .amount_field(row, CanonicalField::GrossAmount, &mut issues)
            .unwrap_or(0);
        let net_amount = self.amount_field(row, CanonicalField::NetAmount, &mut issues);

        CanonicalBookingRow {
            platform_property_name: self
                .get_field(row, CanonicalField::PropertyName)
                .unwrap_or_default()
                .to_string(),
            usage_date,
            start_time,
            end_time,
            gross_amount,
            net_amount,
            guest_name: self
                .get_field(row, CanonicalField::GuestName)
                .map(str::to_string),
            issues,
        }
    }

    fn time_field(
        &self,
        row: &[String],
        field: CanonicalField,
        issues: &mut Vec<RowIssue>,
    ) -> Option<String> {
        match self.get_field(row, field).map(normalize_time)? {
            TimeNormalization::Clock(time) => Some(time),
            TimeNormalization::Unrecognized(raw) => {
                issues.push(RowIssue::UnrecognizedTime { field, raw });
                None
            }
        }
    }

    fn amount_field(
        &self,
        row: &[String],
        field: CanonicalField,
        issues: &mut Vec<RowIssue>,
    ) -> Option<u64> {
        let raw = self.get_field(row, field)?;
        let parsed = parse_amount(raw);
        match parsed {
            AmountParse::Blank => None,
            AmountParse::Parsed(amount) => Some(amount),
            AmountParse::Unparsed => {
                issues.push(RowIssue::UnparsedAmount {
                    field,
                    raw: raw.to_string(),
                });
                Some(parsed.value())
            }
        }
    }
}
