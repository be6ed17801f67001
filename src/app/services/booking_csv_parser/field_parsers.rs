//! Field normalizers for mapped booking cells
//!
//! Each normalizer reports whether it recognized the input. Unrecognized
//! input is carried verbatim so the caller decides how to surface it.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[T\s]|$)").expect("Invalid ISO date regex")
});

static SLASH_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})(?:\s|$)").expect("Invalid slash date regex")
});

static KANJI_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})年\s*([0-9]{1,2})月\s*([0-9]{1,2})日")
        .expect("Invalid kanji date regex")
});

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2})").expect("Invalid clock regex")
});

/// Outcome of date normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateNormalization {
    /// `YYYY-MM-DD`
    Iso(String),
    /// Input in no recognized layout, trimmed but otherwise untouched
    Unrecognized(String),
}

/// Outcome of time normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeNormalization {
    /// `HH:MM`
    Clock(String),
    Unrecognized(String),
}

/// Outcome of amount parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountParse {
    /// Empty cell
    Blank,
    Parsed(u64),
    /// Non-empty cell without leading digits
    Unparsed,
}

impl AmountParse {
    /// Amount in the smallest currency unit; anything not parsed counts as 0
    pub fn value(&self) -> u64 {
        match self {
            AmountParse::Parsed(amount) => *amount,
            AmountParse::Blank | AmountParse::Unparsed => 0,
        }
    }
}

/// Normalize a date cell to `YYYY-MM-DD`
///
/// Accepts ISO dates, `YYYY/M/D` and `YYYY年M月D日`, each optionally
/// followed by a time part which is dropped. Full-width digits are folded
/// to ASCII; any other non-ASCII digit leaves the cell unrecognized.
pub fn normalize_date(raw: &str) -> DateNormalization {
    let value = raw.trim();
    let folded = fold_full_width_digits(value);

    for pattern in [&*ISO_DATE_RE, &*SLASH_DATE_RE, &*KANJI_DATE_RE] {
        if let Some(caps) = pattern.captures(&folded) {
            return DateNormalization::Iso(format!(
                "{}-{:0>2}-{:0>2}",
                &caps[1], &caps[2], &caps[3]
            ));
        }
    }

    DateNormalization::Unrecognized(value.to_string())
}

/// Whether an ISO-shaped date names a real calendar day
pub fn is_calendar_date(iso: &str) -> bool {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").is_ok()
}

/// Normalize a time cell to `HH:MM`
///
/// A leading `H:MM` or `HH:MM` is zero-padded; seconds or trailing text
/// after it are dropped. Digits are folded as for dates.
pub fn normalize_time(raw: &str) -> TimeNormalization {
    let value = raw.trim();
    let folded = fold_full_width_digits(value);

    match CLOCK_RE.captures(&folded) {
        Some(caps) => TimeNormalization::Clock(format!("{:0>2}:{}", &caps[1], &caps[2])),
        None => TimeNormalization::Unrecognized(value.to_string()),
    }
}

/// Parse an amount cell into a non-negative integer
///
/// Thousands separators, yen glyphs and whitespace are stripped and
/// full-width digits folded before the leading run of digits is read.
/// A sign or any other leading character means the cell is unparsed.
pub fn parse_amount(raw: &str) -> AmountParse {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '，' | '¥' | '￥') && !c.is_whitespace())
        .map(fold_full_width_digit)
        .collect();

    if cleaned.is_empty() {
        return AmountParse::Blank;
    }

    let digits: String = cleaned.chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(amount) => AmountParse::Parsed(amount),
        Err(_) => AmountParse::Unparsed,
    }
}

fn fold_full_width_digits(value: &str) -> String {
    value.chars().map(fold_full_width_digit).collect()
}

fn fold_full_width_digit(c: char) -> char {
    match c {
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
        _ => c,
    }
}
