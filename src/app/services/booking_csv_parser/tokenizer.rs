//! Line splitting and quoted-field scanning
//!
//! Quoted fields may contain commas and doubled quotes but not line breaks:
//! lines are split on CR/LF before any field is scanned.

use serde::{Deserialize, Serialize};

/// Header line plus data lines, each already split into trimmed fields
///
/// Row lengths are independent of the header length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Split text into lines, drop blank ones, and tokenize each
///
/// The first non-blank line becomes the header row.
pub fn tokenize(text: &str) -> TokenizedCsv {
    let mut lines = text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty());

    let headers = match lines.next() {
        Some(line) => tokenize_line(line),
        None => return TokenizedCsv::default(),
    };

    let rows = lines.map(tokenize_line).collect();

    TokenizedCsv { headers, rows }
}

/// Scan one line into fields
///
/// A quote toggles quote mode, a doubled quote inside quote mode is a literal
/// quote, and a comma separates fields only outside quote mode. An
/// unterminated quote runs to the end of the line.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
