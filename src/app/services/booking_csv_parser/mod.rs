//! Booking export parser for platform CSV files
//!
//! This module turns an uploaded platform export into canonical booking rows.
//! Header vocabularies differ between platforms and exports arrive in either
//! UTF-8 or Shift-JIS, so every stage is heuristic and total: bad cells
//! degrade to empty values plus a row issue, never to an error.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`encoding`] - UTF-8 first decoding with a Shift-JIS fallback
//! - [`tokenizer`] - Line splitting and quoted-field CSV scanning
//! - [`column_mapping`] - First-match-wins header to canonical field mapping
//! - [`field_parsers`] - Date, time and amount normalizers
//! - [`parser`] - Orchestration from bytes to an import preview
//! - [`stats`] - Import preview and parse statistics
//!
//! ## Usage
//!
//! ```rust
//! use space_insight::app::services::booking_csv_parser::BookingCsvParser;
//!
//! # async fn example() -> space_insight::Result<()> {
//! let parser = BookingCsvParser::new();
//! let preview = parser.parse_file(std::path::Path::new("export.csv")).await?;
//!
//! println!("Detected headers: {:?}", preview.headers);
//! println!("{} rows, {} need review", preview.rows.len(), preview.stats.rows_with_issues);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod encoding;
pub mod field_parsers;
pub mod parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, FieldPatterns};
pub use encoding::{DecodedText, DetectedEncoding};
pub use parser::BookingCsvParser;
pub use stats::{ImportPreview, MappedColumn, ParseStats};
pub use tokenizer::TokenizedCsv;
