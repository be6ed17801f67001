//! Booking export parser orchestration
//!
//! Reads the file once, resolves its encoding, tokenizes it and maps every
//! data line onto a canonical booking row.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::{ColumnMapping, FieldPatterns};
use super::encoding::{DetectedEncoding, decode_bytes};
use super::stats::{ImportPreview, MappedColumn, ParseStats};
use super::tokenizer::tokenize;
use crate::error::{InsightError, Result};

/// Parser for platform booking exports
///
/// Holds the header vocabulary; parsing itself is a pure function of the
/// input, so one parser can serve any number of concurrent imports.
#[derive(Debug, Clone, Default)]
pub struct BookingCsvParser {
    patterns: FieldPatterns,
}

impl BookingCsvParser {
    /// Create a parser with the built-in header vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom header vocabulary
    pub fn with_patterns(patterns: FieldPatterns) -> Self {
        Self { patterns }
    }

    /// Read and parse an export file
    ///
    /// Fails only when the file cannot be read or holds no header line.
    pub async fn parse_file(&self, file_path: &Path) -> Result<ImportPreview> {
        info!("Parsing booking export: {}", file_path.display());

        let bytes = tokio::fs::read(file_path)
            .await
            .map_err(|e| InsightError::read_failed(file_path, e))?;

        let preview = self.parse_bytes(&bytes);
        if preview.headers.is_empty() {
            return Err(InsightError::EmptyInput {
                path: file_path.to_path_buf(),
            });
        }

        info!(
            "Parsed {} rows ({} with issues) from {} as {}",
            preview.rows.len(),
            preview.stats.rows_with_issues,
            file_path.display(),
            preview.encoding
        );

        Ok(preview)
    }

    /// Decode and parse raw bytes
    pub fn parse_bytes(&self, bytes: &[u8]) -> ImportPreview {
        let decoded = decode_bytes(bytes);
        debug!("Decoded {} bytes as {}", bytes.len(), decoded.encoding);
        self.parse_text(&decoded.text, decoded.encoding)
    }

    /// Parse already decoded text
    pub fn parse_text(&self, text: &str, encoding: DetectedEncoding) -> ImportPreview {
        let tokenized = tokenize(text);
        let column_mapping = ColumnMapping::analyze_with(&tokenized.headers, &self.patterns);

        let unmapped_fields = column_mapping.unmapped_fields();
        if !unmapped_fields.is_empty() && !tokenized.headers.is_empty() {
            warn!(
                "No header matched for: {}",
                unmapped_fields
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let mapping = column_mapping
            .field_to_index
            .iter()
            .map(|(field, &index)| MappedColumn {
                field: *field,
                header_index: index,
                header: tokenized.headers[index].clone(),
            })
            .collect();

        let mut stats = ParseStats::new();
        let mut rows = Vec::with_capacity(tokenized.rows.len());

        for record in &tokenized.rows {
            stats.data_lines += 1;
            if record.len() != tokenized.headers.len() {
                stats.ragged_rows += 1;
            }

            let row = column_mapping.map_row(record);
            if !row.is_clean() {
                stats.rows_with_issues += 1;
                debug!("Row {} needs review: {:?}", stats.data_lines, row.issues);
            }
            rows.push(row);
        }

        ImportPreview {
            encoding,
            headers: tokenized.headers,
            mapping,
            unmapped_fields,
            rows,
            stats,
        }
    }
}
