//! Import command: preview a booking export
//!
//! Prints what was auto-detected (encoding, headers, field mapping) and the
//! normalized rows so an operator can correct low-confidence cells before
//! committing the import elsewhere.

use crate::app::models::{CanonicalBookingRow, RowIssue};
use crate::app::services::booking_csv_parser::{BookingCsvParser, ImportPreview};
use crate::cli::args::{ImportArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

pub async fn run_import(args: ImportArgs) -> Result<()> {
    let parser = BookingCsvParser::new();
    let preview = parser
        .parse_file(&args.file)
        .await
        .with_context(|| format!("Failed to import {}", args.file.display()))?;

    info!(
        "Import preview ready: {} rows, {:.1}% clean",
        preview.rows.len(),
        preview.stats.clean_rate()
    );

    match args.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&preview)
                .context("Failed to serialize import preview")?;
            println!("{}", json);
        }
        OutputFormat::Table => print_preview(&preview, args.limit),
    }

    Ok(())
}

fn print_preview(preview: &ImportPreview, limit: usize) {
    println!("{}", "Import Preview".bold());
    println!("{}", "=".repeat(60));
    println!("Encoding: {}", preview.encoding.to_string().cyan());
    println!("Headers:  {}", preview.headers.join(" | "));
    println!();

    println!("{}", "Field mapping".bold());
    for column in &preview.mapping {
        println!(
            "  {:<22} <- [{}] {}",
            column.field.as_str(),
            column.header_index,
            column.header.green()
        );
    }
    for field in &preview.unmapped_fields {
        println!("  {:<22} <- {}", field.as_str(), "(no matching header)".yellow());
    }
    println!();

    println!("{}", "Rows".bold());
    for (index, row) in preview.rows.iter().take(limit).enumerate() {
        print_row(index + 1, row);
    }
    if preview.rows.len() > limit {
        println!("  ... {} more rows", preview.rows.len() - limit);
    }
    println!();

    let stats = &preview.stats;
    let summary = format!(
        "{} rows, {} need review, {} ragged ({:.1}% clean)",
        stats.data_lines, stats.rows_with_issues, stats.ragged_rows, stats.clean_rate()
    );
    if stats.is_clean() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
}

fn print_row(number: usize, row: &CanonicalBookingRow) {
    let placeholder = || "-".to_string();
    let date = if row.usage_date.is_empty() {
        "????-??-??".red().to_string()
    } else {
        row.usage_date.clone()
    };

    println!(
        "  {:>3}. {} {}-{} {:>10} net {:>10} {} / {}",
        number,
        date,
        row.start_time.clone().unwrap_or_else(placeholder),
        row.end_time.clone().unwrap_or_else(placeholder),
        row.gross_amount,
        row.net_amount.map(|n| n.to_string()).unwrap_or_else(placeholder),
        row.platform_property_name,
        row.guest_name.clone().unwrap_or_else(placeholder)
    );

    for issue in &row.issues {
        println!("       {} {}", "!".yellow().bold(), describe_issue(issue));
    }
}

/// Operator-facing description of a low-confidence cell
pub fn describe_issue(issue: &RowIssue) -> String {
    match issue {
        RowIssue::UnrecognizedDate { raw } => format!("unrecognized date '{}'", raw),
        RowIssue::ImplausibleDate { raw } => format!("date '{}' is not on the calendar", raw),
        RowIssue::UnrecognizedTime { field, raw } => {
            format!("{}: unrecognized time '{}'", field, raw)
        }
        RowIssue::UnparsedAmount { field, raw } => {
            format!("{}: '{}' is not an amount, read as 0", field, raw)
        }
    }
}
