use anyhow::Result;
use clap::ValueEnum;
use lobbyview_api::{Endpoint, Record};
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

use crate::xml_output;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
    /// One line per record, as the library renders it
    Summary,
}

// -- Column and row builders --

/// Every key seen across `records`, in first-seen order.
fn columns(records: &[Record]) -> Vec<String> {
    let mut cols: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !cols.iter().any(|c| c == key) {
                cols.push(key.clone());
            }
        }
    }
    cols
}

/// Flattens one field for a table or CSV cell.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell_text(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn build_rows(records: &[Record], cols: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| cols.iter().map(|c| cell_text(record.get(c))).collect())
        .collect()
}

fn build_table(records: &[Record]) -> Table {
    let cols = columns(records);
    let mut builder = Builder::default();
    builder.push_record(cols.clone());
    for row in build_rows(records, &cols) {
        builder.push_record(row);
    }
    builder.build()
}

// -- Table output --

pub fn print_table(records: &[Record]) {
    println!("{}", build_table(records));
}

// -- Markdown output --

pub fn print_markdown(records: &[Record]) {
    let mut table = build_table(records);
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_csv<W: std::io::Write>(writer: W, records: &[Record]) -> Result<()> {
    let cols = columns(records);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&cols)?;
    for row in build_rows(records, &cols) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_csv(records: &[Record]) -> Result<()> {
    write_csv(std::io::stdout(), records)
}

// -- XML output --

pub fn print_xml(endpoint: Endpoint, records: &[Record]) -> Result<()> {
    println!("{}", xml_output::records_to_xml(endpoint, records)?);
    Ok(())
}

// -- Summary output --

fn summary_text(endpoint: Endpoint, records: &[Record]) -> String {
    let mut out = format!("{}:\n", endpoint.heading());
    for record in records {
        out.push_str("  ");
        out.push_str(&endpoint.summarize(record));
        out.push('\n');
    }
    out
}

pub fn print_summary(endpoint: Endpoint, records: &[Record]) {
    print!("{}", summary_text(endpoint, records));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints `records` from `endpoint` in the requested format.
pub fn print_records(endpoint: Endpoint, records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(records),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => print_csv(records)?,
        OutputFormat::Markdown => print_markdown(records),
        OutputFormat::Xml => print_xml(endpoint, records)?,
        OutputFormat::Summary => print_summary(endpoint, records),
    }
    Ok(())
}
