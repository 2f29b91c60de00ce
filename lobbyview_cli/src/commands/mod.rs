//! CLI subcommand implementations, one module per group of endpoints.

pub mod bills;
pub mod clients;
pub mod legislators;
pub mod networks;
pub mod reports;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use lobbyview_api::{Client, Error, Query, Record};

use crate::output::{self, OutputFormat};

/// Settings shared by every subcommand.
pub struct Context<'a> {
    pub client: &'a Client,
    pub format: OutputFormat,
    /// Drain every page instead of fetching one.
    pub all: bool,
    /// Stop after this many records when draining.
    pub limit: Option<usize>,
}

/// Runs `query` either as a single page fetch or, with `--all`, through the
/// paginator, then prints the records.
pub fn execute<Q: Query + 'static>(ctx: &Context<'_>, query: Q) -> Result<()> {
    let endpoint = query.endpoint();

    if ctx.all {
        let records = fetch_all(ctx, query)?;
        if records.is_empty() {
            eprintln!("No results");
            return Ok(());
        }
        eprintln!("{} {} fetched", records.len(), endpoint.heading().to_lowercase());
        return output::print_records(endpoint, &records, ctx.format);
    }

    match ctx.client.fetch(&query) {
        Ok(resp) => {
            let info = resp.page_info();
            eprintln!(
                "Page {}/{} ({} total rows)",
                info.current_page, info.total_pages, info.total_rows
            );
            output::print_records(endpoint, resp.data(), ctx.format)
        }
        Err(e @ Error::InvalidPageNumber { .. }) => {
            tracing::debug!("{}", e);
            eprintln!("No results");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn fetch_all<Q: Query + 'static>(ctx: &Context<'_>, query: Q) -> Result<Vec<Record>> {
    let endpoint = query.endpoint();
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    pb.set_message(format!("fetching {}...", endpoint));
    pb.enable_steady_tick(Duration::from_millis(100));

    let limit = ctx.limit.unwrap_or(usize::MAX);
    let mut records = Vec::new();
    for item in ctx.client.paginate(query).take(limit) {
        match item {
            Ok(record) => {
                records.push(record);
                pb.set_message(format!("fetching {}... {} records", endpoint, records.len()));
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        }
    }
    pb.finish_and_clear();
    Ok(records)
}
