//! Reports and the issue-level views derived from them.

use anyhow::Result;
use clap::Args;
use lobbyview_api::{IssueQuery, Query, ReportQuery, TextQuery};

use super::{execute, Context};
use crate::validation::{self, optional};

#[derive(Args)]
pub struct ReportsArgs {
    /// Report UUID
    #[arg(long)]
    pub uuid: Option<String>,

    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    /// Registrant UUID
    #[arg(long)]
    pub registrant_uuid: Option<String>,

    /// Search by registrant name
    #[arg(long)]
    pub registrant_name: Option<String>,

    /// Report year
    #[arg(long)]
    pub year: Option<i64>,

    /// Report quarter (1-4)
    #[arg(long)]
    pub quarter: Option<String>,

    /// Minimum reported amount
    #[arg(long)]
    pub min_amount: Option<i64>,

    /// Maximum reported amount
    #[arg(long)]
    pub max_amount: Option<i64>,

    /// Filter by the no-activity flag
    #[arg(long)]
    pub no_activity: Option<bool>,

    /// Filter by the client self-filer flag
    #[arg(long)]
    pub self_filer: Option<bool>,

    /// Filter by the amendment flag
    #[arg(long)]
    pub amendment: Option<bool>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

#[derive(Args)]
pub struct IssuesArgs {
    /// Report UUID
    #[arg(long)]
    pub report_uuid: Option<String>,

    /// Position of the issue within its report
    #[arg(long)]
    pub ordi: Option<i64>,

    /// General issue area code (e.g. TRD)
    #[arg(long)]
    pub code: Option<String>,

    /// Search by government entity lobbied
    #[arg(long)]
    pub gov_entity: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

#[derive(Args)]
pub struct TextsArgs {
    /// Report UUID
    #[arg(long)]
    pub report_uuid: Option<String>,

    /// Position of the issue within its report
    #[arg(long)]
    pub ordi: Option<i64>,

    /// General issue area code (e.g. HCR)
    #[arg(long)]
    pub code: Option<String>,

    /// Search within the issue text
    #[arg(long)]
    pub text: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub fn build_report_query(args: &ReportsArgs) -> Result<ReportQuery> {
    let mut query = ReportQuery::default().with_page(validation::validate_page(args.page)?);
    query.report_uuid = optional(args.uuid.as_ref(), validation::validate_text)?;
    query.client_uuid = optional(args.client_uuid.as_ref(), validation::validate_text)?;
    query.registrant_uuid = optional(args.registrant_uuid.as_ref(), validation::validate_text)?;
    query.registrant_name = optional(args.registrant_name.as_ref(), validation::validate_text)?;
    query.report_year = args.year;
    query.report_quarter_code = optional(args.quarter.as_ref(), validation::validate_quarter)?;
    query.min_amount = args.min_amount;
    query.max_amount = args.max_amount;
    query.is_no_activity = args.no_activity;
    query.is_client_self_filer = args.self_filer;
    query.is_amendment = args.amendment;
    Ok(query)
}

pub fn build_issue_query(args: &IssuesArgs) -> Result<IssueQuery> {
    let mut query = IssueQuery::default().with_page(validation::validate_page(args.page)?);
    query.report_uuid = optional(args.report_uuid.as_ref(), validation::validate_text)?;
    query.issue_ordi = args.ordi;
    query.issue_code = optional(args.code.as_ref(), validation::validate_text)?;
    query.gov_entity = optional(args.gov_entity.as_ref(), validation::validate_text)?;
    Ok(query)
}

pub fn build_text_query(args: &TextsArgs) -> Result<TextQuery> {
    let mut query = TextQuery::default().with_page(validation::validate_page(args.page)?);
    query.report_uuid = optional(args.report_uuid.as_ref(), validation::validate_text)?;
    query.issue_ordi = args.ordi;
    query.issue_code = optional(args.code.as_ref(), validation::validate_text)?;
    query.issue_text = optional(args.text.as_ref(), validation::validate_text)?;
    Ok(query)
}

pub fn run_reports(args: &ReportsArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_report_query(args)?)
}

pub fn run_issues(args: &IssuesArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_issue_query(args)?)
}

pub fn run_texts(args: &TextsArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_text_query(args)?)
}

#[cfg(test)]
mod tests {
    use clap::{Parser, Subcommand};
    use lobbyview_api::{FilterSet, ParamValue};

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        Reports(ReportsArgs),
        Issues(IssuesArgs),
        Texts(TextsArgs),
    }

    fn parse(argv: &[&str]) -> Commands {
        Cli::parse_from(std::iter::once("lobbyview").chain(argv.iter().copied())).command
    }

    #[test]
    fn report_flags_and_quarter() {
        let Commands::Reports(args) = parse(&[
            "reports",
            "--year",
            "2020",
            "--quarter",
            "Q3",
            "--amendment",
            "false",
        ]) else {
            panic!("expected reports");
        };
        let query = build_report_query(&args).unwrap();
        let expected = FilterSet::new()
            .with("report_year", 2020)
            .with("report_quarter_code", "3")
            .with("is_amendment", false);
        assert_eq!(query.filters(), expected);
    }

    #[test]
    fn report_quarter_out_of_range() {
        let Commands::Reports(args) = parse(&["reports", "--quarter", "5"]) else {
            panic!("expected reports");
        };
        assert!(build_report_query(&args).is_err());
    }

    #[test]
    fn issue_filters() {
        let Commands::Issues(args) = parse(&["issues", "--code", "TRD", "--ordi", "2"]) else {
            panic!("expected issues");
        };
        let query = build_issue_query(&args).unwrap();
        assert_eq!(query.filters().get("issue_ordi"), Some(&ParamValue::Int(2)));
        assert_eq!(
            query.filters().get("issue_code"),
            Some(&ParamValue::Text("TRD".to_string()))
        );
    }

    #[test]
    fn text_search() {
        let Commands::Texts(args) =
            parse(&["texts", "--code", "HCR", "--text", "covid", "--page", "2"])
        else {
            panic!("expected texts");
        };
        let query = build_text_query(&args).unwrap();
        assert_eq!(query.issue_text.as_deref(), Some("covid"));
        assert_eq!(query.common().page, 2);
    }
}
