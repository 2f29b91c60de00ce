//! Client-legislator networks and the restricted network views.

use anyhow::Result;
use clap::Args;
use lobbyview_api::{BillClientNetworkQuery, NetworkQuery, QuarterLevelNetworkQuery, Query};

use super::{execute, Context};
use crate::validation::{self, optional};

#[derive(Args)]
pub struct NetworksArgs {
    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    /// Legislator bioguide ID
    #[arg(long)]
    pub legislator_id: Option<String>,

    /// First report year
    #[arg(long)]
    pub min_year: Option<i64>,

    /// Last report year
    #[arg(long)]
    pub max_year: Option<i64>,

    /// Minimum number of sponsored bills
    #[arg(long)]
    pub min_bills: Option<i64>,

    /// Maximum number of sponsored bills
    #[arg(long)]
    pub max_bills: Option<i64>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

#[derive(Args)]
pub struct QuarterLevelNetworksArgs {
    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    /// Legislator bioguide ID
    #[arg(long)]
    pub legislator_id: Option<String>,

    /// Report year
    #[arg(long)]
    pub year: Option<i64>,

    /// Report quarter (1-4)
    #[arg(long)]
    pub quarter: Option<String>,

    /// Minimum number of sponsored bills
    #[arg(long)]
    pub min_bills: Option<i64>,

    /// Maximum number of sponsored bills
    #[arg(long)]
    pub max_bills: Option<i64>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

#[derive(Args)]
pub struct BillClientNetworksArgs {
    /// Congress session number
    #[arg(long)]
    pub congress: Option<i64>,

    /// Chamber: house (h), senate (s)
    #[arg(long)]
    pub chamber: Option<String>,

    /// Resolution type
    #[arg(long)]
    pub resolution_type: Option<String>,

    /// Bill number
    #[arg(long)]
    pub number: Option<i64>,

    /// Report UUID
    #[arg(long)]
    pub report_uuid: Option<String>,

    /// Position of the issue within its report
    #[arg(long)]
    pub ordi: Option<i64>,

    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub fn build_network_query(args: &NetworksArgs) -> Result<NetworkQuery> {
    let mut query = NetworkQuery::default().with_page(validation::validate_page(args.page)?);
    query.client_uuid = optional(args.client_uuid.as_ref(), validation::validate_text)?;
    query.legislator_id = optional(args.legislator_id.as_ref(), validation::validate_text)?;
    query.min_report_year = args.min_year;
    query.max_report_year = args.max_year;
    query.min_bills_sponsored = args.min_bills;
    query.max_bills_sponsored = args.max_bills;
    Ok(query)
}

pub fn build_quarter_level_query(args: &QuarterLevelNetworksArgs) -> Result<QuarterLevelNetworkQuery> {
    let mut query =
        QuarterLevelNetworkQuery::default().with_page(validation::validate_page(args.page)?);
    query.client_uuid = optional(args.client_uuid.as_ref(), validation::validate_text)?;
    query.legislator_id = optional(args.legislator_id.as_ref(), validation::validate_text)?;
    query.report_year = args.year;
    query.report_quarter_code = optional(args.quarter.as_ref(), validation::validate_quarter)?;
    query.min_bills_sponsored = args.min_bills;
    query.max_bills_sponsored = args.max_bills;
    Ok(query)
}

pub fn build_bill_client_query(args: &BillClientNetworksArgs) -> Result<BillClientNetworkQuery> {
    let mut query =
        BillClientNetworkQuery::default().with_page(validation::validate_page(args.page)?);
    query.congress_number = args.congress;
    query.bill_chamber = optional(args.chamber.as_ref(), validation::validate_chamber)?;
    query.bill_resolution_type = optional(args.resolution_type.as_ref(), validation::validate_text)?;
    query.bill_number = args.number;
    query.report_uuid = optional(args.report_uuid.as_ref(), validation::validate_text)?;
    query.issue_ordi = args.ordi;
    query.client_uuid = optional(args.client_uuid.as_ref(), validation::validate_text)?;
    Ok(query)
}

pub fn run_networks(args: &NetworksArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_network_query(args)?)
}

pub fn run_quarter_level(args: &QuarterLevelNetworksArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_quarter_level_query(args)?)
}

pub fn run_bill_client(args: &BillClientNetworksArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_bill_client_query(args)?)
}
