use anyhow::Result;
use clap::Args;
use lobbyview_api::{LegislatorQuery, Query};

use super::{execute, Context};
use crate::validation::{self, optional};

#[derive(Args)]
pub struct LegislatorsArgs {
    /// Bioguide ID (e.g. M000303)
    #[arg(long)]
    pub id: Option<String>,

    /// GovTrack ID
    #[arg(long)]
    pub govtrack_id: Option<i64>,

    /// Search by first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Search by last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Search by full name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by gender: female (f), male (m)
    #[arg(long)]
    pub gender: Option<String>,

    /// Born on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub born_after: Option<String>,

    /// Born on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub born_before: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub fn build_query(args: &LegislatorsArgs) -> Result<LegislatorQuery> {
    let mut query = LegislatorQuery::default().with_page(validation::validate_page(args.page)?);
    query.legislator_id = optional(args.id.as_ref(), validation::validate_text)?;
    query.legislator_govtrack_id = args.govtrack_id;
    query.legislator_first_name = optional(args.first_name.as_ref(), validation::validate_text)?;
    query.legislator_last_name = optional(args.last_name.as_ref(), validation::validate_text)?;
    query.legislator_full_name = optional(args.name.as_ref(), validation::validate_text)?;
    query.legislator_gender = optional(args.gender.as_ref(), validation::validate_gender)?;
    query.min_birthday = optional(args.born_after.as_ref(), validation::validate_date)?;
    query.max_birthday = optional(args.born_before.as_ref(), validation::validate_date)?;
    Ok(query)
}

pub fn run(args: &LegislatorsArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_query(args)?)
}
