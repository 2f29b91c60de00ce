use anyhow::Result;
use clap::Args;
use lobbyview_api::{BillQuery, Query};

use super::{execute, Context};
use crate::validation::{self, optional};

#[derive(Args)]
pub struct BillsArgs {
    /// Congress session number (e.g. 111)
    #[arg(long)]
    pub congress: Option<i64>,

    /// Chamber: house (h), senate (s)
    #[arg(long)]
    pub chamber: Option<String>,

    /// Resolution type
    #[arg(long)]
    pub resolution_type: Option<String>,

    /// Bill number (e.g. 4173)
    #[arg(long)]
    pub number: Option<i64>,

    /// Search by bill state (e.g. ENACTED:SIGNED)
    #[arg(long)]
    pub state: Option<String>,

    /// Sponsor's bioguide ID
    #[arg(long)]
    pub sponsor: Option<String>,

    /// Introduced on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub introduced_after: Option<String>,

    /// Introduced on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub introduced_before: Option<String>,

    /// Status changed on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub updated_after: Option<String>,

    /// Status changed on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub updated_before: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub fn build_query(args: &BillsArgs) -> Result<BillQuery> {
    let mut query = BillQuery::default().with_page(validation::validate_page(args.page)?);
    query.congress_number = args.congress;
    query.bill_chamber = optional(args.chamber.as_ref(), validation::validate_chamber)?;
    query.bill_resolution_type = optional(args.resolution_type.as_ref(), validation::validate_text)?;
    query.bill_number = args.number;
    query.bill_state = optional(args.state.as_ref(), validation::validate_text)?;
    query.legislator_id = optional(args.sponsor.as_ref(), validation::validate_text)?;
    query.min_introduced_date = optional(args.introduced_after.as_ref(), validation::validate_date)?;
    query.max_introduced_date = optional(args.introduced_before.as_ref(), validation::validate_date)?;
    query.min_updated_date = optional(args.updated_after.as_ref(), validation::validate_date)?;
    query.max_updated_date = optional(args.updated_before.as_ref(), validation::validate_date)?;
    Ok(query)
}

pub fn run(args: &BillsArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_query(args)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use lobbyview_api::FilterSet;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: BillsArgs,
    }

    fn parse(argv: &[&str]) -> BillsArgs {
        Cli::parse_from(std::iter::once("bills").chain(argv.iter().copied())).args
    }

    #[test]
    fn composite_key_lookup() {
        let query = build_query(&parse(&[
            "--congress", "111", "--chamber", "house", "--number", "4173",
        ]))
        .unwrap();
        let expected = FilterSet::new()
            .with("congress_number", 111)
            .with("bill_chamber", "H")
            .with("bill_number", 4173);
        assert_eq!(query.filters(), expected);
    }

    #[test]
    fn reversed_date_range_is_not_rejected() {
        let query = build_query(&parse(&[
            "--introduced-after",
            "2010-01-01",
            "--introduced-before",
            "2009-01-01",
        ]))
        .unwrap();
        assert_eq!(query.filters().len(), 2);
    }

    #[test]
    fn unknown_chamber_is_rejected() {
        assert!(build_query(&parse(&["--chamber", "joint"])).is_err());
    }
}
