use anyhow::Result;
use clap::Args;
use lobbyview_api::{ClientQuery, Query};

use super::{execute, Context};
use crate::validation::{self, optional};

#[derive(Args)]
pub struct ClientsArgs {
    /// Client UUID
    #[arg(long)]
    pub uuid: Option<String>,

    /// Search by client name
    #[arg(long)]
    pub name: Option<String>,

    /// Lowest primary NAICS code
    #[arg(long)]
    pub min_naics: Option<String>,

    /// Highest primary NAICS code
    #[arg(long)]
    pub max_naics: Option<String>,

    /// Search by NAICS description
    #[arg(long)]
    pub naics_description: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub fn build_query(args: &ClientsArgs) -> Result<ClientQuery> {
    let mut query = ClientQuery::default().with_page(validation::validate_page(args.page)?);
    query.client_uuid = optional(args.uuid.as_ref(), validation::validate_text)?;
    query.client_name = optional(args.name.as_ref(), validation::validate_text)?;
    query.min_naics = optional(args.min_naics.as_ref(), validation::validate_naics)?;
    query.max_naics = optional(args.max_naics.as_ref(), validation::validate_naics)?;
    query.naics_description =
        optional(args.naics_description.as_ref(), validation::validate_text)?;
    Ok(query)
}

pub fn run(args: &ClientsArgs, ctx: &Context<'_>) -> Result<()> {
    execute(ctx, build_query(args)?)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use lobbyview_api::ParamValue;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: ClientsArgs,
    }

    fn parse(argv: &[&str]) -> ClientsArgs {
        Cli::parse_from(std::iter::once("clients").chain(argv.iter().copied())).args
    }

    #[test]
    fn name_is_sanitized() {
        let query = build_query(&parse(&["--name", " Microsoft Corporation\u{1b} "])).unwrap();
        assert_eq!(
            query.filters().get("client_name"),
            Some(&ParamValue::Text("Microsoft Corporation".to_string()))
        );
    }

    #[test]
    fn naics_range() {
        let query = build_query(&parse(&["--min-naics", "511209", "--max-naics", "511211"])).unwrap();
        assert_eq!(query.min_naics.as_deref(), Some("511209"));
        assert_eq!(query.max_naics.as_deref(), Some("511211"));
        assert!(build_query(&parse(&["--min-naics", "software"])).is_err());
    }
}
