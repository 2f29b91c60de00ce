//! Typed, blocking client for the LobbyView lobbying-data REST API.
//!
//! Queries are built from one typed struct per endpoint, encoded through the
//! declarative [`Endpoint`] table, and returned as an [`Envelope`] holding the
//! page's records and pagination metadata. [`Client::paginate`] walks every
//! page lazily.
//!
//! ```no_run
//! use lobbyview_api::{Client, LegislatorQuery};
//!
//! # fn main() -> Result<(), lobbyview_api::Error> {
//! let client = Client::new(std::env::var("LOBBYVIEW_TOKEN").unwrap_or_default())?;
//! let page = client.legislators(&LegislatorQuery::default().with_legislator_id("M000303"))?;
//! println!("{}", page);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod endpoint;
mod errors;
mod paginate;
mod query;
pub mod types;

pub use self::client::Client;
pub use self::config::{AuthScheme, ClientConfig};
pub use self::endpoint::Endpoint;
pub use self::errors::{Error, RequestError};
pub use self::paginate::Paginator;
pub use self::query::{
    encode_into_url, encode_pairs, BillClientNetworkQuery, BillQuery, ClientQuery, FilterSet,
    IssueQuery, LegislatorQuery, NetworkQuery, ParamValue, QuarterLevelNetworkQuery, Query,
    QueryCommon, ReportQuery, TextQuery,
};
pub use self::types::{Envelope, PageInfo, Record};
