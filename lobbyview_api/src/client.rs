//! Blocking HTTP client for the LobbyView REST API.

use reqwest::{blocking::Response, StatusCode};
use url::Url;

use crate::{
    config::{AuthScheme, ClientConfig},
    endpoint::Endpoint,
    errors::RequestError,
    paginate::Paginator,
    query::{
        encode_into_url, BillClientNetworkQuery, BillQuery, ClientQuery, FilterSet, IssueQuery,
        LegislatorQuery, NetworkQuery, QuarterLevelNetworkQuery, Query, ReportQuery, TextQuery,
    },
    types::Envelope,
    Error,
};

/// HTTP client for the LobbyView REST API.
///
/// Holds one token for its whole lifetime. Each call blocks the calling
/// thread until the response arrives; nothing is retried or cached.
pub struct Client {
    http: reqwest::blocking::Client,
    /// Base URL for the API. Defaults to `https://rest-api.lobbyview.org`.
    base_api_url: String,
    token: String,
    auth_scheme: AuthScheme,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("auth_scheme", &self.auth_scheme)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production API and checks the token with
    /// one request, so an invalid token fails here with [`Error::Unauthorized`].
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Creates a client from explicit settings. Runs the connection test
    /// when `config.test_connection` is set.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                RequestError::Network(e)
            })?;
        let client = Self {
            http,
            base_api_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            auth_scheme: config.auth_scheme,
        };
        if config.test_connection {
            client.test_connection()?;
        }
        Ok(client)
    }

    /// Creates a client with a custom base URL and no connection test. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(
            token,
            ClientConfig::default()
                .with_base_url(base_url)
                .with_test_connection(false),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Fetches the first page of legislators. An empty dataset still counts
    /// as reachable; every other failure is returned.
    pub fn test_connection(&self) -> Result<(), Error> {
        match self.legislators(&LegislatorQuery::default()) {
            Ok(_) => Ok(()),
            Err(Error::InvalidPageNumber { .. }) => Ok(()),
            Err(e) => {
                tracing::error!("Connection test against {} failed: {}", self.base_api_url, e);
                Err(e)
            }
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Request(RequestError::InvalidUrl(e))
        })
    }

    /// Issues one authenticated GET for `page` and classifies the response.
    fn get(&self, endpoint: Endpoint, filters: &FilterSet, page: u32) -> Result<Envelope, Error> {
        let url = encode_into_url(endpoint, filters, page, &self.get_url(endpoint.path())?);
        tracing::debug!("GET {}", url);

        let request = self.http.get(url).header("accept", "application/json");
        let request = match self.auth_scheme {
            AuthScheme::Bearer => request.bearer_auth(&self.token),
            AuthScheme::TokenHeader => request.header("token", &self.token),
        };
        let resp = request.send().map_err(|e| {
            tracing::error!("Failed to get {}: {}", endpoint, e);
            RequestError::Network(e)
        })?;

        let resp = classify(endpoint, resp)?;
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            RequestError::Network(e)
        })?;

        let envelope = Envelope::from_body(endpoint, page, &body).map_err(|e| {
            tracing::error!("Failed to parse {}: {} | body: {}", endpoint, e, truncate_body(&body));
            e
        })?;

        let info = envelope.page_info();
        if envelope.is_empty() && page > info.total_pages {
            return Err(Error::InvalidPageNumber {
                current_page: page,
                total_pages: info.total_pages,
            });
        }
        Ok(envelope)
    }

    /// Fetches one page for any typed query. The single entry point every
    /// endpoint accessor goes through.
    pub fn fetch<Q: Query>(&self, query: &Q) -> Result<Envelope, Error> {
        self.get(query.endpoint(), &query.filters(), query.common().page)
    }

    /// Fetches one page for a dynamic filter set. Names the endpoint does not
    /// recognize are sent verbatim and left for the server to reject.
    pub fn fetch_filters(
        &self,
        endpoint: Endpoint,
        filters: &FilterSet,
        page: u32,
    ) -> Result<Envelope, Error> {
        self.get(endpoint, filters, page)
    }

    /// Lazily iterates every record matching `query` across all pages,
    /// starting at page 1 regardless of the page set on `query`.
    pub fn paginate<Q>(&self, query: Q) -> Paginator<impl FnMut(u32) -> Result<Envelope, Error> + '_>
    where
        Q: Query + 'static,
    {
        let mut query = query;
        Paginator::new(move |page| {
            query.get_common().page = page;
            self.fetch(&query)
        })
    }

    /// Fetches legislators matching the given query.
    pub fn legislators(&self, query: &LegislatorQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches bills matching the given query.
    pub fn bills(&self, query: &BillQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches lobbying clients matching the given query.
    pub fn clients(&self, query: &ClientQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches quarterly reports matching the given query.
    pub fn reports(&self, query: &ReportQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches report issues matching the given query.
    pub fn issues(&self, query: &IssueQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches yearly client-legislator networks matching the given query.
    pub fn networks(&self, query: &NetworkQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches issue texts matching the given query.
    pub fn texts(&self, query: &TextQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches quarter-level networks. Default tokens get [`Error::Unauthorized`].
    pub fn quarter_level_networks(
        &self,
        query: &QuarterLevelNetworkQuery,
    ) -> Result<Envelope, Error> {
        self.fetch(query)
    }

    /// Fetches bill-client networks. Default tokens get [`Error::Unauthorized`].
    pub fn bill_client_networks(&self, query: &BillClientNetworkQuery) -> Result<Envelope, Error> {
        self.fetch(query)
    }
}

/// Maps the status code to an outcome; only 200 passes through.
fn classify(endpoint: Endpoint, resp: Response) -> Result<Response, Error> {
    let status = resp.status();
    match status {
        StatusCode::OK => Ok(resp),
        StatusCode::UNAUTHORIZED => {
            tracing::warn!("{} rejected the token (HTTP 401)", endpoint);
            Err(Error::Unauthorized)
        }
        StatusCode::PARTIAL_CONTENT => {
            tracing::warn!("{} returned partial content (HTTP 206)", endpoint);
            Err(Error::PartialContent)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            tracing::warn!("{} rate limit exceeded (HTTP 429)", endpoint);
            Err(Error::TooManyRequests)
        }
        _ => {
            let body = resp
                .text()
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            let snippet = truncate_body(&body);
            tracing::warn!("{} failed with status {}: {}", endpoint, status, snippet);
            Err(Error::UnexpectedStatusCode {
                status: status.as_u16(),
                body: snippet,
            })
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = Client::with_base_url("http://localhost:9/", "t").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9");
        let url = client.get_url(Endpoint::Bills.path()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9/api/bills");
    }

    #[test]
    fn debug_output_hides_token() {
        let client = Client::with_base_url("http://localhost:9", "secret-token").unwrap();
        assert!(!format!("{:?}", client).contains("secret-token"));
    }
}
