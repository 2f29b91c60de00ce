use crate::endpoint::Endpoint;

endpoint_query! {
    /// Filters for `/api/clients`, the organizations on whose behalf lobbying
    /// is conducted.
    pub struct ClientQuery => Endpoint::Clients;
    client_uuid: String => with_client_uuid,
    /// Client name, matched as a case-insensitive substring.
    client_name: String => with_client_name,
    /// Lowest primary NAICS code, compared as a plain bound.
    min_naics: String => with_min_naics,
    /// Highest primary NAICS code, compared as a plain bound.
    max_naics: String => with_max_naics,
    naics_description: String => with_naics_description,
}
