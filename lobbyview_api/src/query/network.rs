use crate::endpoint::Endpoint;

endpoint_query! {
    /// Filters for `/api/networks`: client/legislator relationships by year.
    pub struct NetworkQuery => Endpoint::Networks;
    client_uuid: String => with_client_uuid,
    legislator_id: String => with_legislator_id,
    min_report_year: i64 => with_min_report_year,
    max_report_year: i64 => with_max_report_year,
    /// Minimum bills sponsored by the legislator in a year lobbied by the client.
    min_bills_sponsored: i64 => with_min_bills_sponsored,
    /// Maximum bills sponsored by the legislator in a year lobbied by the client.
    max_bills_sponsored: i64 => with_max_bills_sponsored,
}

endpoint_query! {
    /// Filters for `/api/quarter_level_networks`. Restricted to entitled tokens.
    pub struct QuarterLevelNetworkQuery => Endpoint::QuarterLevelNetworks;
    client_uuid: String => with_client_uuid,
    legislator_id: String => with_legislator_id,
    report_year: i64 => with_report_year,
    report_quarter_code: String => with_report_quarter_code,
    min_bills_sponsored: i64 => with_min_bills_sponsored,
    max_bills_sponsored: i64 => with_max_bills_sponsored,
}

endpoint_query! {
    /// Filters for `/api/bill_client_networks`. Restricted to entitled tokens.
    pub struct BillClientNetworkQuery => Endpoint::BillClientNetworks;
    congress_number: i64 => with_congress_number,
    bill_chamber: String => with_bill_chamber,
    bill_resolution_type: String => with_bill_resolution_type,
    bill_number: i64 => with_bill_number,
    report_uuid: String => with_report_uuid,
    issue_ordi: i64 => with_issue_ordi,
    client_uuid: String => with_client_uuid,
}
