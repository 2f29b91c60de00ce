use crate::endpoint::Endpoint;

endpoint_query! {
    /// Filters for `/api/reports`, one quarterly disclosure filing each.
    pub struct ReportQuery => Endpoint::Reports;
    report_uuid: String => with_report_uuid,
    client_uuid: String => with_client_uuid,
    registrant_uuid: String => with_registrant_uuid,
    /// Registrant name, matched as a case-insensitive substring.
    registrant_name: String => with_registrant_name,
    report_year: i64 => with_report_year,
    /// Quarter period of the report.
    report_quarter_code: String => with_report_quarter_code,
    /// Minimum lobbying firm income or in-house lobbying expense.
    min_amount: i64 => with_min_amount,
    /// Maximum lobbying firm income or in-house lobbying expense.
    max_amount: i64 => with_max_amount,
    /// Quarterly activity indicator.
    is_no_activity: bool => with_is_no_activity,
    /// The client employs its own in-house lobbyists.
    is_client_self_filer: bool => with_is_client_self_filer,
    /// The report amends a previous filing.
    is_amendment: bool => with_is_amendment,
}

endpoint_query! {
    /// Filters for `/api/issues`, the coded topic areas within a report.
    pub struct IssueQuery => Endpoint::Issues;
    report_uuid: String => with_report_uuid,
    /// Ordinal position of the issue within its report.
    issue_ordi: i64 => with_issue_ordi,
    /// General issue area code (e.g. `TRD`).
    issue_code: String => with_issue_code,
    /// Houses of Congress and federal agencies contacted, substring match.
    gov_entity: String => with_gov_entity,
}

endpoint_query! {
    /// Filters for `/api/texts`, the free-text description of each issue.
    pub struct TextQuery => Endpoint::Texts;
    report_uuid: String => with_report_uuid,
    issue_ordi: i64 => with_issue_ordi,
    issue_code: String => with_issue_code,
    /// Specific lobbying issue text, matched as a case-insensitive substring.
    issue_text: String => with_issue_text,
}
