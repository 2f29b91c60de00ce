use chrono::NaiveDate;

use crate::endpoint::Endpoint;

endpoint_query! {
    /// Filters for `/api/bills`. A bill is identified by congress, chamber,
    /// resolution type and number together.
    pub struct BillQuery => Endpoint::Bills;
    /// Session of Congress.
    congress_number: i64 => with_congress_number,
    /// Chamber of the legislative branch (`H` or `S`).
    bill_chamber: String => with_bill_chamber,
    bill_resolution_type: String => with_bill_resolution_type,
    bill_number: i64 => with_bill_number,
    /// Bill status, matched as a case-insensitive substring (e.g. `ENACTED`).
    bill_state: String => with_bill_state,
    /// Sponsor of the bill.
    legislator_id: String => with_legislator_id,
    min_introduced_date: NaiveDate => with_min_introduced_date,
    max_introduced_date: NaiveDate => with_max_introduced_date,
    /// Earliest date of the most recent status change.
    min_updated_date: NaiveDate => with_min_updated_date,
    /// Latest date of the most recent status change.
    max_updated_date: NaiveDate => with_max_updated_date,
}
