use chrono::NaiveDate;

use crate::endpoint::Endpoint;

endpoint_query! {
    /// Filters for `/api/legislators`.
    pub struct LegislatorQuery => Endpoint::Legislators;
    /// Unique identifier of the legislator from LobbyView (e.g. `M000303`).
    legislator_id: String => with_legislator_id,
    /// Unique identifier of the legislator from GovTrack.
    legislator_govtrack_id: i64 => with_legislator_govtrack_id,
    /// First name, matched as a case-insensitive substring.
    legislator_first_name: String => with_legislator_first_name,
    /// Last name, matched as a case-insensitive substring.
    legislator_last_name: String => with_legislator_last_name,
    /// Full name, matched as a case-insensitive substring.
    legislator_full_name: String => with_legislator_full_name,
    legislator_gender: String => with_legislator_gender,
    /// Earliest birthday, inclusive.
    min_birthday: NaiveDate => with_min_birthday,
    /// Latest birthday, inclusive.
    max_birthday: NaiveDate => with_max_birthday,
}
