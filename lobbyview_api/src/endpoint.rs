//! Declarative endpoint table: path, recognized filters, and record summary rule
//! for every resource the service exposes.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::types::Record;

/// A resource kind served under `/api/<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Legislators,
    Bills,
    Clients,
    Reports,
    Issues,
    Networks,
    Texts,
    /// Restricted: default tokens receive HTTP 401.
    QuarterLevelNetworks,
    /// Restricted: default tokens receive HTTP 401.
    BillClientNetworks,
}

/// How a filter value is compared against its column on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Exact match.
    Eq,
    /// Case-insensitive substring match.
    ILike,
    /// Lower bound, inclusive.
    Gte,
    /// Upper bound, inclusive.
    Lte,
}

impl Operator {
    /// Renders a value with this operator's wire prefix, e.g. `gte.2017`.
    pub fn render(self, value: &str) -> String {
        match self {
            Operator::Eq => format!("eq.{}", value),
            Operator::ILike => format!("ilike.*{}*", value),
            Operator::Gte => format!("gte.{}", value),
            Operator::Lte => format!("lte.{}", value),
        }
    }
}

/// A filter name accepted by an endpoint and the column it constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub column: &'static str,
    pub op: Operator,
}

const fn eq(name: &'static str) -> Param {
    Param {
        name,
        column: name,
        op: Operator::Eq,
    }
}

const fn ilike(name: &'static str) -> Param {
    Param {
        name,
        column: name,
        op: Operator::ILike,
    }
}

const fn gte(name: &'static str, column: &'static str) -> Param {
    Param {
        name,
        column,
        op: Operator::Gte,
    }
}

const fn lte(name: &'static str, column: &'static str) -> Param {
    Param {
        name,
        column,
        op: Operator::Lte,
    }
}

/// One-line rendering of a record: an optional headline field followed by
/// labelled detail fields.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub headline: Option<&'static str>,
    pub details: &'static [(&'static str, &'static str)],
}

impl Summary {
    /// Formats one record. Missing fields render as `N/A`, so this never fails.
    pub fn render(&self, record: &Record) -> String {
        let details = self
            .details
            .iter()
            .map(|(label, key)| format!("{}: {}", label, field_text(record, key)))
            .collect::<Vec<_>>()
            .join(", ");
        match self.headline {
            Some(key) => format!("{} ({})", field_text(record, key), details),
            None => details,
        }
    }
}

fn field_text(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Static description of an endpoint.
#[derive(Debug)]
pub struct Descriptor {
    pub path: &'static str,
    pub heading: &'static str,
    pub params: &'static [Param],
    pub summary: Summary,
}

static LEGISLATORS: Descriptor = Descriptor {
    path: "/api/legislators",
    heading: "Legislators",
    params: &[
        eq("legislator_id"),
        eq("legislator_govtrack_id"),
        ilike("legislator_first_name"),
        ilike("legislator_last_name"),
        ilike("legislator_full_name"),
        eq("legislator_gender"),
        gte("min_birthday", "legislator_birthday"),
        lte("max_birthday", "legislator_birthday"),
    ],
    summary: Summary {
        headline: Some("legislator_full_name"),
        details: &[("ID", "legislator_id")],
    },
};

static BILLS: Descriptor = Descriptor {
    path: "/api/bills",
    heading: "Bills",
    params: &[
        eq("congress_number"),
        eq("bill_chamber"),
        eq("bill_resolution_type"),
        eq("bill_number"),
        ilike("bill_state"),
        eq("legislator_id"),
        gte("min_introduced_date", "bill_introduced_datetime"),
        lte("max_introduced_date", "bill_introduced_datetime"),
        gte("min_updated_date", "bill_date_updated"),
        lte("max_updated_date", "bill_date_updated"),
    ],
    summary: Summary {
        headline: Some("bill_number"),
        details: &[("Congress", "congress_number"), ("Sponsor", "legislator_id")],
    },
};

static CLIENTS: Descriptor = Descriptor {
    path: "/api/clients",
    heading: "Clients",
    params: &[
        eq("client_uuid"),
        ilike("client_name"),
        gte("min_naics", "primary_naics"),
        lte("max_naics", "primary_naics"),
        ilike("naics_description"),
    ],
    summary: Summary {
        headline: Some("client_name"),
        details: &[("ID", "client_uuid")],
    },
};

static REPORTS: Descriptor = Descriptor {
    path: "/api/reports",
    heading: "Reports",
    params: &[
        eq("report_uuid"),
        eq("client_uuid"),
        eq("registrant_uuid"),
        ilike("registrant_name"),
        eq("report_year"),
        eq("report_quarter_code"),
        gte("min_amount", "amount"),
        lte("max_amount", "amount"),
        eq("is_no_activity"),
        eq("is_client_self_filer"),
        eq("is_amendment"),
    ],
    summary: Summary {
        headline: Some("report_uuid"),
        details: &[("Year", "report_year"), ("Quarter", "report_quarter_code")],
    },
};

static ISSUES: Descriptor = Descriptor {
    path: "/api/issues",
    heading: "Issues",
    params: &[
        eq("report_uuid"),
        eq("issue_ordi"),
        eq("issue_code"),
        ilike("gov_entity"),
    ],
    summary: Summary {
        headline: Some("issue_code"),
        details: &[("Report UUID", "report_uuid"), ("Issue Ordi", "issue_ordi")],
    },
};

static NETWORKS: Descriptor = Descriptor {
    path: "/api/networks",
    heading: "Networks",
    params: &[
        eq("client_uuid"),
        eq("legislator_id"),
        gte("min_report_year", "report_year"),
        lte("max_report_year", "report_year"),
        gte("min_bills_sponsored", "n_bills_sponsored"),
        lte("max_bills_sponsored", "n_bills_sponsored"),
    ],
    summary: Summary {
        headline: None,
        details: &[
            ("Client UUID", "client_uuid"),
            ("Legislator ID", "legislator_id"),
            ("Year", "report_year"),
            ("Bills Sponsored", "n_bills_sponsored"),
        ],
    },
};

static TEXTS: Descriptor = Descriptor {
    path: "/api/texts",
    heading: "Texts",
    params: &[
        eq("report_uuid"),
        eq("issue_ordi"),
        eq("issue_code"),
        ilike("issue_text"),
    ],
    summary: Summary {
        headline: None,
        details: &[("Issue Code", "issue_code"), ("Issue Text", "issue_text")],
    },
};

static QUARTER_LEVEL_NETWORKS: Descriptor = Descriptor {
    path: "/api/quarter_level_networks",
    heading: "Quarter-Level Networks",
    params: &[
        eq("client_uuid"),
        eq("legislator_id"),
        eq("report_year"),
        eq("report_quarter_code"),
        gte("min_bills_sponsored", "n_bills_sponsored"),
        lte("max_bills_sponsored", "n_bills_sponsored"),
    ],
    summary: Summary {
        headline: None,
        details: &[
            ("Client UUID", "client_uuid"),
            ("Legislator ID", "legislator_id"),
            ("Year", "report_year"),
            ("Quarter", "report_quarter_code"),
            ("Bills Sponsored", "n_bills_sponsored"),
        ],
    },
};

static BILL_CLIENT_NETWORKS: Descriptor = Descriptor {
    path: "/api/bill_client_networks",
    heading: "Bill-Client Networks",
    params: &[
        eq("congress_number"),
        eq("bill_chamber"),
        eq("bill_resolution_type"),
        eq("bill_number"),
        eq("report_uuid"),
        eq("issue_ordi"),
        eq("client_uuid"),
    ],
    summary: Summary {
        headline: None,
        details: &[
            ("Bill Number", "bill_number"),
            ("Client UUID", "client_uuid"),
            ("Issue Ordi", "issue_ordi"),
        ],
    },
};

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Legislators,
        Endpoint::Bills,
        Endpoint::Clients,
        Endpoint::Reports,
        Endpoint::Issues,
        Endpoint::Networks,
        Endpoint::Texts,
        Endpoint::QuarterLevelNetworks,
        Endpoint::BillClientNetworks,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Endpoint::Legislators => &LEGISLATORS,
            Endpoint::Bills => &BILLS,
            Endpoint::Clients => &CLIENTS,
            Endpoint::Reports => &REPORTS,
            Endpoint::Issues => &ISSUES,
            Endpoint::Networks => &NETWORKS,
            Endpoint::Texts => &TEXTS,
            Endpoint::QuarterLevelNetworks => &QUARTER_LEVEL_NETWORKS,
            Endpoint::BillClientNetworks => &BILL_CLIENT_NETWORKS,
        }
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    pub fn heading(self) -> &'static str {
        self.descriptor().heading
    }

    pub fn params(self) -> &'static [Param] {
        self.descriptor().params
    }

    /// Looks up a recognized filter by its caller-facing name.
    pub fn param(self, name: &str) -> Option<&'static Param> {
        self.params().iter().find(|p| p.name == name)
    }

    pub fn summarize(self, record: &Record) -> String {
        self.descriptor().summary.render(record)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().trim_start_matches("/api/"))
    }
}
