use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Pagination metadata for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// The page that was requested.
    pub current_page: u32,
    /// Pages available for the filter set. Zero when nothing matched.
    pub total_pages: u32,
    /// Matching rows across all pages, not the rows in this page.
    pub total_rows: u64,
}

impl PageInfo {
    /// True when no page follows this one.
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current Page: {}\nTotal Pages: {}\nTotal Rows: {}",
            self.current_page, self.total_pages, self.total_rows
        )
    }
}

/// The response body as served. Every field is optional so that missing
/// pagination fields can be synthesized from the request.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Paging {
    /// `Some(Value::Null)` when the field is present but null.
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,
    #[serde(
        default,
        rename = "currentPage",
        alias = "current_page",
        deserialize_with = "lenient_count"
    )]
    pub current_page: Option<u64>,
    #[serde(
        default,
        rename = "totalPage",
        alias = "totalPages",
        alias = "total_pages",
        deserialize_with = "lenient_count"
    )]
    pub total_pages: Option<u64>,
    #[serde(
        default,
        rename = "totalNumber",
        alias = "totalRows",
        alias = "total_rows",
        deserialize_with = "lenient_count"
    )]
    pub total_rows: Option<u64>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accepts a count as a JSON number or a numeric string (`"12"`).
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Float(f64),
        Text(String),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Count::Int(n)) => Ok(Some(n)),
        Some(Count::Float(x)) if x >= 0.0 && x.fract() == 0.0 => Ok(Some(x as u64)),
        Some(Count::Float(x)) => Err(serde::de::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            x
        ))),
        Some(Count::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid count {:?}: {}", s, e))),
    }
}
