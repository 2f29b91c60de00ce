use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::{PageInfo, Paging};
use crate::{endpoint::Endpoint, errors::RequestError};

/// One result row: column name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// One page of results plus its pagination metadata.
///
/// Built once from a successful response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    endpoint: Endpoint,
    data: Vec<Record>,
    current_page: u32,
    total_pages: u32,
    total_rows: u64,
}

impl Envelope {
    pub fn new(endpoint: Endpoint, data: Vec<Record>, page_info: PageInfo) -> Self {
        Self {
            endpoint,
            data,
            current_page: page_info.current_page,
            total_pages: page_info.total_pages,
            total_rows: page_info.total_rows,
        }
    }

    /// Normalizes a 200 response body for `requested_page`.
    ///
    /// Accepts an object with a `data` array or a bare array. Absent pagination
    /// fields are synthesized: total pages is 0 for an empty page and the
    /// requested page otherwise, total rows is the page length. The current
    /// page is always the requested one.
    pub(crate) fn from_body(
        endpoint: Endpoint,
        requested_page: u32,
        body: &str,
    ) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_str(body)?;
        let (items, paging) = match value {
            Value::Array(items) => (items, Paging::default()),
            Value::Object(_) => {
                let mut paging: Paging = serde_json::from_value(value)?;
                let items = match paging.data.take() {
                    Some(Value::Array(items)) => items,
                    Some(Value::Null) => Vec::new(),
                    Some(other) => {
                        return Err(RequestError::MalformedResponse(format!(
                            "expected `data` to be an array, got {}",
                            json_kind(&other)
                        )))
                    }
                    None => {
                        return Err(RequestError::MalformedResponse(
                            "response has no `data` field".to_string(),
                        ))
                    }
                };
                (items, paging)
            }
            other => {
                return Err(RequestError::MalformedResponse(format!(
                    "expected an object or array body, got {}",
                    json_kind(&other)
                )))
            }
        };

        let data = items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                other => Err(RequestError::MalformedResponse(format!(
                    "expected records to be objects, got {}",
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(echoed) = paging.current_page {
            if echoed != u64::from(requested_page) {
                tracing::warn!(
                    "{} returned page {} for requested page {}",
                    endpoint,
                    echoed,
                    requested_page
                );
            }
        }

        let total_pages = match paging.total_pages {
            Some(n) => u32::try_from(n).map_err(|_| {
                RequestError::MalformedResponse(format!("total page count {} out of range", n))
            })?,
            None if data.is_empty() => 0,
            None => requested_page,
        };
        let total_rows = paging.total_rows.unwrap_or(data.len() as u64);

        Ok(Self {
            endpoint,
            data,
            current_page: requested_page,
            total_pages,
            total_rows,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Record> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.data.iter()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_rows: self.total_rows,
        }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.endpoint.heading())?;
        for record in &self.data {
            writeln!(f, "  {}", self.endpoint.summarize(record))?;
        }
        Ok(())
    }
}

impl IntoIterator for Envelope {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Envelope {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_served_envelope() {
        let body = r#"{
            "data": [{"legislator_id": "M000303", "legislator_full_name": "John McCain"}],
            "currentPage": 1, "totalPage": 1, "totalNumber": 1
        }"#;
        let env = Envelope::from_body(Endpoint::Legislators, 1, body).unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env.data()[0]["legislator_full_name"], "John McCain");
        assert_eq!(
            env.page_info(),
            PageInfo {
                current_page: 1,
                total_pages: 1,
                total_rows: 1
            }
        );
    }

    #[test]
    fn current_page_is_the_requested_page() {
        let body = r#"{"data": [{"a": 1}], "currentPage": 1, "totalPage": 9, "totalNumber": 90}"#;
        let env = Envelope::from_body(Endpoint::Issues, 4, body).unwrap();
        assert_eq!(env.page_info().current_page, 4);
    }

    #[test]
    fn synthesizes_missing_pagination() {
        let env = Envelope::from_body(Endpoint::Clients, 1, r#"[{"client_name": "A"}, {"client_name": "B"}]"#)
            .unwrap();
        assert_eq!(
            env.page_info(),
            PageInfo {
                current_page: 1,
                total_pages: 1,
                total_rows: 2
            }
        );

        let env = Envelope::from_body(Endpoint::Clients, 1, r#"{"data": []}"#).unwrap();
        assert_eq!(env.page_info().total_pages, 0);
        assert_eq!(env.page_info().total_rows, 0);
    }

    #[test]
    fn null_data_is_empty() {
        let env = Envelope::from_body(Endpoint::Texts, 1, r#"{"data": null, "totalPage": 0}"#).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert!(matches!(
            Envelope::from_body(Endpoint::Bills, 1, "{not json"),
            Err(RequestError::Decode(_))
        ));
        assert!(matches!(
            Envelope::from_body(Endpoint::Bills, 1, r#"{"message": "hello"}"#),
            Err(RequestError::MalformedResponse(_))
        ));
        assert!(matches!(
            Envelope::from_body(Endpoint::Bills, 1, r#"{"data": [1, 2]}"#),
            Err(RequestError::MalformedResponse(_))
        ));
        assert!(matches!(
            Envelope::from_body(Endpoint::Bills, 1, r#""text""#),
            Err(RequestError::MalformedResponse(_))
        ));
    }

    #[test]
    fn display_renders_header_and_summaries() {
        let body = r#"{"data": [
            {"client_name": "Microsoft Corporation", "client_uuid": "44563806-56d2-5e99-84a1-95d22a7a69b3"},
            {"client_name": "Acme"}
        ], "currentPage": 1, "totalPage": 1, "totalNumber": 2}"#;
        let env = Envelope::from_body(Endpoint::Clients, 1, body).unwrap();
        assert_eq!(
            env.to_string(),
            "Clients:\n  Microsoft Corporation (ID: 44563806-56d2-5e99-84a1-95d22a7a69b3)\n  Acme (ID: N/A)\n"
        );
    }

    #[test]
    fn display_of_empty_page() {
        let env = Envelope::new(
            Endpoint::QuarterLevelNetworks,
            Vec::new(),
            PageInfo {
                current_page: 1,
                total_pages: 0,
                total_rows: 0,
            },
        );
        assert_eq!(env.to_string(), "Quarter-Level Networks:\n");
    }

    #[test]
    fn iterates_records() {
        let env = Envelope::from_body(Endpoint::Issues, 1, r#"[{"issue_code": "TRD"}, {"issue_code": "TAX"}]"#)
            .unwrap();
        let codes: Vec<_> = env.iter().map(|r| r["issue_code"].clone()).collect();
        assert_eq!(codes, vec!["TRD", "TAX"]);
        let owned: Vec<Record> = env.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
