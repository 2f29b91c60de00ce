//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields,
//! filter values, and the encoder that turns filters into URL parameters.

use std::fmt;

use chrono::NaiveDate;
use url::Url;

use crate::endpoint::Endpoint;

/// A single filter value. Rendered into the query string via [`fmt::Display`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Date(NaiveDate),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            ParamValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        ParamValue::Date(value)
    }
}

/// Ordered set of named filters. Absent values are never stored, so they can
/// never reach the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: Vec<(String, ParamValue)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` if `value` is present; replaces an earlier value of the same name.
    pub fn insert<V: Into<ParamValue>>(&mut self, name: &str, value: Option<V>) {
        let Some(value) = value else {
            return;
        };
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Builder form of [`FilterSet::insert`] for a value that is always present.
    pub fn with<V: Into<ParamValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, Some(value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Translates filters into wire `(key, value)` pairs for `endpoint`, ending
/// with the page number.
///
/// Recognized names are mapped to their column and operator, e.g.
/// `min_birthday=1950-01-01` becomes `legislator_birthday=gte.1950-01-01`.
/// Unrecognized names pass through unchanged; the server rejects them.
pub fn encode_pairs(endpoint: Endpoint, filters: &FilterSet, page: u32) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = filters
        .iter()
        .map(|(name, value)| {
            let value = value.to_string();
            match endpoint.param(name) {
                Some(param) => (param.column.to_string(), param.op.render(&value)),
                None => (name.to_string(), value),
            }
        })
        .collect();
    pairs.push(("page".to_string(), page.to_string()));
    pairs
}

/// Appends the encoded filters to `url`, percent-encoding every value.
pub fn encode_into_url(endpoint: Endpoint, filters: &FilterSet, page: u32, url: &Url) -> Url {
    let mut url = url.clone();
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in encode_pairs(endpoint, filters, page) {
            query.append_pair(&key, &value);
        }
    }
    url
}

/// Trait implemented by all endpoint queries. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// The endpoint this query is sent to.
    fn endpoint(&self) -> Endpoint;

    /// The filters that are set, by caller-facing name.
    fn filters(&self) -> FilterSet;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        encode_into_url(self.endpoint(), &self.filters(), self.common().page, url)
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }
}

/// Fields shared by all query types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon { page: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/api/legislators").unwrap()
    }

    #[test]
    fn absent_values_are_skipped() {
        let mut filters = FilterSet::new();
        filters.insert::<String>("legislator_id", None);
        filters.insert("legislator_gender", Some("F"));
        assert_eq!(filters.len(), 1);
        assert!(filters.get("legislator_id").is_none());
    }

    #[test]
    fn insert_replaces_existing_name() {
        let filters = FilterSet::new()
            .with("report_year", 2019)
            .with("report_year", 2020);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get("report_year"), Some(&ParamValue::Int(2020)));
    }

    #[test]
    fn value_rendering() {
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
        assert_eq!(ParamValue::Bool(false).to_string(), "false");
        assert_eq!(ParamValue::Int(-4).to_string(), "-4");
        let date = NaiveDate::from_ymd_opt(1936, 8, 29).unwrap();
        assert_eq!(ParamValue::Date(date).to_string(), "1936-08-29");
    }

    #[test]
    fn page_defaults_to_one_and_comes_last() {
        let pairs = encode_pairs(Endpoint::Legislators, &FilterSet::new(), QueryCommon::default().page);
        assert_eq!(pairs, vec![("page".to_string(), "1".to_string())]);
    }

    #[test]
    fn recognized_names_are_translated() {
        let filters = FilterSet::new()
            .with("legislator_first_name", "John")
            .with("min_birthday", "1930-01-01")
            .with("max_birthday", "1940-12-31");
        let pairs = encode_pairs(Endpoint::Legislators, &filters, 2);
        assert_eq!(
            pairs,
            vec![
                ("legislator_first_name".to_string(), "ilike.*John*".to_string()),
                ("legislator_birthday".to_string(), "gte.1930-01-01".to_string()),
                ("legislator_birthday".to_string(), "lte.1940-12-31".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn unrecognized_names_pass_through() {
        let filters = FilterSet::new().with("invalid_param", "value");
        let pairs = encode_pairs(Endpoint::Clients, &filters, 1);
        assert_eq!(pairs[0], ("invalid_param".to_string(), "value".to_string()));
    }

    #[test]
    fn inverted_bounds_are_sent_as_given() {
        let filters = FilterSet::new()
            .with("min_report_year", 2020)
            .with("max_report_year", 2015);
        let pairs = encode_pairs(Endpoint::Networks, &filters, 1);
        assert_eq!(pairs[0].1, "gte.2020");
        assert_eq!(pairs[1].1, "lte.2015");
    }

    #[test]
    fn url_values_are_percent_encoded_and_decode_back() {
        let filters = FilterSet::new()
            .with("legislator_full_name", "John McCain & Co")
            .with("legislator_gender", "M");
        let url = encode_into_url(Endpoint::Legislators, &filters, 1, &base_url());
        let raw = url.query().unwrap();
        assert!(!raw.contains(' '));
        assert!(raw.contains("%26"));

        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(decoded, encode_pairs(Endpoint::Legislators, &filters, 1));
    }
}
