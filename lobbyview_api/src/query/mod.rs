/// Declares a typed query for one endpoint: an `Option` field per recognized
/// filter, a `with_*` builder per field, and the [`Query`] impl that lists the
/// filters that are set.
macro_rules! endpoint_query {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $endpoint:expr;
        $(
            $(#[$fmeta:meta])*
            $field:ident: $ty:ty => $setter:ident,
        )*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            pub common: $crate::query::QueryCommon,
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                $(#[$fmeta])*
                pub fn $setter(mut self, $field: impl Into<$ty>) -> Self {
                    self.$field = Some($field.into());
                    self
                }
            )*
        }

        impl $crate::query::Query for $name {
            fn endpoint(&self) -> $crate::endpoint::Endpoint {
                $endpoint
            }

            fn filters(&self) -> $crate::query::FilterSet {
                let mut filters = $crate::query::FilterSet::new();
                $(
                    filters.insert(stringify!($field), self.$field.clone());
                )*
                filters
            }

            fn get_common(&mut self) -> &mut $crate::query::QueryCommon {
                &mut self.common
            }

            fn common(&self) -> &$crate::query::QueryCommon {
                &self.common
            }
        }
    };
}

mod common;
pub use self::common::{encode_into_url, encode_pairs, FilterSet, ParamValue, Query, QueryCommon};

mod legislator;
pub use self::legislator::LegislatorQuery;

mod bill;
pub use self::bill::BillQuery;

mod client;
pub use self::client::ClientQuery;

mod report;
pub use self::report::{IssueQuery, ReportQuery, TextQuery};

mod network;
pub use self::network::{BillClientNetworkQuery, NetworkQuery, QuarterLevelNetworkQuery};
