mod meta;
pub(crate) use self::meta::Paging;
pub use self::meta::PageInfo;

mod envelope;
pub use self::envelope::{Envelope, Record};
