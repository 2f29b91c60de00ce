//! Flattens page fetches into one lazy sequence of records.

use std::iter::FusedIterator;

use crate::{
    types::{Envelope, PageInfo, Record},
    Error,
};

/// Lazy iterator over every record of a filter set, page by page.
///
/// `fetch` is called with 1, 2, ... and only when the records of the previous
/// page have been consumed, so at most one request is ever outstanding and
/// pages the caller never reaches are never requested. Iteration ends after
/// the page whose number equals the reported total.
///
/// An [`Error::InvalidPageNumber`] on page 1 means nothing matched: it is
/// logged and the iterator ends without yielding. Any other error is yielded
/// once and ends the iteration.
pub struct Paginator<F> {
    fetch: F,
    next_page: Option<u32>,
    buffer: std::vec::IntoIter<Record>,
    page_info: Option<PageInfo>,
}

impl<F> Paginator<F>
where
    F: FnMut(u32) -> Result<Envelope, Error>,
{
    /// Paginates any page-fetching callable, starting at page 1.
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            next_page: Some(1),
            buffer: Vec::new().into_iter(),
            page_info: None,
        }
    }

    /// Metadata of the most recently fetched page.
    pub fn page_info(&self) -> Option<PageInfo> {
        self.page_info
    }
}

impl<F> Iterator for Paginator<F>
where
    F: FnMut(u32) -> Result<Envelope, Error>,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.next() {
                return Some(Ok(record));
            }
            let page = self.next_page.take()?;
            match (self.fetch)(page) {
                Ok(envelope) => {
                    let info = envelope.page_info();
                    tracing::debug!(
                        "Fetched page {}/{} ({} records)",
                        info.current_page,
                        info.total_pages,
                        envelope.len()
                    );
                    if !info.is_last() {
                        self.next_page = Some(info.current_page + 1);
                    }
                    self.page_info = Some(info);
                    self.buffer = envelope.into_data().into_iter();
                }
                Err(Error::InvalidPageNumber { total_pages, .. }) if page == 1 => {
                    tracing::info!("No results found (total pages: {})", total_pages);
                    return None;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl<F> FusedIterator for Paginator<F> where F: FnMut(u32) -> Result<Envelope, Error> {}
