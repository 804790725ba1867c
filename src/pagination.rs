use crate::{
    error::ServiceError,
    identity::{Account, IdentityClient},
};

/// Cursor over the paged account listing.
///
/// Each call to [`next_page`](Self::next_page) issues at most one request. The
/// sequence ends after the page without a continuation marker or after the
/// first error, and cannot be restarted.
pub struct AccountPages<'c, C: ?Sized> {
    client: &'c C,
    marker: Option<String>,
    exhausted: bool,
    pages_fetched: usize,
}

impl<'c, C: IdentityClient + ?Sized> AccountPages<'c, C> {
    pub fn new(client: &'c C) -> Self {
        Self { client, marker: None, exhausted: false, pages_fetched: 0 }
    }

    pub async fn next_page(&mut self) -> Option<Result<Vec<Account>, ServiceError>> {
        if self.exhausted {
            return None;
        }

        match self.client.list_accounts(self.marker.take()).await {
            Ok(page) => {
                self.pages_fetched += 1;
                match page.next_marker {
                    Some(marker) => self.marker = Some(marker),
                    None => self.exhausted = true,
                }
                Some(Ok(page.items))
            }
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }

    /// Number of pages successfully returned so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}
