use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::ServiceError;

pub mod aws;

/// An identity principal (IAM user) as returned by the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    /// Unique user name.
    pub name: String,
    /// Last console sign-in. `None` when no password is set or it was never used.
    pub password_last_used: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), password_last_used: None }
    }

    pub fn with_password_last_used(mut self, at: DateTime<Utc>) -> Self {
        self.password_last_used = Some(at);
        self
    }
}

/// A programmatic access key owned by one account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub id: String,
    pub status: CredentialStatus,
}

impl Credential {
    pub fn new(id: impl Into<String>, status: CredentialStatus) -> Self {
        Self { id: id.into(), status }
    }

    pub fn is_active(&self) -> bool {
        self.status == CredentialStatus::Active
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialStatus {
    Active,
    Inactive,
}

/// One page of a paged listing.
#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation marker; present only when more pages remain.
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next_marker: None }
    }

    pub fn with_marker(items: Vec<T>, marker: impl Into<String>) -> Self {
        Self { items, next_marker: Some(marker.into()) }
    }
}

/// Read-only view of the access-management service.
///
/// Implementations are expected to be already authenticated.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Fetch the page of accounts starting at `marker` (`None` for the first page).
    async fn list_accounts(&self, marker: Option<String>) -> Result<Page<Account>, ServiceError>;

    /// List every access key belonging to `account_name`.
    async fn list_credentials(&self, account_name: &str) -> Result<Vec<Credential>, ServiceError>;
}

#[async_trait]
impl<C: IdentityClient + ?Sized> IdentityClient for &C {
    async fn list_accounts(&self, marker: Option<String>) -> Result<Page<Account>, ServiceError> {
        (**self).list_accounts(marker).await
    }

    async fn list_credentials(&self, account_name: &str) -> Result<Vec<Credential>, ServiceError> {
        (**self).list_credentials(account_name).await
    }
}
