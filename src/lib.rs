//! Read-only audit of IAM users.
//!
//! Every user is listed through an [`identity::IdentityClient`], its access keys
//! are counted, and one plain-text block per user is written by
//! [`reporter::ReportWriter`].

pub mod audit;
pub mod cli;
pub mod error;
pub mod identity;
pub mod pagination;
pub mod reporter;

pub use audit::{AuditSummary, Auditor, ReportEntry};
pub use error::{AuditError, ServiceError};
pub use identity::{
    aws::IamIdentityClient, Account, Credential, CredentialStatus, IdentityClient, Page,
};
