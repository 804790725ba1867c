use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region, SdkConfig};
use aws_sdk_iam::{
    error::{DisplayErrorContext, SdkError},
    primitives::DateTime as AwsDateTime,
    types::{AccessKeyMetadata, StatusType, User},
    Client as IamClient,
};
use aws_sdk_sts::Client as StsClient;
use chrono::{DateTime, Utc};
use tracing::{info, trace, warn};

use super::{Account, Credential, CredentialStatus, IdentityClient, Page};
use crate::{cli::AuditArgs, error::ServiceError};

const DEFAULT_REGION: &str = "us-east-1";

/// IAM-backed [`IdentityClient`] bound to a single named profile.
#[derive(Clone, Debug)]
pub struct IamIdentityClient {
    iam: IamClient,
    page_size: Option<i32>,
}

impl IamIdentityClient {
    /// Resolve the profile, confirm the credentials work, and build the IAM client.
    ///
    /// Any failure here is fatal: the audit never starts.
    pub async fn connect(args: &AuditArgs) -> Result<Self> {
        let config = load_config(&args.profile, args.region.as_deref()).await;

        let caller = authenticated(
            StsClient::new(&config).get_caller_identity().send().await,
            &args.profile,
        )?;

        info!(
            profile = %args.profile,
            arn = caller.arn().unwrap_or("unknown"),
            account = caller.account().unwrap_or("unknown"),
            "Authenticated to AWS"
        );

        Ok(Self::from_config(&config, args.page_size))
    }

    pub fn from_config(config: &SdkConfig, page_size: Option<u16>) -> Self {
        Self { iam: IamClient::new(config), page_size: page_size.map(i32::from) }
    }
}

#[async_trait]
impl IdentityClient for IamIdentityClient {
    async fn list_accounts(&self, marker: Option<String>) -> Result<Page<Account>, ServiceError> {
        trace!(marker = marker.as_deref(), "iam:ListUsers");
        let resp = self
            .iam
            .list_users()
            .set_marker(marker)
            .set_max_items(self.page_size)
            .send()
            .await
            .map_err(|err| service_error("ListUsers", err))?;

        let items = resp.users().iter().map(account_from_user).collect();
        let marker = next_marker(resp.is_truncated(), resp.marker());

        Ok(Page { items, next_marker: marker })
    }

    async fn list_credentials(&self, account_name: &str) -> Result<Vec<Credential>, ServiceError> {
        trace!(user = account_name, "iam:ListAccessKeys");
        let resp = self
            .iam
            .list_access_keys()
            .user_name(account_name)
            .send()
            .await
            .map_err(|err| service_error("ListAccessKeys", err))?;

        Ok(resp.access_key_metadata().iter().map(credential_from_metadata).collect())
    }
}

async fn load_config(profile: &str, region: Option<&str>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(|r| Region::new(r.to_string())))
        .or_default_provider()
        .or_else(DEFAULT_REGION);

    aws_config::defaults(BehaviorVersion::latest())
        .profile_name(profile)
        .region(region_provider)
        .load()
        .await
}

/// Attach the profile to a failed caller-identity check, keeping the SDK error as the source.
fn authenticated<T, E>(result: std::result::Result<T, E>, profile: &str) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| {
        format!("Failed to authenticate with profile '{profile}' (sts:GetCallerIdentity)")
    })
}

/// Continuation marker for the next `ListUsers` request, if any.
///
/// An empty marker never continues; a truncated page without one ends the listing.
fn next_marker(is_truncated: bool, marker: Option<&str>) -> Option<String> {
    match (is_truncated, marker) {
        (true, Some(m)) if !m.is_empty() => Some(m.to_string()),
        (true, _) => {
            warn!("ListUsers reported a truncated page without a marker; stopping pagination");
            None
        }
        (false, _) => None,
    }
}

fn account_from_user(user: &User) -> Account {
    Account {
        name: user.user_name().to_string(),
        password_last_used: user.password_last_used().and_then(to_chrono),
    }
}

fn credential_from_metadata(meta: &AccessKeyMetadata) -> Credential {
    let status = match meta.status() {
        Some(StatusType::Active) => CredentialStatus::Active,
        _ => CredentialStatus::Inactive,
    };
    Credential { id: meta.access_key_id().unwrap_or_default().to_string(), status }
}

fn to_chrono(ts: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}

fn service_error<E>(operation: &'static str, err: SdkError<E>) -> ServiceError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let detail = DisplayErrorContext(&err).to_string();
    ServiceError::with_source(operation, detail, err)
}
