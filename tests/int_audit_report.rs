use async_trait::async_trait;
use iam_auditor::{
    reporter::{styles::Styles, ReportWriter},
    Account, AuditError, Auditor, Credential, CredentialStatus, IdentityClient, Page,
    ServiceError,
};

/// Two pages of users; the second page request can be made to fail.
struct TwoPageDirectory {
    fail_second_page: bool,
}

#[async_trait]
impl IdentityClient for TwoPageDirectory {
    async fn list_accounts(&self, marker: Option<String>) -> Result<Page<Account>, ServiceError> {
        match marker.as_deref() {
            None => Ok(Page::with_marker(vec![Account::new("alice"), Account::new("bob")], "next")),
            Some("next") if self.fail_second_page => Err(ServiceError::new(
                "ListUsers",
                "Throttling: Rate exceeded (HTTP 400)",
            )),
            Some("next") => Ok(Page::last(vec![Account::new("carol")])),
            Some(other) => panic!("unexpected marker {other}"),
        }
    }

    async fn list_credentials(&self, account_name: &str) -> Result<Vec<Credential>, ServiceError> {
        Ok(match account_name {
            "alice" => vec![
                Credential::new("AKIAALICE1", CredentialStatus::Active),
                Credential::new("AKIAALICE2", CredentialStatus::Inactive),
            ],
            "carol" => vec![Credential::new("AKIACAROL1", CredentialStatus::Active)],
            _ => Vec::new(),
        })
    }
}

#[tokio::test]
async fn full_run_reports_every_user() {
    let mut report = ReportWriter::new(Vec::new(), Styles::plain());
    let summary = Auditor::new(TwoPageDirectory { fail_second_page: false })
        .run(&mut report)
        .await
        .unwrap();
    let out = String::from_utf8(report.into_inner()).unwrap();

    assert_eq!(summary.accounts, 3);
    assert_eq!(summary.accounts_with_active_keys, 2);
    assert_eq!(summary.active_keys, 2);

    let users: Vec<&str> = out.lines().filter_map(|l| l.strip_prefix("👤 User: ")).collect();
    assert_eq!(users, ["alice", "bob", "carol"]);
    assert_eq!(out.matches("Active Access Keys Found: 1").count(), 2);
    assert_eq!(out.matches("Never (or no password)").count(), 3);
}

#[tokio::test]
async fn listing_failure_keeps_completed_blocks() {
    let mut report = ReportWriter::new(Vec::new(), Styles::plain());
    let result = Auditor::new(TwoPageDirectory { fail_second_page: true }).run(&mut report).await;

    let err = match result {
        Err(AuditError::Service(err)) => err,
        other => panic!("expected a service error, got {other:?}"),
    };
    report.write_failure(&err).unwrap();
    let out = String::from_utf8(report.into_inner()).unwrap();

    assert!(out.contains("👤 User: alice"));
    assert!(out.contains("👤 User: bob"));
    assert!(!out.contains("carol"));
    assert!(out.ends_with("❌ Error: ListUsers failed: Throttling: Rate exceeded (HTTP 400)\n"));
    assert_eq!(out.matches("❌ Error:").count(), 1);
}
