use std::io::Write;

use chrono::SecondsFormat;
use tracing::debug;

use crate::{
    error::AuditError,
    identity::{Account, Credential, IdentityClient},
    pagination::AccountPages,
    reporter::ReportWriter,
};

/// Shown in place of a timestamp when the account has never signed in to the console.
pub const NEVER_LOGGED_IN: &str = "Never (or no password)";

/// One account's findings, alive only while its block is printed.
#[derive(Debug, Clone, Copy)]
pub struct ReportEntry<'a> {
    account: &'a Account,
    active_keys: usize,
}

impl<'a> ReportEntry<'a> {
    pub fn new(account: &'a Account, active_keys: usize) -> Self {
        Self { account, active_keys }
    }

    /// Count the active credentials of `account`; inactive keys are ignored.
    pub fn classify(account: &'a Account, credentials: &[Credential]) -> Self {
        Self::new(account, credentials.iter().filter(|c| c.is_active()).count())
    }

    pub fn account_name(&self) -> &str {
        &self.account.name
    }

    pub fn active_keys(&self) -> usize {
        self.active_keys
    }

    pub fn has_active_keys(&self) -> bool {
        self.active_keys > 0
    }

    pub fn console_last_login(&self) -> String {
        match self.account.password_last_used {
            Some(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
            None => NEVER_LOGGED_IN.to_string(),
        }
    }
}

/// Counters gathered over a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AuditSummary {
    pub accounts: usize,
    pub accounts_with_active_keys: usize,
    pub active_keys: usize,
    pub accounts_without_console_login: usize,
}

impl AuditSummary {
    fn record(&mut self, entry: &ReportEntry<'_>) {
        self.accounts += 1;
        self.active_keys += entry.active_keys;
        if entry.has_active_keys() {
            self.accounts_with_active_keys += 1;
        }
        if entry.account.password_last_used.is_none() {
            self.accounts_without_console_login += 1;
        }
    }
}

/// Walks every account once, in service order, and reports its console and key risk.
pub struct Auditor<C> {
    client: C,
}

impl<C: IdentityClient> Auditor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run the audit to completion, writing one block per account.
    ///
    /// The first service failure aborts the run; blocks already written stay
    /// written and the error is handed back for the caller to report.
    pub async fn run<W: Write>(
        &self,
        report: &mut ReportWriter<W>,
    ) -> Result<AuditSummary, AuditError> {
        let mut pages = AccountPages::new(&self.client);
        let mut summary = AuditSummary::default();

        while let Some(page) = pages.next_page().await {
            let accounts = page?;
            debug!(page = pages.pages_fetched(), accounts = accounts.len(), "Fetched account page");

            for account in accounts {
                let credentials = self.client.list_credentials(&account.name).await?;
                let entry = ReportEntry::classify(&account, &credentials);
                debug!(
                    user = %account.name,
                    keys = credentials.len(),
                    active = entry.active_keys(),
                    "Classified account"
                );
                report.write_entry(&entry)?;
                summary.record(&entry);
            }
        }

        Ok(summary)
    }
}
