use clap::Args;

/// Credential selection for the audit. The selected profile should carry
/// read-only IAM permissions (`iam:ListUsers`, `iam:ListAccessKeys`).
#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Audit Options")]
pub struct AuditArgs {
    /// Named AWS credential profile used for every request
    #[arg(long, value_name = "NAME", default_value = "auditor")]
    pub profile: String,

    /// AWS region override (otherwise the profile/environment region, then us-east-1)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Number of users requested per ListUsers page
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    pub page_size: Option<u16>,
}
