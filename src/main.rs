// ────────────────────────────────────────────────────────────
// Global allocator setup
//   * Default  - mimalloc             (no feature flags)
//   * Debug    - jemalloc (`use-jemalloc` feature)
//   * Fallback - system allocator     (`system-alloc` feature)
// ────────────────────────────────────────────────────────────

// --- jemalloc (opt-in) ---
#[cfg(feature = "use-jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// --- mimalloc (default) ---
#[cfg(all(not(feature = "use-jemalloc"), not(feature = "system-alloc")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// --- system allocator (explicit opt-out) ---
#[cfg(feature = "system-alloc")]
use std::alloc::System;
#[cfg(feature = "system-alloc")]
#[global_allocator]
static GLOBAL: System = System;

use anyhow::{Context, Result};
use iam_auditor::{
    cli::{CommandLineArgs, GlobalArgs},
    reporter::{styles::Styles, ReportWriter},
    AuditError, Auditor, IamIdentityClient,
};
use tokio::runtime::Builder;
use tracing::info;
use tracing_core::metadata::LevelFilter;
use tracing_subscriber::{
    self, fmt, prelude::__tracing_subscriber_SubscriberExt, registry, util::SubscriberInitExt,
};

fn main() -> Result<()> {
    color_backtrace::install();
    // Parse command-line arguments
    let args = CommandLineArgs::parse_args();

    // Every request is awaited in turn; one thread is all the audit needs.
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    // 0 for a complete report, 1 when a service error cut the run short
    let exit_code = runtime.block_on(async_main(args))?;
    std::process::exit(exit_code);
}

fn setup_logging(global_args: &GlobalArgs) {
    // Create a filter for logging
    let filter = if global_args.log_all_targets() {
        // `-vvv`: TRACE for every module, the AWS SDK included
        tracing_subscriber::filter::Targets::new().with_default(LevelFilter::TRACE)
    } else {
        // Per-target filtering; only our own crate follows the verbosity flags
        tracing_subscriber::filter::Targets::new()
            .with_default(LevelFilter::ERROR)
            .with_target("iam_auditor", global_args.log_level())
    };
    // Configure the formatter layer; stdout is reserved for the report
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .without_time();
    // Build and initialize the registry
    registry().with(fmt_layer).with(filter).init();
}

async fn async_main(args: CommandLineArgs) -> Result<i32> {
    setup_logging(&args.global_args);

    // The report goes to stdout as it is produced
    let styles = Styles::new(args.global_args.use_color(std::io::stdout()));
    let mut report = ReportWriter::new(std::io::stdout().lock(), styles);
    report.write_banner()?;

    // Profile or authentication failures are fatal before any account is listed
    let client = IamIdentityClient::connect(&args.audit_args).await?;
    let auditor = Auditor::new(client);

    match auditor.run(&mut report).await {
        Ok(summary) => {
            info!(
                users = summary.accounts,
                users_with_active_keys = summary.accounts_with_active_keys,
                active_keys = summary.active_keys,
                users_without_console_login = summary.accounts_without_console_login,
                "Audit complete"
            );
            Ok(0)
        }
        // Entries already printed stay; one error line closes the report
        Err(AuditError::Service(err)) => {
            report.write_failure(&err)?;
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}
