use std::{fmt::Display, io::Write};

pub mod styles;

use styles::{StyledObject, Styles};

use crate::audit::ReportEntry;

pub const BANNER: &str = "🚀 Starting IAM User Audit...";
pub const SEPARATOR: &str = "------------------------------";

/// Plain-text report renderer. One block per account, written as soon as the
/// account has been classified.
pub struct ReportWriter<W> {
    out: W,
    styles: Styles,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, styles: Styles) -> Self {
        Self { out, styles }
    }

    pub fn write_banner(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{BANNER}\n")?;
        self.out.flush()
    }

    pub fn write_entry(&mut self, entry: &ReportEntry<'_>) -> std::io::Result<()> {
        writeln!(self.out, "👤 User: {}", self.style_account(entry.account_name()))?;
        writeln!(self.out, "   - Console Last Login: {}", entry.console_last_login())?;
        match entry.active_keys() {
            0 => writeln!(self.out, "   - {}", self.style_clean("✅ No Active Access Keys"))?,
            n => writeln!(
                self.out,
                "   - {}",
                self.style_warning(format!("⚠️  Active Access Keys Found: {n}"))
            )?,
        }
        writeln!(self.out, "{SEPARATOR}")?;
        self.out.flush()
    }

    /// Emit the single line reported when the run is aborted.
    pub fn write_failure(&mut self, err: &dyn Display) -> std::io::Result<()> {
        writeln!(self.out, "{}", self.style_error(format!("❌ Error: {err}")))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn style_account<D>(&self, val: D) -> StyledObject<D> {
        self.styles.style_account.apply_to(val)
    }

    fn style_warning<D>(&self, val: D) -> StyledObject<D> {
        self.styles.style_warning.apply_to(val)
    }

    fn style_clean<D>(&self, val: D) -> StyledObject<D> {
        self.styles.style_clean.apply_to(val)
    }

    fn style_error<D>(&self, val: D) -> StyledObject<D> {
        self.styles.style_error.apply_to(val)
    }
}
