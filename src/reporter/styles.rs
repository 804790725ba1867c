use std::io::IsTerminal;

pub use console::{Style, StyledObject, Term};

pub struct Styles {
    pub style_account: Style,
    pub style_warning: Style,
    pub style_clean: Style,
    pub style_error: Style,
}

impl Styles {
    /// Build the report styles. Color is applied only when requested *and*
    /// stdout is an interactive terminal.
    pub fn new(use_color: bool) -> Self {
        let enabled = use_color && std::io::stdout().is_terminal() && Term::stdout().is_term();
        Self::with_styling(enabled)
    }

    /// Styles that never emit escape sequences.
    pub fn plain() -> Self {
        Self::with_styling(false)
    }

    fn with_styling(enabled: bool) -> Self {
        Self {
            style_account: Style::new().bold().force_styling(enabled),
            style_warning: Style::new().yellow().force_styling(enabled),
            style_clean: Style::new().green().force_styling(enabled),
            style_error: Style::new().bold().red().force_styling(enabled),
        }
    }
}
