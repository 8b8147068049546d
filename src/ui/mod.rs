//! Terminal output.
//!
//! A thin [`Output`] writer that respects the requested verbosity and styles
//! messages through a [`console`]-based theme.

use console::Style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including external command lines.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows external command lines.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Visual theme.
#[derive(Debug, Clone)]
struct Theme {
    success: Style,
    warning: Style,
    error: Style,
    command: Style,
}

impl Theme {
    fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            command: Style::new().dim().italic(),
        }
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::new(),
        }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a plain status line.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", self.theme.success.apply_to("✓"), msg);
        }
    }

    /// Write a warning line.
    pub fn warning(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.warning.apply_to(format!("Warning: {msg}")));
        }
    }

    /// Write an error line to stderr. Shown in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(format!("Error: {msg}")));
    }

    /// Echo an external command line (verbose mode only).
    pub fn command(&self, command: &str) {
        if self.mode.shows_commands() {
            println!("{}", self.theme.command.apply_to(format!("$ {command}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_mode_shows_status_but_not_commands() {
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Normal.shows_commands());
    }

    #[test]
    fn verbose_mode_shows_everything() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Verbose.shows_commands());
    }

    #[test]
    fn quiet_mode_hides_status() {
        assert!(!OutputMode::Quiet.shows_status());
    }
}
