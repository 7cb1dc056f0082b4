//! User-facing status output.
//!
//! gwrap is mostly invisible: when forwarding to the compiler it prints
//! nothing of its own. The helper subcommands print a few fixed status lines,
//! and launch failures print one `error` line. All of that goes through
//! [`Shell`] so formatting and colour handling live in one place.
//!
//! Format: `{status:>12} {message}` on stderr, with plain continuation lines
//! indented to match.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success (green)
    Installed,

    // In-progress (cyan)
    Installing,
    Updating,

    // Error (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Installed => "Installed",
            Status::Installing => "Installing",
            Status::Updating => "Updating",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            Status::Installed => "\x1b[1;32m",
            Status::Installing | Status::Updating => "\x1b[1;36m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Width the status word is right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    use_color: bool,
    /// Lines kept instead of printed, for tests
    captured: Option<Mutex<Vec<String>>>,
}

impl Shell {
    /// Create a shell writing to stderr.
    pub fn new(color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            use_color,
            captured: None,
        }
    }

    /// Create a shell honoring `NO_COLOR`.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Shell::new(if no_color {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        })
    }

    /// Create an uncolored shell that records lines instead of printing them.
    pub fn captured() -> Self {
        Shell {
            use_color: false,
            captured: Some(Mutex::new(Vec::new())),
        }
    }

    /// Lines recorded by a captured shell.
    pub fn captured_lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .and_then(|lines| lines.lock().ok().map(|lines| lines.clone()))
            .unwrap_or_default()
    }

    /// Check if colors are enabled.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print a status message.
    pub fn status(&self, status: Status, msg: impl Display) {
        let prefix = self.format_status(status);
        self.emit(format!("{} {}", prefix, msg));
    }

    /// Print an indented continuation line under the previous status.
    pub fn detail(&self, msg: impl Display) {
        self.emit(format!("{:width$} {}", "", msg, width = STATUS_WIDTH));
    }

    /// Print an error message.
    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    fn emit(&self, line: String) {
        match &self.captured {
            Some(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(line);
                }
            }
            None => eprintln!("{}", line),
        }
    }

    /// Format a status prefix with optional color.
    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            let color = status.color_code();
            format!("{}{:>width$}\x1b[0m", color, text, width = STATUS_WIDTH)
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(ColorChoice::Auto)
    }
}
