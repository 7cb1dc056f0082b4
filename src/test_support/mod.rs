//! Test utilities and mocks for gwrap unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use gwrap::test_support::{ProjectFixture, RecordingLauncher};
//!
//! #[test]
//! fn test_example() {
//!     let project = ProjectFixture::new().dependency("fmt", true);
//!     let launcher = RecordingLauncher::new(0);
//!
//!     // Dispatch against project.config() with &launcher...
//!     assert_eq!(launcher.single_launch().program, "g++");
//! }
//! ```

pub mod fixtures;

use std::cell::RefCell;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::util::process::{LaunchError, Launcher, ProcessBuilder};

// Re-export fixtures for convenience
pub use fixtures::*;

/// A process the [`RecordingLauncher`] was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub command_line: String,
}

/// What a [`RecordingLauncher`] answers with.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    Exit(i32),
    NotFound,
}

/// Launcher that records every launch instead of spawning it.
#[derive(Debug)]
pub struct RecordingLauncher {
    outcome: Outcome,
    launches: RefCell<Vec<Launch>>,
}

impl RecordingLauncher {
    /// Create a launcher whose processes all exit with `code`.
    pub fn new(code: i32) -> Self {
        RecordingLauncher {
            outcome: Outcome::Exit(code),
            launches: RefCell::new(Vec::new()),
        }
    }

    /// Create a launcher that fails every launch as if the program were missing.
    pub fn not_found() -> Self {
        RecordingLauncher {
            outcome: Outcome::NotFound,
            launches: RefCell::new(Vec::new()),
        }
    }

    /// All recorded launches, in order.
    pub fn launches(&self) -> Vec<Launch> {
        self.launches.borrow().clone()
    }

    /// The only recorded launch.
    ///
    /// Panics unless exactly one process was launched.
    pub fn single_launch(&self) -> Launch {
        let launches = self.launches.borrow();
        assert_eq!(
            launches.len(),
            1,
            "expected exactly one launch, got {:?}",
            launches
        );
        launches[0].clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, process: &ProcessBuilder) -> Result<i32, LaunchError> {
        self.launches.borrow_mut().push(Launch {
            program: process.get_program().to_path_buf(),
            args: process.get_args().to_vec(),
            command_line: process.display_command(),
        });

        match self.outcome {
            Outcome::Exit(code) => Ok(code),
            Outcome::NotFound => Err(LaunchError::NotFound {
                program: process.get_program().display().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_launcher() {
        let launcher = RecordingLauncher::new(5);
        let process = ProcessBuilder::new("g++").arg("--version");

        assert_eq!(launcher.launch(&process).unwrap(), 5);
        let launch = launcher.single_launch();
        assert_eq!(launch.program, PathBuf::from("g++"));
        assert_eq!(launch.args, ["--version"]);
        assert_eq!(launch.command_line, "\"g++\" --version");
    }

    #[test]
    fn test_not_found_launcher() {
        let launcher = RecordingLauncher::not_found();
        let err = launcher.launch(&ProcessBuilder::new("pwsh")).unwrap_err();

        assert_eq!(err.exit_code(), 127);
        assert_eq!(launcher.launches().len(), 1);
    }
}
