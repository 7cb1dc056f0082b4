//! Subprocess execution utilities.
//!
//! gwrap runs exactly one child per invocation, with inherited standard
//! streams, and exits with the child's exit code. Arguments are kept as
//! `OsString` so file names that are not valid UTF-8 reach the child
//! byte-for-byte.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Exit code when the program could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code when the program exists but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Failure to start or wait for a child process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("`{program}` not found")]
    NotFound { program: String },

    #[error("`{program}` is not executable")]
    PermissionDenied { program: String },

    #[error("failed to execute `{program}`: {source}")]
    Io { program: String, source: io::Error },
}

impl LaunchError {
    fn from_io(program: &Path, err: io::Error) -> Self {
        let program = program.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound { program },
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program },
            _ => LaunchError::Io {
                program,
                source: err,
            },
        }
    }

    /// Exit code reported for this failure, following shell conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::NotFound { .. } => EXIT_NOT_FOUND,
            LaunchError::PermissionDenied { .. } => EXIT_NOT_EXECUTABLE,
            LaunchError::Io { .. } => 1,
        }
    }
}

/// Builder for subprocess execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Build the Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run with inherited stdio and wait for completion.
    pub fn status(&self) -> Result<ExitStatus, LaunchError> {
        self.build_command()
            .status()
            .map_err(|e| LaunchError::from_io(&self.program, e))
    }

    /// Display the command as a single line.
    ///
    /// The program is quoted so paths with spaces stay readable; arguments
    /// are joined with single spaces exactly as given. Bytes that are not
    /// valid UTF-8 are shown lossily.
    pub fn display_command(&self) -> String {
        let mut parts = vec![format!("\"{}\"", self.program.display())];
        parts.extend(self.args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// Convert a finished child's status into gwrap's exit code.
///
/// Children killed by a signal report `128 + signal`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Runs child processes on behalf of the dispatcher.
pub trait Launcher {
    /// Run the process to completion and return its exit code.
    fn launch(&self, process: &ProcessBuilder) -> Result<i32, LaunchError>;
}

/// Launcher that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, process: &ProcessBuilder) -> Result<i32, LaunchError> {
        tracing::debug!("Running {}", process.display_command());
        process.status().map(exit_code)
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
