//! Forwarding a compiler invocation.
//!
//! The forwarded command is the resolved compiler, then any injected
//! include flags, then the caller's arguments unchanged:
//!
//! ```text
//! gwrap main.cpp -o app   =>   "g++" -Icpp_modules/fmt/include main.cpp -o app
//! ```
//!
//! Arguments stay `OsString` end to end; only classification looks at a
//! lossy UTF-8 view of them.

use std::borrow::Cow;
use std::ffi::OsString;

use crate::core::classify::is_compilation;
use crate::core::includes::{resolve_includes, IncludeFlag};
use crate::core::tool::{resolve_tool_path, ToolPath};
use crate::util::config::WrapConfig;
use crate::util::process::{LaunchError, Launcher, ProcessBuilder};
use crate::util::shell::Shell;

/// A fully assembled compiler command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    tool: ToolPath,
    includes: Vec<IncludeFlag>,
    args: Vec<OsString>,
}

impl CompileCommand {
    pub fn new(tool: ToolPath, includes: Vec<IncludeFlag>, args: Vec<OsString>) -> Self {
        CompileCommand {
            tool,
            includes,
            args,
        }
    }

    /// Resolve the compiler and, for compilations, the include flags.
    pub fn assemble(config: &WrapConfig, args: &[OsString]) -> Self {
        let tool = resolve_tool_path(config);

        let view: Vec<Cow<'_, str>> = args.iter().map(|arg| arg.to_string_lossy()).collect();
        let includes = if is_compilation(&view) {
            resolve_includes(config)
        } else {
            tracing::debug!("Not a compilation, forwarding without includes");
            Vec::new()
        };

        CompileCommand::new(tool, includes, args.to_vec())
    }

    pub fn tool(&self) -> &ToolPath {
        &self.tool
    }

    pub fn includes(&self) -> &[IncludeFlag] {
        &self.includes
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The process to run: tool, include flags, then the caller's arguments.
    pub fn to_process(&self) -> ProcessBuilder {
        ProcessBuilder::new(self.tool.as_path())
            .args(self.includes.iter().map(IncludeFlag::to_arg))
            .args(&self.args)
    }

    /// The command as one line, e.g. `"/usr/bin/g++" -Iinc main.cpp -o out`.
    pub fn command_line(&self) -> String {
        self.to_process().display_command()
    }
}

/// Forward `args` to the compiler and return its exit code.
pub fn forward(args: &[OsString], config: &WrapConfig, launcher: &dyn Launcher, shell: &Shell) -> i32 {
    let command = CompileCommand::assemble(config, args);
    tracing::debug!("Forwarding: {}", command.command_line());

    if tracing::enabled!(tracing::Level::DEBUG) {
        match command.tool().locate() {
            Some(found) => tracing::debug!("Compiler found at {}", found.display()),
            None => tracing::debug!("Compiler `{}` not found on PATH", command.tool()),
        }
    }

    match launcher.launch(&command.to_process()) {
        Ok(code) => code,
        Err(e) => {
            shell.error(&e);
            if matches!(e, LaunchError::NotFound { .. }) {
                shell.detail(format!(
                    "set \"gpp_path\" in {} to choose a compiler",
                    config.tool_config
                ));
            }
            e.exit_code()
        }
    }
}
