//! Delegation of `config`, `install` and `update` to helper scripts.
//!
//! gwrap holds no package-management logic itself. Each subcommand becomes a
//! [`HelperCall`]: a script name plus named string parameters, launched as
//!
//! ```text
//! pwsh -ExecutionPolicy Bypass -File vcpkg_install.ps1 -Package fmt
//! ```
//!
//! The install and update notices are status lines on stderr, like every
//! other message gwrap prints, so stdout carries only the helpers' own
//! output. Scripts that match on these notices must read stderr.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::util::config::WrapConfig;
use crate::util::process::{Launcher, ProcessBuilder};
use crate::util::shell::{Shell, Status};

/// Arguments of `gwrap config [action] [tool] [path]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRequest {
    pub action: Option<OsString>,
    pub tool: Option<OsString>,
    pub path: Option<OsString>,
}

/// One helper script invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCall {
    script: String,
    params: Vec<(&'static str, OsString)>,
}

impl HelperCall {
    pub fn new(script: impl Into<String>) -> Self {
        HelperCall {
            script: script.into(),
            params: Vec::new(),
        }
    }

    /// Add a named parameter, passed as `-<name> <value>`.
    pub fn param(mut self, name: &'static str, value: impl Into<OsString>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn params(&self) -> &[(&'static str, OsString)] {
        &self.params
    }

    /// Build the process running this helper.
    pub fn to_process(&self, config: &WrapConfig) -> ProcessBuilder {
        let helpers = &config.helpers;

        ProcessBuilder::new(&helpers.interpreter)
            .args(&helpers.interpreter_args)
            .arg(config.resolve(Path::new(&self.script)))
            .args(
                self.params
                    .iter()
                    .flat_map(|(name, value)| [OsString::from(format!("-{}", name)), value.clone()]),
            )
    }

    /// Run the helper and return its exit code.
    ///
    /// A helper that cannot be started is reported on the shell and mapped
    /// to the conventional launch-failure exit code.
    pub fn run(&self, config: &WrapConfig, launcher: &dyn Launcher, shell: &Shell) -> i32 {
        let process = self.to_process(config);
        tracing::debug!("Running helper: {}", process.display_command());

        match launcher.launch(&process) {
            Ok(code) => code,
            Err(e) => {
                shell.error(&e);
                e.exit_code()
            }
        }
    }
}

/// `gwrap config`: forward up to three positionals to the config helper.
pub fn config(
    request: &ConfigRequest,
    config: &WrapConfig,
    launcher: &dyn Launcher,
    shell: &Shell,
) -> i32 {
    let mut call = HelperCall::new(&config.helpers.config_script);

    let named = [
        ("Action", &request.action),
        ("Tool", &request.tool),
        ("Path", &request.path),
    ];
    for (name, value) in named {
        if let Some(value) = value {
            call = call.param(name, value.clone());
        }
    }

    call.run(config, launcher, shell)
}

/// `gwrap install <package>`: run the install helper and report the outcome.
pub fn install(package: &OsStr, config: &WrapConfig, launcher: &dyn Launcher, shell: &Shell) -> i32 {
    shell.status(
        Status::Installing,
        format!("{} using vcpkg...", package.to_string_lossy()),
    );

    let code = HelperCall::new(&config.helpers.install_script)
        .param("Package", package)
        .run(config, launcher, shell);

    if code == 0 {
        shell.status(Status::Installed, "Package installed successfully!");
        shell.detail("Rebuild gwrap to use the new package:");
        shell.detail(format!("  {}", config.rebuild_hint));
    } else {
        shell.error("Installation failed. Check the output above for errors.");
    }

    code
}

/// `gwrap update`: run the update helper.
pub fn update(config: &WrapConfig, launcher: &dyn Launcher, shell: &Shell) -> i32 {
    shell.status(Status::Updating, "Checking for package updates...");

    HelperCall::new(&config.helpers.update_script).run(config, launcher, shell)
}
