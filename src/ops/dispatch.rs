//! Entry point: route an invocation to a helper or to the compiler.
//!
//! Only three first arguments are special:
//!
//! | Invocation | Action |
//! |---|---|
//! | `gwrap config [action] [tool] [path]` | config helper |
//! | `gwrap install <package>` | install helper |
//! | `gwrap update` | update helper |
//!
//! Everything else, including `gwrap install` without a package, goes to
//! the compiler.

use std::ffi::OsString;

use crate::ops::forward::forward;
use crate::ops::helper::{self, ConfigRequest};
use crate::util::config::WrapConfig;
use crate::util::process::Launcher;
use crate::util::shell::Shell;

/// What a single gwrap run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Config(ConfigRequest),
    Install { package: OsString },
    Update,
    Forward(Vec<OsString>),
}

impl Invocation {
    /// Route raw arguments (without the program name).
    ///
    /// Only the first argument is interpreted. The rest are taken by
    /// position, so tokens like `--` or `--help` are plain values.
    pub fn from_args(args: &[OsString]) -> Self {
        let Some((first, rest)) = args.split_first() else {
            return Invocation::Forward(Vec::new());
        };

        match first.to_str() {
            Some("config") => {
                let request = ConfigRequest {
                    action: rest.first().cloned(),
                    tool: rest.get(1).cloned(),
                    path: rest.get(2).cloned(),
                };
                ignore_extra("config", rest.get(3..).unwrap_or_default());
                Invocation::Config(request)
            }
            Some("install") if !rest.is_empty() => {
                ignore_extra("install", &rest[1..]);
                Invocation::Install {
                    package: rest[0].clone(),
                }
            }
            Some("update") => {
                ignore_extra("update", rest);
                Invocation::Update
            }
            _ => Invocation::Forward(args.to_vec()),
        }
    }
}

fn ignore_extra(subcommand: &str, extra: &[OsString]) {
    if !extra.is_empty() {
        tracing::debug!("Ignoring extra `{}` arguments: {:?}", subcommand, extra);
    }
}

/// Run gwrap with the given arguments and return the exit code.
///
/// Exactly one process is launched. Its exit code is returned unchanged.
pub fn run(args: &[OsString], config: &WrapConfig, launcher: &dyn Launcher, shell: &Shell) -> i32 {
    match Invocation::from_args(args) {
        Invocation::Config(request) => helper::config(&request, config, launcher, shell),
        Invocation::Install { package } => helper::install(&package, config, launcher, shell),
        Invocation::Update => helper::update(config, launcher, shell),
        Invocation::Forward(args) => forward(&args, config, launcher, shell),
    }
}
