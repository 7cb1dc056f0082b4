//! Compiler selection from `gwrap_config.json`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::scan;
use crate::util::config::WrapConfig;
use crate::util::process::find_executable;

/// Key holding the compiler path in the tool config.
const GPP_PATH_KEY: &str = "gpp_path";

/// The compiler executable gwrap forwards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPath(String);

impl ToolPath {
    pub fn new(path: impl Into<String>) -> Self {
        ToolPath(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Locate the executable, searching `PATH` for bare names.
    pub fn locate(&self) -> Option<PathBuf> {
        find_executable(&self.0)
    }
}

impl fmt::Display for ToolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ToolPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Resolve the compiler to forward to.
///
/// Uses the first `gpp_path` value in the tool config when it names an
/// existing file, and the default tool otherwise. Never fails.
pub fn resolve_tool_path(config: &WrapConfig) -> ToolPath {
    let config_path = config.tool_config_path();
    if !config_path.exists() {
        tracing::debug!("No {} found, using {}", config.tool_config, config.default_tool);
        return ToolPath::new(&config.default_tool);
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            return ToolPath::new(&config.default_tool);
        }
    };

    match configured_tool(&contents, config) {
        Some(tool) => {
            tracing::debug!("Using compiler from {}: {}", config.tool_config, tool);
            tool
        }
        None => ToolPath::new(&config.default_tool),
    }
}

/// Extract a usable `gpp_path` from tool config text.
fn configured_tool(contents: &str, config: &WrapConfig) -> Option<ToolPath> {
    let text = scan::join_lines(contents);
    let value = scan::first_value(&text, GPP_PATH_KEY)?;

    if value.is_empty() {
        return None;
    }

    if !config.resolve(Path::new(value)).exists() {
        tracing::debug!("Configured gpp_path does not exist: {}", value);
        return None;
    }

    Some(ToolPath::new(value))
}
