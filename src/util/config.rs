//! Well-known names used by gwrap.
//!
//! Everything gwrap looks for on disk or hands to a helper is named here:
//! - Tool config: `gwrap_config.json` - optional `gpp_path` override
//! - Dependencies: `cpp_modules/<package>/include`
//! - Dependency manifest: `cpp_package.json` - `include` fields
//! - Helpers: `gwrap_config.ps1`, `vcpkg_install.ps1`, `vcpkg_update.ps1`
//!
//! All relative names are resolved against [`WrapConfig::root`]. The default
//! root is the empty path, so paths stay relative to the working directory
//! and include flags come out exactly as the user would write them.

use std::path::{Path, PathBuf};

/// Compiler used when no valid `gpp_path` is configured.
pub const DEFAULT_TOOL: &str = "g++";

/// Tool configuration file name.
pub const TOOL_CONFIG_FILE: &str = "gwrap_config.json";

/// Directory holding one subdirectory per installed dependency.
pub const DEPENDENCY_DIR: &str = "cpp_modules";

/// Dependency manifest file name.
pub const DEPENDENCY_MANIFEST: &str = "cpp_package.json";

/// Conventional include folder inside each dependency.
pub const INCLUDE_DIR: &str = "include";

/// Command printed after a successful `gwrap install`.
pub const REBUILD_HINT: &str = "cargo install --path .";

/// Resolved gwrap configuration.
#[derive(Debug, Clone)]
pub struct WrapConfig {
    /// Directory the well-known names below are relative to
    pub root: PathBuf,

    /// Compiler used when the tool config does not name a valid one
    pub default_tool: String,

    /// Tool config file name (e.g., `gwrap_config.json`)
    pub tool_config: String,

    /// Dependency directory name (e.g., `cpp_modules`)
    pub dependency_dir: String,

    /// Dependency manifest file name (e.g., `cpp_package.json`)
    pub dependency_manifest: String,

    /// Include folder name inside each dependency
    pub include_dir: String,

    /// Helper script settings
    pub helpers: HelperConfig,

    /// Rebuild command shown after a successful install
    pub rebuild_hint: String,
}

impl WrapConfig {
    /// Create a configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        WrapConfig {
            root: root.into(),
            ..WrapConfig::default()
        }
    }

    /// Path of the tool configuration file.
    pub fn tool_config_path(&self) -> PathBuf {
        self.root.join(&self.tool_config)
    }

    /// Path of the dependency directory.
    pub fn dependency_dir_path(&self) -> PathBuf {
        self.root.join(&self.dependency_dir)
    }

    /// Path of the dependency manifest.
    pub fn dependency_manifest_path(&self) -> PathBuf {
        self.root.join(&self.dependency_manifest)
    }

    /// Resolve a user-supplied path against the root.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        WrapConfig {
            root: PathBuf::new(),
            default_tool: DEFAULT_TOOL.to_string(),
            tool_config: TOOL_CONFIG_FILE.to_string(),
            dependency_dir: DEPENDENCY_DIR.to_string(),
            dependency_manifest: DEPENDENCY_MANIFEST.to_string(),
            include_dir: INCLUDE_DIR.to_string(),
            helpers: HelperConfig::default(),
            rebuild_hint: REBUILD_HINT.to_string(),
        }
    }
}

/// How helper scripts are run.
///
/// A helper is launched as `<interpreter> <interpreter_args...> <script> -Name value...`.
#[derive(Debug, Clone)]
pub struct HelperConfig {
    /// Script interpreter (e.g., powershell, pwsh)
    pub interpreter: String,

    /// Arguments placed before the script path
    pub interpreter_args: Vec<String>,

    /// Script behind `gwrap config`
    pub config_script: String,

    /// Script behind `gwrap install`
    pub install_script: String,

    /// Script behind `gwrap update`
    pub update_script: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        let interpreter = if cfg!(windows) { "powershell" } else { "pwsh" };

        HelperConfig {
            interpreter: interpreter.to_string(),
            interpreter_args: vec![
                "-ExecutionPolicy".to_string(),
                "Bypass".to_string(),
                "-File".to_string(),
            ],
            config_script: "gwrap_config.ps1".to_string(),
            install_script: "vcpkg_install.ps1".to_string(),
            update_script: "vcpkg_update.ps1".to_string(),
        }
    }
}
