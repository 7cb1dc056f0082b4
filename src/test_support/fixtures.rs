//! Project layouts for gwrap tests.
//!
//! Each fixture owns a temporary directory laid out the way gwrap expects:
//!
//! ```text
//! <tmp>/
//!   gwrap_config.json      (optional)
//!   cpp_package.json       (optional)
//!   cpp_modules/<pkg>/include/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::util::config::WrapConfig;

/// A temporary project directory.
#[derive(Debug)]
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    /// Create an empty project.
    pub fn new() -> Self {
        ProjectFixture {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the dependency directory.
    pub fn dependency_dir(&self) -> PathBuf {
        self.root().join("cpp_modules")
    }

    /// Create `cpp_modules/<name>`, with an `include` folder if requested.
    pub fn dependency(self, name: &str, with_include: bool) -> Self {
        let pkg = self.dependency_dir().join(name);
        let dir = if with_include {
            pkg.join("include")
        } else {
            pkg.join("src")
        };
        fs::create_dir_all(dir).expect("failed to create dependency");
        self
    }

    /// Create an empty `cpp_modules` directory.
    pub fn empty_dependency_dir(self) -> Self {
        fs::create_dir_all(self.dependency_dir()).expect("failed to create cpp_modules");
        self
    }

    /// Write `cpp_package.json`.
    pub fn manifest(self, contents: &str) -> Self {
        self.file("cpp_package.json", contents)
    }

    /// Write `gwrap_config.json`.
    pub fn tool_config(self, contents: &str) -> Self {
        self.file("gwrap_config.json", contents)
    }

    /// Write an arbitrary file relative to the root.
    pub fn file(self, rel_path: &str, contents: &str) -> Self {
        let path = self.root().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, contents).expect("failed to write fixture file");
        self
    }

    /// Configuration rooted at this project.
    pub fn config(&self) -> WrapConfig {
        WrapConfig::with_root(self.root())
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
