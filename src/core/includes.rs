//! Include-directory discovery for installed dependencies.
//!
//! Two strategies, chosen by whether the dependency manifest exists:
//!
//! - **Manifest mode**: every `"include"` value in `cpp_package.json`, in
//!   file order, used as-is.
//! - **Scan mode**: every `cpp_modules/<package>/include` directory, sorted
//!   by package directory name.
//!
//! Nothing is deduplicated, and both strategies are skipped entirely when
//! `cpp_modules` does not exist.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::scan;
use crate::util::config::WrapConfig;

/// Key naming an include directory in the dependency manifest.
const INCLUDE_KEY: &str = "include";

/// A single `-I<path>` compiler flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeFlag {
    dir: PathBuf,
}

impl IncludeFlag {
    /// Create a flag for the given include directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        IncludeFlag { dir: dir.into() }
    }

    /// The include directory without the `-I` prefix.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The flag as a single argument, e.g. `-Ivendor/include`.
    pub fn to_arg(&self) -> OsString {
        let mut arg = OsString::from("-I");
        arg.push(&self.dir);
        arg
    }
}

impl fmt::Display for IncludeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-I{}", self.dir.display())
    }
}

/// Resolve the include flags to inject into a compilation.
///
/// Manifest mode emits one flag per non-empty `"include"` value. Empty values
/// are dropped because the compiler would take a bare `-I` as consuming the
/// next argument.
///
/// Never fails; an unreadable manifest produces no flags and unreadable
/// directory entries are skipped.
pub fn resolve_includes(config: &WrapConfig) -> Vec<IncludeFlag> {
    let dep_dir = config.dependency_dir_path();
    if !dep_dir.exists() {
        tracing::debug!("No {} directory, no includes added", config.dependency_dir);
        return Vec::new();
    }

    let manifest = config.dependency_manifest_path();
    let flags = if manifest.exists() {
        tracing::debug!("Reading include paths from {}", manifest.display());
        manifest_includes(&manifest).unwrap_or_else(|e| {
            tracing::warn!("{:#}", e);
            Vec::new()
        })
    } else {
        tracing::debug!("Scanning {} for include directories", dep_dir.display());
        scan_includes(&dep_dir, &config.include_dir)
    };

    tracing::debug!("Found {} include directories", flags.len());
    flags
}

/// Collect include flags from every `"include"` field of the manifest.
fn manifest_includes(manifest: &Path) -> Result<Vec<IncludeFlag>> {
    let contents = fs::read_to_string(manifest)
        .with_context(|| format!("failed to read dependency manifest: {}", manifest.display()))?;

    Ok(includes_from_manifest(&contents))
}

/// Include flags declared in manifest text.
///
/// Empty values are skipped: a bare `-I` would consume the next argument.
pub fn includes_from_manifest(contents: &str) -> Vec<IncludeFlag> {
    let text = scan::join_lines(contents);

    scan::all_values(&text, INCLUDE_KEY)
        .into_iter()
        .filter(|value| {
            if value.is_empty() {
                tracing::debug!("Skipping empty include value");
            }
            !value.is_empty()
        })
        .map(IncludeFlag::new)
        .collect()
}

/// Collect `<dep_dir>/<package>/<include_dir>` for every package that has one.
///
/// Entries that cannot be read, such as dangling symlinks, are skipped.
fn scan_includes(dep_dir: &Path, include_dir: &str) -> Vec<IncludeFlag> {
    let mut flags = Vec::new();

    for entry in WalkDir::new(dep_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping entry in {}: {}", dep_dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let candidate = entry.path().join(include_dir);
        if candidate.is_dir() {
            flags.push(IncludeFlag::new(candidate));
        }
    }

    flags
}
