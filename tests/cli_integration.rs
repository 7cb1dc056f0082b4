//! CLI integration tests for gwrap.
//!
//! These tests run the real binary in a temporary project. A system binary
//! stands in for the compiler via `gwrap_config.json`: `echo` shows the
//! forwarded arguments and `sh` reports a chosen exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the gwrap binary command, running inside `dir`.
fn gwrap(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gwrap").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("GWRAP_LOG");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// First existing path among the candidates.
fn system_binary(candidates: &[&str]) -> PathBuf {
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
        .unwrap_or_else(|| panic!("none of {:?} exist", candidates))
}

/// Point gwrap at `compiler` through `gwrap_config.json`.
fn use_compiler(dir: &Path, compiler: &Path) {
    fs::write(
        dir.join("gwrap_config.json"),
        format!("{{\n  \"gpp_path\": \"{}\"\n}}\n", compiler.display()),
    )
    .unwrap();
}

fn use_echo(dir: &Path) {
    use_compiler(dir, &system_binary(&["/bin/echo", "/usr/bin/echo"]));
}

// ============================================================================
// Forwarding
// ============================================================================

#[cfg(unix)]
#[test]
fn test_forward_without_dependencies() {
    let tmp = temp_dir();
    use_echo(tmp.path());

    gwrap(tmp.path())
        .args(["main.cpp", "-o", "out"])
        .assert()
        .success()
        .stdout("main.cpp -o out\n");
}

#[cfg(unix)]
#[test]
fn test_forward_injects_manifest_includes() {
    let tmp = temp_dir();
    use_echo(tmp.path());
    fs::create_dir(tmp.path().join("cpp_modules")).unwrap();
    fs::write(
        tmp.path().join("cpp_package.json"),
        r#"{"dependencies": [{"include": "a"}, {"include": "b"}, {"include": "a"}]}"#,
    )
    .unwrap();

    gwrap(tmp.path())
        .args(["main.cpp", "-o", "out"])
        .assert()
        .success()
        .stdout("-Ia -Ib -Ia main.cpp -o out\n");
}

#[cfg(unix)]
#[test]
fn test_forward_injects_scanned_includes() {
    let tmp = temp_dir();
    use_echo(tmp.path());
    fs::create_dir_all(tmp.path().join("cpp_modules/pkg1/include")).unwrap();
    fs::create_dir_all(tmp.path().join("cpp_modules/pkg2/src")).unwrap();

    gwrap(tmp.path())
        .args(["-c", "main.cpp"])
        .assert()
        .success()
        .stdout("-Icpp_modules/pkg1/include -c main.cpp\n");
}

#[cfg(unix)]
#[test]
fn test_query_gets_no_includes() {
    let tmp = temp_dir();
    use_echo(tmp.path());
    fs::create_dir_all(tmp.path().join("cpp_modules/pkg1/include")).unwrap();

    gwrap(tmp.path())
        .arg("-dumpmachine")
        .assert()
        .success()
        .stdout("-dumpmachine\n");
}

#[cfg(unix)]
#[test]
fn test_exit_code_propagates() {
    let tmp = temp_dir();
    use_compiler(tmp.path(), &system_binary(&["/bin/sh", "/usr/bin/sh"]));

    gwrap(tmp.path())
        .args(["-c", "exit 7"])
        .assert()
        .code(7)
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_arguments_with_spaces_preserved() {
    let tmp = temp_dir();
    use_compiler(tmp.path(), &system_binary(&["/bin/sh", "/usr/bin/sh"]));

    gwrap(tmp.path())
        .args(["-c", "printf '%s|' \"$@\"", "sh", "my file.cpp", "-o"])
        .assert()
        .success()
        .stdout("my file.cpp|-o|");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_reaches_compiler() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = temp_dir();
    use_compiler(tmp.path(), &system_binary(&["/bin/sh", "/usr/bin/sh"]));

    gwrap(tmp.path())
        .args(["-c", "printf '%s|' \"$@\"", "sh", "--version"])
        .arg(OsStr::from_bytes(b"caf\xe9.cpp"))
        .assert()
        .success()
        .stdout(&b"--version|caf\xe9.cpp|"[..]);
}

#[test]
fn test_nonexistent_configured_compiler_falls_back() {
    let tmp = temp_dir();
    use_compiler(tmp.path(), &tmp.path().join("missing-g++"));

    // Whatever g++ does here, gwrap must never try the bogus path.
    gwrap(tmp.path())
        .arg("-dumpversion")
        .assert()
        .stderr(predicate::str::contains("missing-g++").not());
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_install_reports_failure() {
    let tmp = temp_dir();

    // No vcpkg_install.ps1 exists, so the helper fails either way.
    gwrap(tmp.path())
        .args(["install", "libfoo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Installing libfoo using vcpkg..."))
        .stderr(predicate::str::contains(
            "Installation failed. Check the output above for errors.",
        ));
}

#[test]
fn test_update_prints_notice() {
    let tmp = temp_dir();

    gwrap(tmp.path())
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Checking for package updates..."));
}
