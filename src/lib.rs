//! gwrap - a g++ wrapper for locally installed C++ dependencies
//!
//! gwrap stands in for the compiler. For invocations that compile or link,
//! it injects `-I` flags for every dependency under `cpp_modules/` (or every
//! `include` listed in `cpp_package.json`), then runs the real compiler
//! exactly once and exits with its code.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for gwrap unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording launcher and temporary project
/// layouts.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{includes::IncludeFlag, tool::ToolPath};
pub use ops::{run, Invocation};
pub use util::config::WrapConfig;
