//! Core decision logic for gwrap.
//!
//! - Loose scanning of JSON-shaped config files
//! - Compiler selection (`gwrap_config.json`)
//! - Include discovery (`cpp_package.json` or `cpp_modules/`)
//! - Compilation detection

pub mod classify;
pub mod includes;
pub mod scan;
pub mod tool;

pub use classify::is_compilation;
pub use includes::{resolve_includes, IncludeFlag};
pub use tool::{resolve_tool_path, ToolPath};
