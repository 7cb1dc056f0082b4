//! Shared utilities

pub mod config;
pub mod process;
pub mod shell;

pub use config::WrapConfig;
pub use process::{Launcher, SystemLauncher};
pub use shell::Shell;
