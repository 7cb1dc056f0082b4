//! High-level operations.
//!
//! This module contains the implementation of gwrap's invocations.

pub mod dispatch;
pub mod forward;
pub mod helper;

pub use dispatch::{run, Invocation};
pub use forward::{forward, CompileCommand};
pub use helper::{ConfigRequest, HelperCall};
