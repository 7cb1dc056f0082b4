//! gwrap CLI - stands in for g++ and forwards to it

use std::ffi::OsString;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use gwrap::util::{Shell, SystemLauncher, WrapConfig};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "GWRAP_LOG";

fn main() -> ExitCode {
    init_logging();

    // Arguments need not be UTF-8; they are forwarded as raw OS strings.
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let config = WrapConfig::default();
    let shell = Shell::from_env();

    let code = gwrap::run(&args, &config, &SystemLauncher, &shell);
    tracing::debug!("Exiting with code {}", code);

    ExitCode::from(clamp_exit_code(code))
}

fn init_logging() {
    // Stay silent unless asked: compiler output must not be polluted.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("gwrap=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Process exit codes are a single byte on Unix; keep the low byte.
fn clamp_exit_code(code: i32) -> u8 {
    (code & 0xff) as u8
}
