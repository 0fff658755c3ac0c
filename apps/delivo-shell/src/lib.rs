//! # Delivo Shell Library
//!
//! Terminal front-end for Delivo. `main.rs` only parses arguments and calls
//! [`run`].
//!
//! ## Module Organization
//! ```text
//! delivo_shell/
//! ├── lib.rs      ◄─── You are here (tracing setup & run)
//! ├── config.rs   ◄─── ShellConfig: defaults, delivo.toml, DELIVO_* env
//! ├── shell.rs    ◄─── Menus over stdin/stdout
//! └── error.rs    ◄─── ShellError / ConfigError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults → delivo.toml → DELIVO_* env → validate                  │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • RUST_LOG wins, else log_filter from config                        │
//! │                                                                         │
//! │  3. Run Shell ────────────────────────────────────────────────────────► │
//! │     • stdin / stdout until Exit or end of input                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod shell;

use std::io;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{ReceiptFormat, ShellConfig};
pub use error::{ConfigError, ShellError, ShellResult};
pub use shell::Shell;

/// Loads configuration, sets up logging and runs the shell on the process's
/// stdin and stdout.
pub fn run(config_path: Option<PathBuf>) -> ShellResult<()> {
    let config = ShellConfig::load(config_path)?;
    init_tracing(&config.log_filter);

    info!(
        user = %config.user_name,
        policy = ?config.transition_policy,
        receipt = ?config.receipt_format,
        "Delivo shell starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&config, stdin.lock(), stdout.lock());
    shell.run()
}

/// Initializes the tracing subscriber.
///
/// Output goes to stderr so it never interleaves with the menus.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
