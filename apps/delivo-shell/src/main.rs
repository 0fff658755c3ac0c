//! # Delivo
//!
//! Interactive food ordering in the terminal.
//!
//! ## Usage
//! ```bash
//! # Defaults, or the platform delivo.toml if present
//! delivo
//!
//! # Explicit config file
//! delivo --config ./delivo.toml
//!
//! # Environment overrides
//! DELIVO_STRICT_TRANSITIONS=true DELIVO_RECEIPT_FORMAT=json delivo
//! RUST_LOG=delivo_core=debug delivo
//! ```

use std::env;
use std::path::PathBuf;

use delivo_shell::{ShellError, ShellResult};

enum Command {
    Run(Option<PathBuf>),
    Help,
}

fn main() -> Result<(), ShellError> {
    match parse_args()? {
        Command::Run(config_path) => delivo_shell::run(config_path),
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

fn parse_args() -> ShellResult<Command> {
    let args: Vec<String> = env::args().collect();
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    return Err(ShellError::InvalidArgs(
                        "--config needs a file path".to_string(),
                    ));
                }
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => {
                return Err(ShellError::InvalidArgs(format!(
                    "unknown argument '{}' (try --help)",
                    other
                )));
            }
        }
        i += 1;
    }

    Ok(Command::Run(config_path))
}

fn print_help() {
    println!("Delivo - food ordering shell");
    println!();
    println!("Usage: delivo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Config file (default: DELIVO_CONFIG or platform config dir)");
    println!("  -h, --help           Show this help");
    println!();
    println!("Environment:");
    println!("  DELIVO_USER_NAME           Customer name (default: Guest)");
    println!("  DELIVO_STRICT_TRANSITIONS  true = only PLACED→COOKING→READY→DELIVERED");
    println!("  DELIVO_RECEIPT_FORMAT      text | json");
    println!("  DELIVO_LOG                 Log filter when RUST_LOG is unset (default: warn)");
}
