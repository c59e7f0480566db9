// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Provision | Call | Version
//! ```

use std::process::ExitCode;

use voxctl::cli::global::GlobalOptions;
use voxctl::cli::{self, Command};
use voxctl::cmd::call::run_call_command;
use voxctl::cmd::provision::run_provision_command;
use voxctl::logging::init_logging;
use voxctl::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Default persistent log for the call command, matching its
/// debugging-heavy workflow.
const CALL_LOG_FILE: &str = "call_debug.log";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global, cli.command.as_ref());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions, command: Option<&Command>) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    // The call command always keeps a persistent log unless one was
    // picked explicitly
    let log_file = global
        .log_file
        .as_ref()
        .map(|p| p.display().to_string())
        .or_else(|| {
            matches!(command, Some(Command::Call(_))).then(|| CALL_LOG_FILE.to_string())
        });

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Provision(args)) => run_provision_command(args, &cli.global).await,
        Some(Command::Call(args)) => run_call_command(args, &cli.global).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
