// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Global CLI options available for all commands.
//!
//! ```text
//! --env-file FILE   ← env record to read (and, for provision, update)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← persistent log (call defaults to call_debug.log)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Path to the environment record file.
    #[arg(
        short = 'e',
        long = "env-file",
        value_name = "FILE",
        default_value = ".env"
    )]
    pub env_file: PathBuf,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file. The call command defaults to call_debug.log.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            log_level: None,
            file_log_level: None,
            log_file: None,
        }
    }
}
