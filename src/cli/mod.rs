// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! voxctl [global options] <command>
//! provision {deepgram-phone|batman}
//! call [--number N]
//! version
//! ```

pub mod call;
pub mod global;
pub mod provision;


use crate::cli::call::CallArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::provision::ProvisionArgs;
use clap::{Parser, Subcommand};

/// Voice-agent provisioning and call placement.
///
/// `voxctl provision <profile>` creates an agent on the platform and
/// records its identifier in the local env file; `voxctl call` then rings
/// the configured destination through the telephony bridge.
#[derive(Debug, Parser)]
#[command(
    name = "voxctl",
    author,
    version,
    about = "Voice-agent provisioning and call placement",
    long_about = "Provisions conversational voice agents on the orchestration \
                  platform and places outbound calls through the telephony \
                  bridge.\n\n\
                  Run `voxctl provision <profile>` first: it creates the agent \
                  and writes ASSISTANT_ID into the env file. `voxctl call` then \
                  reads that identifier plus the destination number and bridge \
                  URL from the same file.",
    after_help = "ENV FILE:\n\n\
                  Configuration lives in a line-oriented KEY=VALUE file, `.env` \
                  by default (override with --env-file). Keys already present \
                  in the process environment win over the file. Recognized \
                  keys: BOLNA_NGROK_URL, DEEPGRAM_AUTH_TOKEN, TWILIO_NGROK_URL, \
                  DESTINATION_PHONE_NUMBER, ASSISTANT_ID."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Creates an agent on the platform and saves its identifier.
    Provision(ProvisionArgs),

    /// Places an outbound call to the configured destination.
    Call(CallArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
