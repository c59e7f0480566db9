// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Arguments for the `call` command.

use clap::Args;

/// Arguments for `voxctl call`.
#[derive(Debug, Clone, Default, Args)]
pub struct CallArgs {
    /// Destination phone number, overriding DESTINATION_PHONE_NUMBER
    /// from the environment.
    #[arg(short = 'n', long = "number", value_name = "NUMBER")]
    pub number: Option<String>,
}
