// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Arguments for the `provision` command.

use clap::{Args, ValueEnum};

/// Arguments for `voxctl provision`.
#[derive(Debug, Clone, Args)]
pub struct ProvisionArgs {
    /// Built-in agent profile to provision.
    #[arg(value_enum)]
    pub profile: ProfileName,
}

/// Names of the built-in agent profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileName {
    /// General-purpose phone assistant (sequential pipeline, GPT-4.1,
    /// OpenAI synthesis).
    DeepgramPhone,
    /// Batman persona (parallel pipeline, GPT-4o-mini, Deepgram Aura
    /// synthesis).
    Batman,
}

impl std::fmt::Display for ProfileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeepgramPhone => write!(f, "deepgram-phone"),
            Self::Batman => write!(f, "batman"),
        }
    }
}
