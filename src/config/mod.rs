// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Configuration loading from layered sources.
//!
//! ```text
//! Settings::load(env_file)
//!        |
//!        v
//!   EnvFile (.env)  <--overridden by--  process environment
//!        |
//!        v
//!     Settings { bolna_host, deepgram_token, twilio_url, ... }
//! ```
//!
//! A key already present in the process environment wins over the file,
//! matching dotenv semantics. Only the agent-platform host is ever
//! required; everything else is passed through as-is, empty or not.

use std::path::Path;

use crate::envfile::EnvFile;
use crate::error::{ConfigError, VoxResult};


/// Agent-platform host (bare hostname, e.g. an ngrok domain).
pub const KEY_BOLNA_HOST: &str = "BOLNA_NGROK_URL";
/// Transcription-service credential, presence-checked only.
pub const KEY_DEEPGRAM_TOKEN: &str = "DEEPGRAM_AUTH_TOKEN";
/// Telephony-bridge base URL.
pub const KEY_TWILIO_URL: &str = "TWILIO_NGROK_URL";
/// Outbound call destination.
pub const KEY_DESTINATION_NUMBER: &str = "DESTINATION_PHONE_NUMBER";
/// Identifier of the last provisioned agent. Written by `provision`.
pub const KEY_ASSISTANT_ID: &str = "ASSISTANT_ID";

/// Resolved configuration snapshot for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub bolna_host: Option<String>,
    pub deepgram_token: Option<String>,
    pub twilio_url: Option<String>,
    pub destination_number: Option<String>,
    pub assistant_id: Option<String>,
}

impl Settings {
    /// Load settings from the environment record at `env_file`, overlaid
    /// by the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the record file exists but cannot be read.
    pub fn load(env_file: &Path) -> VoxResult<Self> {
        let record = EnvFile::load(env_file)?;
        Ok(Self::from_sources(&record, |key| std::env::var(key).ok()))
    }

    /// Build settings from an in-memory record and an environment lookup.
    /// Split out so tests can inject a synthetic environment.
    pub(crate) fn from_sources<F>(record: &EnvFile, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).or_else(|| record.get(key).map(str::to_string));

        Self {
            bolna_host: lookup(KEY_BOLNA_HOST),
            deepgram_token: lookup(KEY_DEEPGRAM_TOKEN),
            twilio_url: lookup(KEY_TWILIO_URL),
            destination_number: lookup(KEY_DESTINATION_NUMBER),
            assistant_id: lookup(KEY_ASSISTANT_ID),
        }
    }

    /// The agent-platform host, or a `MissingKey` error. This is the only
    /// required value anywhere in the tool.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if the host is absent from both
    /// the record and the process environment.
    pub fn require_bolna_host(&self) -> std::result::Result<&str, ConfigError> {
        self.bolna_host
            .as_deref()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                key: KEY_BOLNA_HOST.to_string(),
            })
    }
}
