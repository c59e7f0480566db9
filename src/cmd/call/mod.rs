// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Call command - ring the configured destination through the bridge.
//!
//! ```text
//! Settings::load (no validation, empty values pass through)
//!       |
//!       v
//! log snapshot (destination masked: 6 chars + ****)
//!       |
//!       v
//! { agent_id, recipient_phone_number, debug_mode: true }
//!       |
//!       v
//! POST <bridge>/call --> log status/headers/body, echo to console
//!                        JSON body pretty-printed opportunistically
//! ```
//!
//! Every outcome, including a transport error, ends the command cleanly;
//! the log file holds the full exchange for debugging.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::cli::call::CallArgs;
use crate::cli::global::GlobalOptions;
use crate::config::Settings;
use crate::error::Result;
use crate::net::{ApiClient, call_endpoint};

#[cfg(test)]
mod tests;

/// Number of destination digits left visible in log output.
const MASK_VISIBLE_PREFIX: usize = 6;

/// Request document for the telephony bridge. Exactly these three
/// fields, with `debug_mode` always on.
#[derive(Debug, Clone, Serialize)]
pub struct CallRequest {
    pub agent_id: String,
    pub recipient_phone_number: String,
    pub debug_mode: bool,
}

impl CallRequest {
    /// Builds the request from resolved settings. Missing values pass
    /// through as empty strings; the bridge surfaces its own errors.
    #[must_use]
    pub fn from_settings(settings: &Settings, number_override: Option<&str>) -> Self {
        Self {
            agent_id: settings.assistant_id.clone().unwrap_or_default(),
            recipient_phone_number: number_override
                .map(str::to_string)
                .or_else(|| settings.destination_number.clone())
                .unwrap_or_default(),
            debug_mode: true,
        }
    }
}

/// Masks a destination number for logging: a fixed-length prefix stays
/// visible, the rest is replaced by `****`.
#[must_use]
pub fn mask_number(number: &str) -> String {
    let visible: String = number.chars().take(MASK_VISIBLE_PREFIX).collect();
    format!("{visible}****")
}

/// Runs the call command.
///
/// # Errors
///
/// Returns an error only if the env record cannot be read; the HTTP
/// exchange itself never fails the process.
pub async fn run_call_command(args: &CallArgs, global: &GlobalOptions) -> Result<()> {
    let settings = Settings::load(&global.env_file)?;

    let payload = CallRequest::from_settings(&settings, args.number.as_deref());
    let bridge_url = settings.twilio_url.clone().unwrap_or_default();

    // Configuration snapshot; the destination never reaches the log unmasked
    info!(
        "BOLNA_NGROK_URL: {}",
        settings.bolna_host.as_deref().unwrap_or("")
    );
    info!("TWILIO_NGROK_URL: {bridge_url}");
    info!("ASSISTANT_ID: {}", payload.agent_id);
    info!(
        "Using destination number: {}",
        mask_number(&payload.recipient_phone_number)
    );

    info!(
        "Preparing to make call with payload: {}",
        serde_json::to_string(&payload)?
    );

    let url = call_endpoint(&bridge_url);
    info!("Sending request to {url}");

    let client = ApiClient::new();
    match client.post_json(&url, &payload).await {
        Ok(response) => {
            info!("Status code: {}", response.status);
            info!("Response headers: {:?}", response.headers);
            info!("Response: {}", response.body);

            if !response.body.trim().is_empty() {
                match serde_json::from_str::<serde_json::Value>(&response.body) {
                    Ok(json) => info!(
                        "JSON response: {}",
                        serde_json::to_string_pretty(&json)?
                    ),
                    Err(_) => warn!("Could not parse response as JSON"),
                }
            }

            println!("Status code: {}", response.status);
            println!("Response: {}", response.body);
        }
        Err(e) => {
            error!("Exception occurred: {e:#?}");
            println!("Error: {e}");
        }
    }

    Ok(())
}
