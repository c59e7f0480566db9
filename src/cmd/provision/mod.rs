// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Provision command - create an agent and persist its identifier.
//!
//! ```text
//! Settings::load --> require host (fatal) --> warn on missing token
//!       |
//!       v
//! profile document --> POST https://<host>/agent
//!       |
//!       v
//! 200 + agent_id   -> ASSISTANT_ID=<id> into env record (atomic)
//! 200, no agent_id -> reported, record untouched
//! non-200 / bad JSON / transport error -> reported, record untouched
//! ```
//!
//! Only the missing-host pre-flight check fails the process; every later
//! failure is reported and the command still exits cleanly.

use std::path::Path;

use tracing::debug;

use crate::agent::{AgentCreated, AgentDefinition, profiles};
use crate::cli::global::GlobalOptions;
use crate::cli::provision::{ProfileName, ProvisionArgs};
use crate::config::{KEY_ASSISTANT_ID, KEY_DEEPGRAM_TOKEN, Settings};
use crate::envfile::EnvFile;
use crate::error::Result;
use crate::net::{ApiClient, agent_endpoint};


/// Runs the provision command.
///
/// # Errors
///
/// Returns an error if the env record cannot be read, if the
/// agent-platform host is missing (the pre-flight check), or if a
/// successfully returned identifier cannot be persisted. HTTP failures
/// and transport errors are reported on the console and do NOT produce
/// an error.
pub async fn run_provision_command(args: &ProvisionArgs, global: &GlobalOptions) -> Result<()> {
    let settings = Settings::load(&global.env_file)?;

    // Pre-flight: the platform host is the one hard requirement. Bail
    // before anything touches the network.
    let host = settings.require_bolna_host()?;

    if settings
        .deepgram_token
        .as_deref()
        .is_none_or(str::is_empty)
    {
        println!("WARNING: {KEY_DEEPGRAM_TOKEN} not found in environment variables");
        println!("This may cause issues with transcription. Make sure it's in your env file.");
    }

    let definition = profile_definition(args.profile);
    let url = agent_endpoint(host);
    println!(
        "Creating {} agent via {url}...",
        definition.agent_config.agent_name
    );
    debug!(
        "agent document: {}",
        serde_json::to_string(&definition).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    );

    let client = ApiClient::new();
    let response = match client.post_json(&url, &definition).await {
        Ok(response) => response,
        Err(e) => {
            // Transport failure: report and finish without touching the record
            println!("Error creating agent: {e}");
            return Ok(());
        }
    };

    println!("Status code: {}", response.status);
    println!("Response text: {}", response.body);

    if !response.is_ok() {
        println!("Failed to create agent. Status code: {}", response.status);
        return Ok(());
    }

    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&response.body) else {
        println!("Could not parse response as JSON");
        return Ok(());
    };

    match serde_json::from_value::<AgentCreated>(parsed) {
        Ok(created) => persist_agent_id(&global.env_file, &created.agent_id)?,
        Err(_) => println!("Agent created but no agent_id found in response."),
    }

    Ok(())
}

/// Resolves a profile name to its built-in agent document.
#[must_use]
pub fn profile_definition(profile: ProfileName) -> AgentDefinition {
    match profile {
        ProfileName::DeepgramPhone => profiles::deepgram_phone(),
        ProfileName::Batman => profiles::batman(),
    }
}

fn persist_agent_id(env_file: &Path, agent_id: &str) -> Result<()> {
    println!("Created agent with ID: {agent_id}");

    let mut record = EnvFile::load(env_file)?;
    record.set(KEY_ASSISTANT_ID, agent_id);
    record.save()?;

    println!("Updated {KEY_ASSISTANT_ID} in {}", env_file.display());
    println!("\nYou can now make a call:");
    println!("voxctl call");
    Ok(())
}
