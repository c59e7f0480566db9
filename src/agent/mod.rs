// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Agent-definition documents sent to the platform's `/agent` endpoint.
//!
//! ```text
//! AgentDefinition
//!   agent_config: AgentConfig
//!     tasks: [Task]
//!       toolchain:    Execution + pipelines
//!       tools_config: input / llm_agent / output / synthesizer / transcriber
//!       task_config:  silence handling, latency knobs
//!   agent_prompts: AgentPrompts (task_1.system_prompt)
//! ```
//!
//! The documents are modeled as typed structs rather than embedded JSON so
//! a profile that drops a required sub-field fails to construct at compile
//! time. Optional fields serialize only when present, keeping each
//! profile's wire form minimal.

use serde::{Deserialize, Serialize};

pub mod profiles;


/// Top-level document for agent creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub agent_config: AgentConfig,
    pub agent_prompts: AgentPrompts,
}

/// Agent identity and its task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub agent_name: String,
    pub agent_type: String,
    pub agent_welcome_message: String,
    pub tasks: Vec<Task>,
}

/// One conversational task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_type: String,
    pub toolchain: Toolchain,
    pub tools_config: ToolsConfig,
    pub task_config: TaskConfig,
}

/// Processing-chain layout: how the pipeline stages are scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toolchain {
    pub execution: Execution,
    pub pipelines: Vec<Vec<String>>,
}

/// Pipeline scheduling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    Sequential,
    Parallel,
}

impl std::fmt::Display for Execution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Per-stage tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub input: IoConfig,
    pub llm_agent: LlmAgent,
    pub output: IoConfig,
    pub synthesizer: Synthesizer,
    pub transcriber: Transcriber,
}

/// Telephony audio I/O endpoint (format + provider).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    pub format: String,
    pub provider: String,
}

/// Language-model stage wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmAgent {
    pub agent_type: String,
    pub agent_flow_type: String,
    /// Always serialized, even when absent: the platform expects an
    /// explicit `"routes": null`.
    pub routes: Option<serde_json::Value>,
    pub llm_config: LlmConfig,
}

/// Model selection for the language-model stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub agent_flow_type: String,
    pub provider: String,
    pub request_json: bool,
    pub model: String,
}

/// Speech-synthesis stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synthesizer {
    pub audio_format: String,
    pub provider: String,
    pub stream: bool,
    pub provider_config: VoiceConfig,
    pub buffer_size: f64,
}

/// Voice/model pair for the synthesizer provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    pub voice: String,
    pub model: String,
}

/// Transcription stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcriber {
    pub provider: String,
    pub language: String,
    pub stream: bool,
    pub encoding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_rate: Option<u32>,
}

/// Conversation-level behavior knobs. Only the fields a profile sets are
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    pub hangup_after_silence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_if_user_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_user_online_message_after: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_latency: Option<bool>,
}

/// Per-task prompt documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPrompts {
    pub task_1: TaskPrompt,
}

/// System prompt for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPrompt {
    pub system_prompt: String,
}

/// Successful response from agent creation. Only the identifier matters
/// to the caller; the platform may return more.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentCreated {
    pub agent_id: String,
}
