// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Built-in agent profiles.
//!
//! Two profiles ship with the tool. Both run the same
//! transcriber -> llm -> synthesizer pipeline over Twilio wav audio and
//! differ in persona, model choice, synthesis provider, and pipeline
//! scheduling.

use super::{
    AgentConfig, AgentDefinition, AgentPrompts, Execution, IoConfig, LlmAgent, LlmConfig,
    Synthesizer, Task, TaskConfig, TaskPrompt, Toolchain, ToolsConfig, Transcriber, VoiceConfig,
};

fn twilio_wav() -> IoConfig {
    IoConfig {
        format: "wav".to_string(),
        provider: "twilio".to_string(),
    }
}

fn pipeline() -> Vec<Vec<String>> {
    vec![vec![
        "transcriber".to_string(),
        "llm".to_string(),
        "synthesizer".to_string(),
    ]]
}

fn streaming_llm(model: &str) -> LlmAgent {
    LlmAgent {
        agent_type: "simple_llm_agent".to_string(),
        agent_flow_type: "streaming".to_string(),
        routes: None,
        llm_config: LlmConfig {
            agent_flow_type: "streaming".to_string(),
            provider: "openai".to_string(),
            request_json: true,
            model: model.to_string(),
        },
    }
}

/// General-purpose phone assistant: sequential pipeline, GPT-4.1,
/// OpenAI `tts-1` synthesis, Deepgram transcription at 16 kHz.
#[must_use]
pub fn deepgram_phone() -> AgentDefinition {
    AgentDefinition {
        agent_config: AgentConfig {
            agent_name: "Deepgram Phone Agent".to_string(),
            agent_type: "other".to_string(),
            agent_welcome_message:
                "Hello, this is an AI assistant calling. How are you doing today?".to_string(),
            tasks: vec![Task {
                task_type: "conversation".to_string(),
                toolchain: Toolchain {
                    execution: Execution::Sequential,
                    pipelines: pipeline(),
                },
                tools_config: ToolsConfig {
                    input: twilio_wav(),
                    llm_agent: streaming_llm("gpt-4.1"),
                    output: twilio_wav(),
                    synthesizer: Synthesizer {
                        audio_format: "wav".to_string(),
                        provider: "openai".to_string(),
                        stream: true,
                        provider_config: VoiceConfig {
                            voice: "alloy".to_string(),
                            model: "tts-1".to_string(),
                        },
                        buffer_size: 100.0,
                    },
                    transcriber: Transcriber {
                        provider: "deepgram".to_string(),
                        language: "en-US".to_string(),
                        stream: true,
                        encoding: "linear16".to_string(),
                        sampling_rate: Some(16000),
                    },
                },
                task_config: TaskConfig {
                    hangup_after_silence: 30.0,
                    check_if_user_online: Some(true),
                    trigger_user_online_message_after: Some(10),
                    optimize_latency: Some(false),
                },
            }],
        },
        agent_prompts: AgentPrompts {
            task_1: TaskPrompt {
                system_prompt: "You are a friendly and helpful AI assistant making a phone \
                                call. Engage the person in conversation and respond \
                                thoughtfully to their questions. Be natural and \
                                conversational. If you don't hear a response for a while, \
                                ask if they're still there."
                    .to_string(),
            },
        },
    }
}

/// Batman persona: parallel pipeline, GPT-4o-mini, Deepgram Aura
/// synthesis (Arcas voice), Deepgram transcription.
#[must_use]
pub fn batman() -> AgentDefinition {
    AgentDefinition {
        agent_config: AgentConfig {
            agent_name: "Batman".to_string(),
            agent_type: "other".to_string(),
            agent_welcome_message: "How are you doing citizen?".to_string(),
            tasks: vec![Task {
                task_type: "conversation".to_string(),
                toolchain: Toolchain {
                    execution: Execution::Parallel,
                    pipelines: pipeline(),
                },
                tools_config: ToolsConfig {
                    input: twilio_wav(),
                    llm_agent: streaming_llm("gpt-4o-mini"),
                    output: twilio_wav(),
                    synthesizer: Synthesizer {
                        audio_format: "wav".to_string(),
                        provider: "deepgram".to_string(),
                        stream: true,
                        provider_config: VoiceConfig {
                            voice: "Arcas".to_string(),
                            model: "aura-arcas-en".to_string(),
                        },
                        buffer_size: 100.0,
                    },
                    transcriber: Transcriber {
                        provider: "deepgram".to_string(),
                        language: "en".to_string(),
                        stream: true,
                        encoding: "linear16".to_string(),
                        sampling_rate: None,
                    },
                },
                task_config: TaskConfig {
                    hangup_after_silence: 30.0,
                    check_if_user_online: None,
                    trigger_user_online_message_after: None,
                    optimize_latency: None,
                },
            }],
        },
        agent_prompts: AgentPrompts {
            task_1: TaskPrompt {
                system_prompt: "You are Batman, a superhero who fights crime in Gotham City. \
                                You are known for your intelligence, detective skills, and \
                                combat abilities. Your mission is to assist the user in any \
                                way possible, ideally fighting crime."
                    .to_string(),
            },
        },
    }
}
