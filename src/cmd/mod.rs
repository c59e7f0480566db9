// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Command handlers.
//!
//! ```text
//! provision: settings -> pre-flight host check -> POST /agent
//!            -> 200 + agent_id -> ASSISTANT_ID into env record
//! call:      settings -> masked snapshot -> POST <bridge>/call
//!            -> log status/headers/body, echo to console
//! ```

pub mod call;
pub mod provision;
