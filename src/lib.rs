// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             provision / call
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  env record + process env |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              agent       envfile    net
//!            documents    KEY=VALUE  reqwest
//!            + profiles    atomic    POST JSON
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod agent;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod envfile;
pub mod error;
pub mod logging;
pub mod net;
