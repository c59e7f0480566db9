// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Error handling module.
//!
//! ```text
//!              VoxError (~24 bytes)
//!                     |
//!        +------+-----+------+------+
//!        |      |     |      |      |
//!        v      v     v      v      v
//!      Bail   Net    Cfg   EnvFile Io/Other
//!             Box    Box    Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Network  Reqwest, RequestFailed, InvalidUrl
//!   Config   MissingKey, ReadError
//!   EnvFile  ReadError, WriteError, ParseError
//!
//! All variants boxed => VoxError fits in 24 bytes.
//! ```

use thiserror::Error;


/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VoxError`].
pub type VoxResult<T> = std::result::Result<T, VoxError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum VoxError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Environment record error.
    #[error("env file error: {0}")]
    EnvFile(#[from] Box<EnvFileError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`VoxError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> VoxError {
    VoxError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VoxError {
                fn from(err: $error) -> Self {
                    VoxError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    EnvFileError => EnvFile,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Request could not be delivered.
    #[error("request failed: {url} - {message}")]
    RequestFailed { url: String, message: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' - set it in the environment or the env file")]
    MissingKey { key: String },

    /// Failed to read a configuration source.
    #[error("failed to read config source '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Environment Record Errors ---

/// Errors while reading or rewriting the environment record file.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// Failed to read the record.
    #[error("failed to read env file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the record back to disk.
    #[error("failed to write env file '{path}': {message}")]
    WriteError { path: String, message: String },
}
