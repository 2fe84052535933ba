//! Error types for runcfg.

use thiserror::Error;

/// Main error type for runcfg operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration parsing and query errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Configuration parsing and query errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A non-root line has no recorded ancestor one block width shallower.
    ///
    /// The device emitted an indentation the standard convention never
    /// produces (e.g. a line jumping straight to depth 6 with no line ever
    /// seen at depth 3). Guessing a parent here would corrupt every
    /// downstream block extraction, so parsing stops instead.
    #[error("Malformed indentation at line {line}: depth {depth} has no parent stanza: '{text}'")]
    MalformedIndentation {
        line: usize,
        depth: usize,
        text: String,
    },

    /// Invalid regex pattern supplied by a caller
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Transport layer errors (command execution).
#[derive(Error, Debug)]
pub enum TransportError {
    /// A command was rejected by the device
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// The transport returned fewer results than commands sent
    #[error("No result returned for command '{command}'")]
    MissingResult { command: String },
}

/// Result type alias using runcfg's Error.
pub type Result<T> = std::result::Result<T, Error>;
