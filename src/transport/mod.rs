//! Command-execution transport layer.
//!
//! The library never opens a connection itself: a [`Transport`] is injected
//! into the [`Node`](crate::node::Node) by its owner. Concrete transports
//! (eAPI over HTTP, SSH scraping) live outside this crate; the
//! [`ReplayTransport`] ships here for tests and offline parsing of recorded
//! sessions.

mod replay;

pub use replay::ReplayTransport;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Encoding requested for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Raw CLI text, as a human would see it.
    Text,
    /// Structured output serialized as JSON.
    Json,
}

/// Result of executing a single command, in the order it was sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// The command that produced this result.
    pub command: String,

    /// The command output.
    pub output: String,
}

impl CommandResult {
    /// Create a new command result.
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }
}

/// Trait for device command transports.
///
/// Implementations execute commands against a device and return one
/// [`CommandResult`] per command, in order. A rejected command surfaces as
/// [`TransportError::CommandFailed`](crate::error::TransportError); partial
/// result sets as `MissingResult`.
pub trait Transport: Send {
    /// Execute commands in enable (read) mode.
    fn enable(
        &mut self,
        commands: &[&str],
        format: ResponseFormat,
    ) -> impl Future<Output = Result<Vec<CommandResult>>> + Send;

    /// Execute commands in configuration mode.
    fn config(&mut self, commands: &[&str]) -> impl Future<Output = Result<Vec<CommandResult>>> + Send;
}
