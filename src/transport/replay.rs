//! Replay transport serving canned command outputs.

use indexmap::IndexMap;
use log::debug;

use super::{CommandResult, ResponseFormat, Transport};
use crate::error::{Result, TransportError};

/// A [`Transport`] backed by recorded command→output pairs.
///
/// Enable commands are answered from the recorded session; an unknown
/// command fails the same way a rejected command would on a live device.
/// Config commands always succeed with empty output and are appended to a
/// history that tests can assert against.
#[derive(Debug, Default)]
pub struct ReplayTransport {
    outputs: IndexMap<String, String>,
    config_history: Vec<String>,
}

impl ReplayTransport {
    /// Create an empty replay transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an output for a command.
    pub fn with_output(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), output.into());
        self
    }

    /// Load a recorded session from a JSON object of command→output pairs.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let outputs: IndexMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            outputs,
            config_history: Vec::new(),
        })
    }

    /// Config commands sent through this transport, in order.
    pub fn config_history(&self) -> &[String] {
        &self.config_history
    }

    fn lookup(&self, command: &str) -> Result<String> {
        self.outputs.get(command).cloned().ok_or_else(|| {
            TransportError::CommandFailed {
                command: command.to_string(),
                message: "command not present in replay session".to_string(),
            }
            .into()
        })
    }
}

impl Transport for ReplayTransport {
    async fn enable(
        &mut self,
        commands: &[&str],
        _format: ResponseFormat,
    ) -> Result<Vec<CommandResult>> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            debug!("replaying '{command}'");
            let output = self.lookup(command)?;
            results.push(CommandResult::new(*command, output));
        }
        Ok(results)
    }

    async fn config(&mut self, commands: &[&str]) -> Result<Vec<CommandResult>> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            self.config_history.push(command.to_string());
            results.push(CommandResult::new(*command, ""));
        }
        Ok(results)
    }
}
