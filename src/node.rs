//! Device node: a transport plus a cached view of its configuration.
//!
//! A [`Node`] owns its [`Transport`] by value — the connection is injected
//! at construction, never looked up from process-wide state. The
//! running-config is fetched lazily, parsed once into a [`ConfigTree`], and
//! served from cache until something invalidates it: any `config(...)` call,
//! or an explicit [`refresh`](Node::refresh).

use log::debug;

use crate::config::ConfigTree;
use crate::error::{Result, TransportError};
use crate::transport::{CommandResult, ResponseFormat, Transport};

/// Command used to fetch the live configuration.
const RUNNING_CONFIG_CMD: &str = "show running-config";

/// Command used to fetch the saved configuration.
const STARTUP_CONFIG_CMD: &str = "show startup-config";

/// A single network device reachable through a [`Transport`].
#[derive(Debug)]
pub struct Node<T: Transport> {
    transport: T,
    running: Option<ConfigTree>,
}

impl<T: Transport> Node<T> {
    /// Create a node over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            running: None,
        }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The parsed running-configuration, fetched and cached on first use.
    pub async fn running_config(&mut self) -> Result<&ConfigTree> {
        let tree = match self.running.take() {
            Some(tree) => tree,
            None => {
                let text = self.fetch_text(RUNNING_CONFIG_CMD).await?;
                let tree = ConfigTree::parse(&text)?;
                debug!("cached running-config ({} lines)", tree.lines().count());
                tree
            }
        };
        Ok(self.running.insert(tree))
    }

    /// Fetch and parse the startup configuration. Never cached.
    pub async fn startup_config(&mut self) -> Result<ConfigTree> {
        let text = self.fetch_text(STARTUP_CONFIG_CMD).await?;
        Ok(ConfigTree::parse(&text)?)
    }

    /// Drop the cached running-config so the next read re-fetches.
    pub fn refresh(&mut self) {
        self.running = None;
    }

    /// Execute commands in enable mode.
    pub async fn enable(
        &mut self,
        commands: &[&str],
        format: ResponseFormat,
    ) -> Result<Vec<CommandResult>> {
        self.transport.enable(commands, format).await
    }

    /// Execute commands in configuration mode.
    ///
    /// On success the cached running-config is dropped: the device text has
    /// changed, so the next read re-fetches and re-parses.
    pub async fn config(&mut self, commands: &[&str]) -> Result<Vec<CommandResult>> {
        let results = self.transport.config(commands).await?;
        self.running = None;
        Ok(results)
    }

    /// Extract the stanzas matching `line_spec` from the running-config.
    ///
    /// See [`ConfigTree::get_block`]. `Ok(None)` means the stanza is not
    /// configured.
    pub async fn get_block(&mut self, line_spec: &str) -> Result<Option<String>> {
        let block = self.running_config().await?.get_block(line_spec)?;
        Ok(block)
    }

    /// First match of `pattern` anywhere in the running-config text.
    pub async fn find(&mut self, pattern: &str) -> Result<Option<String>> {
        let found = self.running_config().await?.find(pattern)?;
        Ok(found.map(str::to_string))
    }

    /// Every running-config line matching `pattern`, at any depth.
    pub async fn find_all(&mut self, pattern: &str) -> Result<Vec<String>> {
        let found = self.running_config().await?.find_all(pattern)?;
        Ok(found.into_iter().map(str::to_string).collect())
    }

    async fn fetch_text(&mut self, command: &str) -> Result<String> {
        debug!("fetching '{command}'");
        let mut results = self.transport.enable(&[command], ResponseFormat::Text).await?;
        if results.is_empty() {
            return Err(TransportError::MissingResult {
                command: command.to_string(),
            }
            .into());
        }
        Ok(results.remove(0).output)
    }
}
