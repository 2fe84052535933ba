//! Physical and logical interface resource module.
//!
//! Operates on `interface <name>` stanzas:
//!
//! ```text
//! interface Ethernet1
//!    description uplink to core
//!    shutdown
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::capture;
use crate::error::Result;
use crate::node::Node;
use crate::transport::Transport;

// Extraction schema, one pattern per attribute.
static INTERFACE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^interface (\S+)$").unwrap());
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+description (.+)$").unwrap());
static SHUTDOWN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s+shutdown$").unwrap());

/// An interface as configured on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    /// Configured description, if any.
    pub description: Option<String>,
    /// Whether the interface is administratively disabled.
    pub shutdown: bool,
}

impl Interface {
    fn parse_block(name: &str, block: &str) -> Self {
        Self {
            name: name.to_string(),
            description: capture(&DESCRIPTION_RE, block).map(str::to_string),
            shutdown: SHUTDOWN_RE.is_match(block),
        }
    }
}

/// Interface operations on a node.
pub struct Interfaces<'a, T: Transport> {
    node: &'a mut Node<T>,
}

impl<'a, T: Transport> Interfaces<'a, T> {
    pub fn new(node: &'a mut Node<T>) -> Self {
        Self { node }
    }

    /// Get an interface by name. `Ok(None)` when it is not configured.
    pub async fn get(&mut self, name: &str) -> Result<Option<Interface>> {
        let block = self
            .node
            .get_block(&format!("interface {}$", regex::escape(name)))
            .await?;
        Ok(block.map(|block| Interface::parse_block(name, &block)))
    }

    /// Get every configured interface, in running-config order.
    pub async fn get_all(&mut self) -> Result<Vec<Interface>> {
        let names: Vec<String> = {
            let tree = self.node.running_config().await?;
            tree.lines()
                .filter_map(|line| capture(&INTERFACE_NAME_RE, line.text()))
                .map(str::to_string)
                .collect()
        };

        let mut interfaces = Vec::with_capacity(names.len());
        for name in names {
            if let Some(interface) = self.get(&name).await? {
                interfaces.push(interface);
            }
        }
        Ok(interfaces)
    }

    /// Set or clear the interface description.
    pub async fn set_description(&mut self, name: &str, description: Option<&str>) -> Result<()> {
        let command = match description {
            Some(text) => format!("description {text}"),
            None => "no description".to_string(),
        };
        self.node
            .config(&[&format!("interface {name}"), &command])
            .await?;
        Ok(())
    }

    /// Administratively enable or disable the interface.
    pub async fn set_shutdown(&mut self, name: &str, shutdown: bool) -> Result<()> {
        let command = if shutdown { "shutdown" } else { "no shutdown" };
        self.node
            .config(&[&format!("interface {name}"), command])
            .await?;
        Ok(())
    }
}
