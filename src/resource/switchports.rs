//! Layer-2 switchport resource module.
//!
//! Operates on the switchport statements inside an `interface` stanza:
//!
//! ```text
//! interface Ethernet1
//!    switchport mode trunk
//!    switchport trunk allowed vlan 10,20-30
//! ```
//!
//! An interface carrying `no switchport` is a routed port and is reported
//! as absent, the same as an unconfigured interface.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use super::capture;
use crate::error::Result;
use crate::node::Node;
use crate::transport::Transport;

// Extraction schema, one pattern per attribute.
static MODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+switchport mode (\S+)$").unwrap());
static ACCESS_VLAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+switchport access vlan (\d+)$").unwrap());
static TRUNK_ALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+switchport trunk allowed vlan (\S+)$").unwrap());
static ROUTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+no switchport$").unwrap());

/// Forwarding mode of a switchport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwitchportMode {
    #[default]
    Access,
    Trunk,
}

impl SwitchportMode {
    fn from_cli(value: &str) -> Option<Self> {
        match value {
            "access" => Some(Self::Access),
            "trunk" => Some(Self::Trunk),
            _ => None,
        }
    }

    fn as_cli(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Trunk => "trunk",
        }
    }
}

/// A layer-2 switchport as configured on the device.
///
/// Defaults mirror the device's: statements absent from the stanza mean
/// access mode on VLAN 1 with all VLANs allowed when trunking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switchport {
    pub name: String,
    pub mode: SwitchportMode,
    pub access_vlan: u16,
    /// Raw allowed-VLAN range text ("10,20-30"), if restricted.
    pub trunk_allowed_vlans: Option<String>,
}

impl Switchport {
    fn parse_block(name: &str, block: &str) -> Self {
        let mode = match capture(&MODE_RE, block) {
            Some(value) => SwitchportMode::from_cli(value).unwrap_or_else(|| {
                warn!("{name}: unrecognized switchport mode '{value}', assuming access");
                SwitchportMode::Access
            }),
            None => SwitchportMode::Access,
        };
        let access_vlan = capture(&ACCESS_VLAN_RE, block)
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self {
            name: name.to_string(),
            mode,
            access_vlan,
            trunk_allowed_vlans: capture(&TRUNK_ALLOWED_RE, block).map(str::to_string),
        }
    }
}

/// Switchport operations on a node.
pub struct Switchports<'a, T: Transport> {
    node: &'a mut Node<T>,
}

impl<'a, T: Transport> Switchports<'a, T> {
    pub fn new(node: &'a mut Node<T>) -> Self {
        Self { node }
    }

    /// Get the switchport configuration of an interface.
    ///
    /// `Ok(None)` when the interface is not configured or is a routed port.
    pub async fn get(&mut self, name: &str) -> Result<Option<Switchport>> {
        let block = self
            .node
            .get_block(&format!("interface {}$", regex::escape(name)))
            .await?;
        Ok(block
            .filter(|block| !ROUTED_RE.is_match(block))
            .map(|block| Switchport::parse_block(name, &block)))
    }

    /// Set the forwarding mode.
    pub async fn set_mode(&mut self, name: &str, mode: SwitchportMode) -> Result<()> {
        self.node
            .config(&[
                &format!("interface {name}"),
                &format!("switchport mode {}", mode.as_cli()),
            ])
            .await?;
        Ok(())
    }

    /// Set the access VLAN.
    pub async fn set_access_vlan(&mut self, name: &str, vlan_id: u16) -> Result<()> {
        self.node
            .config(&[
                &format!("interface {name}"),
                &format!("switchport access vlan {vlan_id}"),
            ])
            .await?;
        Ok(())
    }

    /// Restrict the VLANs allowed on a trunk ("10,20-30" range syntax).
    pub async fn set_trunk_allowed_vlans(&mut self, name: &str, vlans: &str) -> Result<()> {
        self.node
            .config(&[
                &format!("interface {name}"),
                &format!("switchport trunk allowed vlan {vlans}"),
            ])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReplayTransport;

    const RUNNING: &str = "\
interface Ethernet1
   switchport access vlan 100
interface Ethernet2
   switchport mode trunk
   switchport trunk allowed vlan 10,20-30
interface Ethernet3
   no switchport
   ip address 10.0.0.1/31
";

    fn node() -> Node<ReplayTransport> {
        Node::new(ReplayTransport::new().with_output("show running-config", RUNNING))
    }

    #[tokio::test]
    async fn test_get_access_port() {
        let mut node = node();
        let port = Switchports::new(&mut node)
            .get("Ethernet1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(port.mode, SwitchportMode::Access);
        assert_eq!(port.access_vlan, 100);
        assert_eq!(port.trunk_allowed_vlans, None);
    }

    #[tokio::test]
    async fn test_get_trunk_port() {
        let mut node = node();
        let port = Switchports::new(&mut node)
            .get("Ethernet2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(port.mode, SwitchportMode::Trunk);
        assert_eq!(port.access_vlan, 1);
        assert_eq!(port.trunk_allowed_vlans.as_deref(), Some("10,20-30"));
    }

    #[tokio::test]
    async fn test_routed_port_is_none() {
        let mut node = node();
        assert!(
            Switchports::new(&mut node)
                .get("Ethernet3")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_absent_interface_is_none() {
        let mut node = node();
        assert!(
            Switchports::new(&mut node)
                .get("Ethernet99")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_mutators_compose_config_commands() {
        let mut node = node();
        let mut ports = Switchports::new(&mut node);
        ports
            .set_mode("Ethernet1", SwitchportMode::Trunk)
            .await
            .unwrap();
        ports.set_access_vlan("Ethernet1", 42).await.unwrap();
        ports
            .set_trunk_allowed_vlans("Ethernet1", "10-20")
            .await
            .unwrap();

        assert_eq!(
            node.transport().config_history(),
            [
                "interface Ethernet1",
                "switchport mode trunk",
                "interface Ethernet1",
                "switchport access vlan 42",
                "interface Ethernet1",
                "switchport trunk allowed vlan 10-20",
            ]
        );
    }
}
