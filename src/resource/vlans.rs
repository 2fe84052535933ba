//! VLAN resource module.
//!
//! Operates on `vlan <id>` stanzas:
//!
//! ```text
//! vlan 10
//!    name accounting
//!    state active
//!    trunk group mlag
//! ```

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use super::capture;
use crate::error::Result;
use crate::node::Node;
use crate::transport::Transport;

// Extraction schema, one pattern per attribute.
static VLAN_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^vlan (\d+)$").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s+name (\S+)$").unwrap());
static STATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s+state (\S+)$").unwrap());
static TRUNK_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s+trunk group (\S+)$").unwrap());

/// Administrative state of a VLAN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VlanState {
    #[default]
    Active,
    Suspend,
}

impl VlanState {
    fn from_cli(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "suspend" => Some(Self::Suspend),
            _ => None,
        }
    }

    fn as_cli(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspend => "suspend",
        }
    }
}

/// A VLAN as configured on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vlan {
    pub vlan_id: u16,
    /// Assigned name, if one was configured.
    pub name: Option<String>,
    pub state: VlanState,
    /// Trunk groups this VLAN belongs to.
    pub trunk_groups: Vec<String>,
}

impl Vlan {
    fn parse_block(vlan_id: u16, block: &str) -> Self {
        let name = capture(&NAME_RE, block).map(str::to_string);
        let state = match capture(&STATE_RE, block) {
            Some(value) => VlanState::from_cli(value).unwrap_or_else(|| {
                warn!("vlan {vlan_id}: unrecognized state '{value}', assuming active");
                VlanState::Active
            }),
            None => VlanState::Active,
        };
        let trunk_groups = TRUNK_GROUP_RE
            .captures_iter(block)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Self {
            vlan_id,
            name,
            state,
            trunk_groups,
        }
    }
}

/// VLAN operations on a node.
pub struct Vlans<'a, T: Transport> {
    node: &'a mut Node<T>,
}

impl<'a, T: Transport> Vlans<'a, T> {
    pub fn new(node: &'a mut Node<T>) -> Self {
        Self { node }
    }

    /// Get a VLAN by id. `Ok(None)` when the VLAN is not configured.
    pub async fn get(&mut self, vlan_id: u16) -> Result<Option<Vlan>> {
        let block = self.node.get_block(&format!(r"vlan {vlan_id}$")).await?;
        Ok(block.map(|block| Vlan::parse_block(vlan_id, &block)))
    }

    /// Get every configured VLAN, in running-config order.
    pub async fn get_all(&mut self) -> Result<Vec<Vlan>> {
        let ids: Vec<u16> = {
            let tree = self.node.running_config().await?;
            tree.lines()
                .filter_map(|line| capture(&VLAN_ID_RE, line.text()))
                .filter_map(|id| id.parse().ok())
                .collect()
        };

        let mut vlans = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(vlan) = self.get(id).await? {
                vlans.push(vlan);
            }
        }
        Ok(vlans)
    }

    /// Create a VLAN (no-op on the device if it already exists).
    pub async fn create(&mut self, vlan_id: u16) -> Result<()> {
        self.node.config(&[&format!("vlan {vlan_id}")]).await?;
        Ok(())
    }

    /// Remove a VLAN.
    pub async fn delete(&mut self, vlan_id: u16) -> Result<()> {
        self.node.config(&[&format!("no vlan {vlan_id}")]).await?;
        Ok(())
    }

    /// Set the VLAN name.
    pub async fn set_name(&mut self, vlan_id: u16, name: &str) -> Result<()> {
        self.node
            .config(&[&format!("vlan {vlan_id}"), &format!("name {name}")])
            .await?;
        Ok(())
    }

    /// Set the VLAN administrative state.
    pub async fn set_state(&mut self, vlan_id: u16, state: VlanState) -> Result<()> {
        self.node
            .config(&[&format!("vlan {vlan_id}"), &format!("state {}", state.as_cli())])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReplayTransport;

    const RUNNING: &str = "\
vlan 1
vlan 10
   name test_vlan
   state active
   trunk group mlag
   trunk group backup
vlan 20
   name other
   state suspend
";

    fn node() -> Node<ReplayTransport> {
        Node::new(ReplayTransport::new().with_output("show running-config", RUNNING))
    }

    #[tokio::test]
    async fn test_get_parses_attributes() {
        let mut node = node();
        let vlan = Vlans::new(&mut node).get(10).await.unwrap().unwrap();
        assert_eq!(vlan.vlan_id, 10);
        assert_eq!(vlan.name.as_deref(), Some("test_vlan"));
        assert_eq!(vlan.state, VlanState::Active);
        assert_eq!(vlan.trunk_groups, ["mlag", "backup"]);
    }

    #[tokio::test]
    async fn test_get_defaults_for_bare_vlan() {
        let mut node = node();
        let vlan = Vlans::new(&mut node).get(1).await.unwrap().unwrap();
        assert_eq!(vlan.name, None);
        assert_eq!(vlan.state, VlanState::Active);
        assert!(vlan.trunk_groups.is_empty());
    }

    #[tokio::test]
    async fn test_get_absent_vlan_is_none() {
        let mut node = node();
        assert!(Vlans::new(&mut node).get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_does_not_prefix_match_ids() {
        // "vlan 1" must not pick up the "vlan 10" stanza.
        let mut node = node();
        let vlan = Vlans::new(&mut node).get(1).await.unwrap().unwrap();
        assert_eq!(vlan.name, None);
    }

    #[tokio::test]
    async fn test_get_all() {
        let mut node = node();
        let vlans = Vlans::new(&mut node).get_all().await.unwrap();
        let ids: Vec<u16> = vlans.iter().map(|v| v.vlan_id).collect();
        assert_eq!(ids, [1, 10, 20]);
        assert_eq!(vlans[2].state, VlanState::Suspend);
    }

    #[tokio::test]
    async fn test_mutators_compose_config_commands() {
        let mut node = node();
        let mut vlans = Vlans::new(&mut node);
        vlans.create(30).await.unwrap();
        vlans.set_name(30, "lab").await.unwrap();
        vlans.set_state(30, VlanState::Suspend).await.unwrap();
        vlans.delete(30).await.unwrap();

        assert_eq!(
            node.transport().config_history(),
            [
                "vlan 30",
                "vlan 30",
                "name lab",
                "vlan 30",
                "state suspend",
                "no vlan 30",
            ]
        );
    }
}
