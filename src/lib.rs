//! # Runcfg
//!
//! Running-config parsing and typed resource abstraction for network device
//! automation.
//!
//! Runcfg recovers the hierarchical structure of a device's textual
//! running-configuration from indentation alone — no grammar — and builds a
//! resource layer (vlans, interfaces, switchports) on top of the resulting
//! block extraction primitives.
//!
//! ## Features
//!
//! - Indentation-based config tree with stanza/block extraction
//! - Whole-text and per-line regex search over the parsed config
//! - Transport-agnostic: any `enable`/`config` command executor plugs in
//! - Replay transport for tests and offline parsing of recorded sessions
//! - Typed resource modules with declared extraction schemas
//!
//! ## Quick Start
//!
//! ```rust
//! use runcfg::{Node, ReplayTransport, Vlans};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), runcfg::Error> {
//!     let transport = ReplayTransport::new()
//!         .with_output("show running-config", "vlan 10\n   name lab\n");
//!     let mut node = Node::new(transport);
//!
//!     let vlan = Vlans::new(&mut node).get(10).await?;
//!     assert_eq!(vlan.unwrap().name.as_deref(), Some("lab"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod resource;
pub mod transport;

// Re-export main types for convenience
pub use config::{BLOCK_WIDTH, ConfigLine, ConfigTree};
pub use error::{ConfigError, Error, Result, TransportError};
pub use node::Node;
pub use resource::{
    Interface, Interfaces, Switchport, SwitchportMode, Switchports, Vlan, VlanState, Vlans,
};
pub use transport::{CommandResult, ReplayTransport, ResponseFormat, Transport};
