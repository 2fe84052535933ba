//! Indentation-based parsing of device running-configurations.
//!
//! Network device shells emit configuration as flat text where structure is
//! expressed only through indentation: a stanza header sits at column zero
//! ("interface Ethernet1", "vlan 10") and its sub-statements are indented by
//! a fixed block width. This module recovers that structure without a
//! grammar and exposes block extraction and line search over it.

mod line;
mod tree;

pub use line::ConfigLine;
pub use tree::{BLOCK_WIDTH, ConfigTree};
