//! Typed resource modules over running-config stanzas.
//!
//! Each resource borrows a [`Node`](crate::node::Node) for the duration of
//! its use, mirroring how the device itself scopes configuration: one stanza
//! family at a time. Getters slice the relevant stanza out of the
//! running-config with `get_block` and extract attributes with a declared
//! schema — one statically compiled pattern per field — rather than ad-hoc
//! pattern literals inline. Mutators compose CLI command strings and send
//! them through `Node::config`, which invalidates the cached view.

mod interfaces;
mod switchports;
mod vlans;

pub use interfaces::{Interface, Interfaces};
pub use switchports::{Switchport, SwitchportMode, Switchports};
pub use vlans::{Vlan, VlanState, Vlans};

use regex::Regex;

/// Extract the first capture group of `re` from a stanza block.
pub(crate) fn capture<'a>(re: &Regex, block: &'a str) -> Option<&'a str> {
    re.captures(block).and_then(|c| c.get(1)).map(|m| m.as_str())
}
