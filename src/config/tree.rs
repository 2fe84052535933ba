//! Configuration tree built from indentation offsets.
//!
//! The builder walks the document once, keeping only the most recently seen
//! line at each exact depth. A line indented by `block_width` more than some
//! earlier line is attached to the last line seen one block shallower. This
//! is deliberately not a full indentation stack: device configs nest exactly
//! two levels (stanza header plus sub-statements), and anything the
//! last-seen rule cannot place is a malformed dump, not a deeper tree.

use std::collections::HashMap;

use log::debug;
use regex::Regex;

use super::line::ConfigLine;
use crate::error::ConfigError;

/// Standard sub-statement indent width emitted by device shells.
pub const BLOCK_WIDTH: usize = 3;

/// Terminator token emitted after each extracted stanza.
const BLOCK_END: &str = "!";

/// An immutable view of a running-configuration as (line, parent)
/// associations.
///
/// Built exactly once from the supplied text and never mutated afterward;
/// if the device configuration changes, re-fetch the text and build a new
/// tree. All queries are pure reads, so a tree can be shared freely.
#[derive(Debug, Clone)]
pub struct ConfigTree {
    text: String,
    lines: Vec<ConfigLine>,
    parents: Vec<Option<usize>>,
    block_width: usize,
}

impl ConfigTree {
    /// Parse configuration text using the standard block width of 3.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Self::parse_with_width(text, BLOCK_WIDTH)
    }

    /// Parse configuration text with a non-standard sub-statement indent.
    ///
    /// The document is trimmed at both ends, then split into lines. Each
    /// line is paired with its structural parent: `None` for top-level
    /// lines, otherwise the most recently seen line at `depth - block_width`.
    /// A depth with no recorded ancestor fails with
    /// [`ConfigError::MalformedIndentation`] — a guessed parent would
    /// corrupt every downstream block extraction.
    pub fn parse_with_width(text: &str, block_width: usize) -> Result<Self, ConfigError> {
        let trimmed = text.trim();

        let mut lines = Vec::new();
        let mut parents = Vec::new();
        let mut last_seen_at_depth: HashMap<usize, usize> = HashMap::new();

        if !trimmed.is_empty() {
            for (index, raw) in trimmed.lines().enumerate() {
                let line = ConfigLine::new(index, raw);
                let depth = line.depth();

                let parent = if depth == 0 {
                    last_seen_at_depth.insert(0, index);
                    None
                } else {
                    last_seen_at_depth.insert(depth, index);
                    let parent = depth
                        .checked_sub(block_width)
                        .and_then(|d| last_seen_at_depth.get(&d).copied());
                    match parent {
                        Some(parent) => Some(parent),
                        None => {
                            return Err(ConfigError::MalformedIndentation {
                                line: index,
                                depth,
                                text: raw.to_string(),
                            });
                        }
                    }
                };

                lines.push(line);
                parents.push(parent);
            }
        }

        debug!(
            "parsed {} config lines (block width {})",
            lines.len(),
            block_width
        );

        Ok(Self {
            text: trimmed.to_string(),
            lines,
            parents,
            block_width,
        })
    }

    /// The original document text (trimmed at both ends).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tracked lines, in original order.
    pub fn lines(&self) -> impl Iterator<Item = &ConfigLine> {
        self.lines.iter()
    }

    /// The structural parent of the line at `index`, if any.
    pub fn parent(&self, index: usize) -> Option<&ConfigLine> {
        self.parents.get(index).copied().flatten().map(|p| &self.lines[p])
    }

    /// The sub-statement indent width this tree was parsed with.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Extract every stanza whose header matches `line_spec`.
    ///
    /// `line_spec` is matched anchored at the start of each line's raw text
    /// (case-sensitive, single line). For each matching line, in tree order,
    /// the output contains the line itself, every line whose recorded parent
    /// is that line, and a `!` terminator. Only direct children are
    /// included — grandchildren belong to their own parent's stanza.
    ///
    /// Returns `Ok(None)` when no header matches; an absent stanza is a
    /// normal outcome ("this VLAN is not configured"), not an error.
    pub fn get_block(&self, line_spec: &str) -> Result<Option<String>, ConfigError> {
        let regex = compile_line_spec(line_spec)?;

        let mut out: Vec<&str> = Vec::new();
        for line in &self.lines {
            if !regex.is_match(line.text()) {
                continue;
            }
            out.push(line.text());
            for (child, parent) in self.lines.iter().zip(&self.parents) {
                if *parent == Some(line.index()) {
                    out.push(child.text());
                }
            }
            out.push(BLOCK_END);
        }

        if out.is_empty() {
            Ok(None)
        } else {
            Ok(Some(out.join("\n")))
        }
    }

    /// Find the first match of `pattern` in the whole document text.
    ///
    /// Unlike [`get_block`](Self::get_block) this scans the raw text, so a
    /// pattern may match across line boundaries.
    pub fn find(&self, pattern: &str) -> Result<Option<&str>, ConfigError> {
        let regex = Regex::new(pattern)?;
        Ok(regex.find(&self.text).map(|m| m.as_str()))
    }

    /// Collect the text of every line matching `pattern`, at any depth.
    ///
    /// A flat filter over all tracked lines in tree order, ignoring the
    /// parent/child structure entirely. Empty when nothing matches.
    pub fn find_all(&self, pattern: &str) -> Result<Vec<&str>, ConfigError> {
        let regex = Regex::new(pattern)?;
        Ok(self
            .lines
            .iter()
            .filter(|line| regex.is_match(line.text()))
            .map(|line| line.text())
            .collect())
    }
}

/// Anchor a line spec at the start of the line.
///
/// Specs are matched against raw line text, so an unindented header pattern
/// can never match an indented sub-statement.
fn compile_line_spec(line_spec: &str) -> Result<Regex, ConfigError> {
    let anchored = if line_spec.starts_with('^') {
        line_spec.to_string()
    } else {
        format!("^{line_spec}")
    };
    Ok(Regex::new(&anchored)?)
}
