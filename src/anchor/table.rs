//! The anchor table: one record per addressable node.
//!
//! The table is built exactly once per conversion by the numbering pass and
//! is read-only afterwards. The split into [`AnchorTableBuilder`] (write
//! side) and [`AnchorTable`] (frozen lookup side) makes the build-then-
//! resolve ordering a type-level guarantee: the resolver only accepts a
//! finished table.

use std::collections::HashMap;

/// Numbering metadata for one addressable node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Anchor {
    /// Text rendered where the node itself appears (e.g. a table caption).
    /// Bibliographic entries carry no label of their own.
    pub label: Option<String>,
    /// Text rendered at a point of reference to the node (e.g. "Table 3").
    pub xref: String,
    /// Structural nesting depth (1 = top-level clause or annex). Only set
    /// by the hierarchical numbering passes.
    pub level: Option<u8>,
}

impl Anchor {
    /// Anchor with distinct label and xref text.
    pub fn new(label: impl Into<String>, xref: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            xref: xref.into(),
            level: None,
        }
    }

    /// Anchor for a floating asset, whose caption label doubles as its
    /// xref text.
    pub fn asset(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            xref: label.clone(),
            label: Some(label),
            level: None,
        }
    }

    /// Anchor for a bibliographic entry: citation text only.
    pub fn citation(xref: impl Into<String>) -> Self {
        Self {
            label: None,
            xref: xref.into(),
            level: None,
        }
    }

    /// Attach a nesting level.
    pub fn at_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }
}

/// Write side of the anchor table, used only by the numbering pass.
///
/// Insert-only. Each id is written at most once under correct traversal
/// order; duplicate document ids are a caller contract violation and are
/// last-write-wins here.
#[derive(Debug, Default)]
pub struct AnchorTableBuilder {
    entries: HashMap<String, Anchor>,
}

impl AnchorTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the anchor for a node id.
    pub fn insert(&mut self, id: impl Into<String>, anchor: Anchor) {
        self.entries.insert(id.into(), anchor);
    }

    /// Look up the xref text already recorded for an id.
    ///
    /// The numbering pass needs this for records derived from earlier ones
    /// (term notes reuse their term's xref).
    pub fn xref(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|a| a.xref.as_str())
    }

    /// Freeze the table. No writes are possible afterwards.
    pub fn finish(self) -> AnchorTable {
        AnchorTable {
            entries: self.entries,
        }
    }
}

/// Frozen anchor lookup table, keyed by node id.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnchorTable {
    entries: HashMap<String, Anchor>,
}

impl AnchorTable {
    /// Get the anchor record for a node id.
    pub fn get(&self, id: &str) -> Option<&Anchor> {
        self.entries.get(id)
    }

    /// Get the xref text for a node id.
    pub fn xref(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|a| a.xref.as_str())
    }

    /// Check whether an id has an anchor.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of anchored nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(id, anchor)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Anchor)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_query() {
        let mut builder = AnchorTableBuilder::new();
        builder.insert("c1", Anchor::new("1", "Clause 1").at_level(1));
        builder.insert("t1", Anchor::asset("Table 1"));
        builder.insert("b1", Anchor::citation("ISO 9001: 2015"));

        assert_eq!(builder.xref("c1"), Some("Clause 1"));

        let table = builder.finish();
        assert_eq!(table.len(), 3);
        assert!(table.contains("t1"));
        assert_eq!(table.xref("b1"), Some("ISO 9001: 2015"));
        assert_eq!(table.xref("nope"), None);

        let c1 = table.get("c1").unwrap();
        assert_eq!(c1.label.as_deref(), Some("1"));
        assert_eq!(c1.level, Some(1));

        let t1 = table.get("t1").unwrap();
        assert_eq!(t1.label.as_deref(), Some("Table 1"));
        assert_eq!(t1.xref, "Table 1");
        assert_eq!(t1.level, None);

        assert!(table.get("b1").unwrap().label.is_none());
    }
}
