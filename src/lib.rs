//! Anchor numbering and cross-reference resolution for standards documents.
//!
//! Takes a parsed document tree and (1) numbers every addressable node —
//! clauses hierarchically, annexes by letter, tables/figures/formulas
//! sequentially — then (2) rewrites every in-document reference into a
//! resolved citation carrying the computed display text, splitting locality
//! qualifiers ("Clause 3, Table 2") out of reference text into structured
//! children along the way.
//!
//! # Quick Start
//!
//! ```rust
//! use normref::{Attr, DocTree, NodeKind, crossreference};
//!
//! let mut tree = DocTree::new();
//!
//! // A minimal body: a sections container holding the scope clause.
//! let sections = tree.create_element(NodeKind::Sections);
//! tree.append(tree.root(), sections);
//! let scope = tree.create_element(NodeKind::Clause);
//! tree.set_attr(scope, Attr::Id, "scope");
//! let title = tree.create_element(NodeKind::Title);
//! let text = tree.create_text("Scope");
//! tree.append(title, text);
//! tree.append(scope, title);
//! tree.append(sections, scope);
//!
//! // A reference to the scope clause from elsewhere in the document.
//! let xref = tree.create_element(NodeKind::Xref);
//! tree.set_attr(xref, Attr::Target, "scope");
//! tree.append(sections, xref);
//!
//! let (anchors, warnings) = crossreference(&mut tree);
//! assert!(warnings.is_empty());
//! assert_eq!(anchors.xref("scope"), Some("Clause 1"));
//! assert_eq!(tree.kind(xref), Some(NodeKind::Eref));
//! assert_eq!(tree.attr(xref, Attr::Citeas), Some("Clause 1"));
//! ```
//!
//! The two stages are also available separately as [`assign_anchors`] and
//! [`resolve_references`] when the caller wants the anchor table without
//! mutating the tree, or wants to resolve several trees against one table.

pub mod anchor;
pub mod model;
pub mod resolve;

pub use anchor::{Anchor, AnchorTable, AnchorTableBuilder, assign_anchors, fallback_ref, format_ref};
pub use model::{Attr, DocTree, Node, NodeId, NodeKind};
pub use resolve::{Locality, LocalityKind, Warning, parse_localities, resolve_references};

/// Number the document and resolve its references, in one call.
///
/// Equivalent to [`assign_anchors`] followed by [`resolve_references`].
/// Returns the anchor table (callers render labels from it) and any
/// warnings raised during resolution.
pub fn crossreference(tree: &mut DocTree) -> (AnchorTable, Vec<Warning>) {
    let anchors = assign_anchors(tree);
    let warnings = resolve_references(tree, &anchors);
    (anchors, warnings)
}
