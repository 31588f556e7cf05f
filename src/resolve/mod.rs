//! Reference resolution.
//!
//! Runs after the anchor table is complete (the API only accepts a frozen
//! [`AnchorTable`], so a partially built table cannot reach this pass).
//! Every in-document reference is rewritten into a typed citation carrying
//! the resolved xref text, locality qualifiers embedded in reference text
//! are split into structured children, and a handful of structural
//! conventions are normalized (normative-references contents, stand-alone
//! reference markers, redundant italic title wrappers).
//!
//! Nothing here aborts. A reference whose target has no anchor keeps an
//! unset `Citeas` and surfaces as a [`Warning`]; the caller decides what
//! to do with those.

mod locality;

pub use locality::{Locality, LocalityKind, parse_localities};

use thiserror::Error;
use tracing::warn;

use crate::anchor::AnchorTable;
use crate::model::{Attr, DocTree, NodeId, NodeKind};

/// Non-fatal diagnostics accumulated during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// A reference names a document node that was never assigned an anchor.
    /// The citation is emitted with no display text.
    #[error("{target} is not a real reference")]
    UnresolvedReference { target: String },
}

/// Resolve every reference in the document against a completed anchor
/// table, mutating the tree in place.
///
/// Returns the warnings gathered along the way; an empty vector means
/// every internal reference resolved.
pub fn resolve_references(tree: &mut DocTree, anchors: &AnchorTable) -> Vec<Warning> {
    let mut resolver = Resolver {
        anchors,
        warnings: Vec::new(),
    };
    resolver.rewrite_xrefs(tree);
    resolver.rewrite_quote_sources(tree);
    resolver.rewrite_origins(tree);
    cleanup_normative_references(tree);
    float_refs_out_of_paragraphs(tree);
    collapse_iso_titles(tree);
    resolver.warnings
}

struct Resolver<'a> {
    anchors: &'a AnchorTable,
    warnings: Vec<Warning>,
}

impl Resolver<'_> {
    /// Rewrite cross-references into typed citations.
    ///
    /// Only references still carrying a `Target` attribute are candidates,
    /// which makes the pass idempotent: an already-resolved citation has
    /// no `Target` left. Targets that do not name a document node are
    /// external and merely lose their decorative `Type` attribute.
    fn rewrite_xrefs(&mut self, tree: &mut DocTree) {
        for xref in tree.descendants_of_kind(tree.root(), NodeKind::Xref) {
            let Some(target) = tree.attr(xref, Attr::Target).map(str::to_string) else {
                continue;
            };
            if tree.node_by_id(&target).is_some() {
                tree.set_kind(xref, NodeKind::Eref);
                self.retarget(tree, xref, &target);
            } else {
                tree.remove_attr(xref, Attr::Type);
            }
        }
    }

    /// Quote sources cite like cross-references but keep their kind.
    fn rewrite_quote_sources(&mut self, tree: &mut DocTree) {
        for source in tree.descendants_of_kind(tree.root(), NodeKind::QuoteSource) {
            let Some(target) = tree.attr(source, Attr::Target).map(str::to_string) else {
                continue;
            };
            self.retarget(tree, source, &target);
        }
    }

    /// Citation origins already carry their target in `Bibitemid`; they
    /// get a `Citeas`, and a bare section marker following the origin is
    /// pulled in as a locality child.
    fn rewrite_origins(&mut self, tree: &mut DocTree) {
        for origin in tree.descendants_of_kind(tree.root(), NodeKind::Origin) {
            if let Some(target) = tree.attr(origin, Attr::Bibitemid).map(str::to_string) {
                self.assign_citeas(tree, origin, &target);
            }

            let marker = tree
                .next_sibling(origin)
                .filter(|&n| tree.kind(n) == Some(NodeKind::SectionMarker));
            if let Some(marker) = marker {
                tree.detach(marker);
                tree.set_kind(marker, NodeKind::Locality);
                tree.set_attr(marker, Attr::Type, "section");
                tree.append(origin, marker);
            }
        }
    }

    /// Turn a reference node into a citation of `target`.
    fn retarget(&mut self, tree: &mut DocTree, node: NodeId, target: &str) {
        tree.set_attr(node, Attr::Bibitemid, target);
        self.assign_citeas(tree, node, target);
        tree.remove_attr(node, Attr::Target);
        if tree.first_child(node).is_some() {
            extract_localities(tree, node);
        }
    }

    fn assign_citeas(&mut self, tree: &mut DocTree, node: NodeId, target: &str) {
        match self.anchors.xref(target) {
            Some(xref) => tree.set_attr(node, Attr::Citeas, xref),
            None => {
                warn!(target, "reference target has no anchor");
                self.warnings.push(Warning::UnresolvedReference {
                    target: target.to_string(),
                });
            }
        }
    }
}

/// Split a citation's leading text into structured locality children.
///
/// The first child is consumed; each parsed qualifier becomes a `Locality`
/// element (with a nested `Reference` child when the qualifier carries
/// one), and the unmatched remainder is re-appended as plain text — even
/// when empty, so downstream passes always see the same child shape.
fn extract_localities(tree: &mut DocTree, node: NodeId) {
    let Some(first) = tree.first_child(node) else {
        return;
    };
    tree.detach(first);
    let text = tree.collect_text(first);

    let (localities, remainder) = parse_localities(&text);
    for locality in localities {
        let child = tree.create_element(NodeKind::Locality);
        tree.set_attr(child, Attr::Type, locality.kind.as_str());
        if let Some(reference) = locality.reference {
            let ref_node = tree.create_element(NodeKind::Reference);
            let ref_text = tree.create_text(reference);
            tree.append(ref_node, ref_text);
            tree.append(child, ref_node);
        }
        tree.append(node, child);
    }
    let remainder = tree.create_text(remainder);
    tree.append(node, remainder);
}

/// The normative references section holds nothing but its title and the
/// bibliographic entries once resolution is done.
fn cleanup_normative_references(tree: &mut DocTree) {
    let section = tree.descendants(tree.root()).find(|&n| {
        tree.kind(n) == Some(NodeKind::References)
            && tree.title_text(n).as_deref() == Some("Normative References")
    });
    let Some(section) = section else {
        return;
    };
    let extras: Vec<NodeId> = tree
        .element_children(section)
        .filter(|&c| {
            !matches!(
                tree.kind(c),
                Some(NodeKind::Title) | Some(NodeKind::BibItem)
            )
        })
        .collect();
    for child in extras {
        tree.detach(child);
    }
}

/// Stand-alone reference markers render before their paragraph, not
/// inside it: float each one out to be the paragraph's preceding sibling.
fn float_refs_out_of_paragraphs(tree: &mut DocTree) {
    let refs: Vec<NodeId> = tree
        .descendants_of_kind(tree.root(), NodeKind::Ref)
        .into_iter()
        .filter(|&r| tree.parent(r).and_then(|p| tree.kind(p)) == Some(NodeKind::Paragraph))
        .collect();
    for r in refs {
        let Some(paragraph) = tree.parent(r) else {
            continue;
        };
        tree.detach(r);
        tree.insert_before(paragraph, r);
    }
}

/// A cited-standard title whose sole element child is an italic run is
/// redundant markup: hoist the run's children into the title itself.
fn collapse_iso_titles(tree: &mut DocTree) {
    for title in tree.descendants_of_kind(tree.root(), NodeKind::IsoTitle) {
        let elements: Vec<NodeId> = tree.element_children(title).collect();
        let &[em] = elements.as_slice() else {
            continue;
        };
        if tree.kind(em) != Some(NodeKind::Emphasis) {
            continue;
        }
        let hoisted = tree.take_children(em);
        tree.take_children(title);
        for child in hoisted {
            tree.append(title, child);
        }
    }
}
