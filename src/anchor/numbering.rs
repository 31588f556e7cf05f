//! Numbering traversals.
//!
//! Walks the document tree in three stages (front matter, middle matter,
//! back matter) and records an [`Anchor`] for every addressable node. The
//! stages run in a fixed order because clause numbers depend on which of
//! the named front sections are present: the optional Symbols section
//! shifts every later clause number by one.
//!
//! Two numbering families:
//! - hierarchical, for clauses/terms/annexes: a dotted prefix grows by
//!   1-based child position at each level ("3", "3.1", "3.1.1");
//! - sequential, for floating assets (tables, figures, formulas): flat
//!   counters per asset kind within a scope, optionally carrying an annex
//!   prefix ("Table 2" vs "Table A.2").

use crate::anchor::citation::{fallback_ref, format_ref};
use crate::anchor::table::{Anchor, AnchorTable, AnchorTableBuilder};
use crate::model::{Attr, DocTree, NodeId, NodeKind};

/// Assign anchors to every addressable node in the document.
///
/// The returned table is complete: later passes may rely on forward
/// references (an early clause citing a late annex) resolving.
pub fn assign_anchors(tree: &DocTree) -> AnchorTable {
    let mut anchors = AnchorTableBuilder::new();
    initial_anchor_names(tree, &mut anchors);
    middle_anchor_names(tree, &mut anchors);
    back_anchor_names(tree, &mut anchors);
    anchors.finish()
}

// ============================================================================
// Front and middle matter
// ============================================================================

fn initial_anchor_names(tree: &DocTree, anchors: &mut AnchorTableBuilder) {
    if let Some(intro) = content_titled(tree, "Introduction") {
        for (i, sub) in structural_children(tree, intro).enumerate() {
            section_names(tree, anchors, sub, &format!("0.{}", i + 1), 2);
        }
    }
    if let Some(scope) = scope_clause(tree) {
        section_names(tree, anchors, scope, "1", 1);
    }
    if let Some(refs) = normative_references(tree) {
        section_names(tree, anchors, refs, "2", 1);
    }
    if let Some(terms) = first_of_kind(tree, NodeKind::Terms) {
        section_names(tree, anchors, terms, "3", 1);
    }
    middle_section_asset_names(tree, anchors);
}

fn middle_anchor_names(tree: &DocTree, anchors: &mut AnchorTableBuilder) {
    let mut sect_num = 4;
    if let Some(symbols) = first_of_kind(tree, NodeKind::SymbolsAbbrevs) {
        section_names(tree, anchors, symbols, &sect_num.to_string(), 1);
        sect_num += 1;
    }
    for (i, clause) in ordinary_clauses(tree).into_iter().enumerate() {
        section_names(tree, anchors, clause, &(sect_num + i).to_string(), 1);
    }
    termnote_anchor_names(tree, anchors);
}

/// Flat asset numbering over the whole middle matter. Counters are shared
/// across all middle sections, so the scope is the combined section list,
/// not one section at a time.
fn middle_section_asset_names(tree: &DocTree, anchors: &mut AnchorTableBuilder) {
    let scopes = middle_sections(tree);
    asset_names(tree, anchors, &scopes, "");
}

fn termnote_anchor_names(tree: &DocTree, anchors: &mut AnchorTableBuilder) {
    for term in tree.descendants_of_kind(tree.root(), NodeKind::Term) {
        let Some(term_xref) = term_xref(tree, anchors, term) else {
            continue;
        };
        let notes: Vec<NodeId> = tree
            .children(term)
            .filter(|&c| tree.kind(c) == Some(NodeKind::TermNote))
            .collect();
        for (i, note) in notes.into_iter().enumerate() {
            let n = i + 1;
            record(
                tree,
                anchors,
                note,
                Anchor::new(
                    format!("Note {n} to entry"),
                    format!("{term_xref},Note {n}"),
                ),
            );
        }
    }
}

fn term_xref(tree: &DocTree, anchors: &AnchorTableBuilder, term: NodeId) -> Option<String> {
    let id = tree.attr(term, Attr::Id)?;
    anchors.xref(id).map(str::to_string)
}

// ============================================================================
// Hierarchical numbering
// ============================================================================

/// Number a top-level section and recurse into its structural children.
fn section_names(
    tree: &DocTree,
    anchors: &mut AnchorTableBuilder,
    node: NodeId,
    num: &str,
    level: u8,
) {
    record(
        tree,
        anchors,
        node,
        Anchor::new(num, format!("Clause {num}")).at_level(level),
    );
    for (i, child) in structural_children(tree, node).enumerate() {
        subsection_names(tree, anchors, child, &format!("{num}.{}", i + 1), level + 1);
    }
}

/// Number a nested subsection or term. Terms are cross-referenced by bare
/// number, subsections as "Clause n.m".
fn subsection_names(
    tree: &DocTree,
    anchors: &mut AnchorTableBuilder,
    node: NodeId,
    num: &str,
    level: u8,
) {
    let xref = if tree.kind(node) == Some(NodeKind::Term) {
        num.to_string()
    } else {
        format!("Clause {num}")
    };
    record(tree, anchors, node, Anchor::new(num, xref).at_level(level));
    for (i, child) in subsection_children(tree, node).enumerate() {
        subsection_names(tree, anchors, child, &format!("{num}.{}", i + 1), level + 1);
    }
}

/// Subsections and terms, in document order. These are the children that
/// consume a position in hierarchical numbering.
fn structural_children(tree: &DocTree, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    tree.children(node).filter(|&c| {
        matches!(
            tree.kind(c),
            Some(NodeKind::Subsection) | Some(NodeKind::Term)
        )
    })
}

fn subsection_children(tree: &DocTree, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    tree.children(node)
        .filter(|&c| tree.kind(c) == Some(NodeKind::Subsection))
}

// ============================================================================
// Back matter
// ============================================================================

fn back_anchor_names(tree: &DocTree, anchors: &mut AnchorTableBuilder) {
    let annexes = tree.descendants_of_kind(tree.root(), NodeKind::Annex);
    for (i, annex) in annexes.into_iter().enumerate() {
        let letter = (b'A' + i as u8) as char;
        annex_names(tree, anchors, annex, letter);
    }
    for bib in tree.descendants_of_kind(tree.root(), NodeKind::BibItem) {
        reference_names(tree, anchors, bib);
    }
}

fn annex_names(tree: &DocTree, anchors: &mut AnchorTableBuilder, annex: NodeId, letter: char) {
    let obligation = if tree.attr(annex, Attr::Subtype) == Some("normative") {
        "(Normative)"
    } else {
        "(Informative)"
    };
    record(
        tree,
        anchors,
        annex,
        Anchor::new(
            format!("<b>Annex {letter}</b><br/>{obligation}"),
            format!("Annex {letter}"),
        )
        .at_level(1),
    );
    for (i, sub) in subsection_children(tree, annex).enumerate() {
        annex_subsection_names(tree, anchors, sub, &format!("{letter}.{}", i + 1), 2);
    }
    asset_names(tree, anchors, &[annex], &format!("{letter}."));
}

/// Annex subsections are cross-referenced by bare number ("A.2"), without
/// the "Clause" prefix top-level clauses get.
fn annex_subsection_names(
    tree: &DocTree,
    anchors: &mut AnchorTableBuilder,
    node: NodeId,
    num: &str,
    level: u8,
) {
    record(tree, anchors, node, Anchor::new(num, num).at_level(level));
    for (i, child) in subsection_children(tree, node).enumerate() {
        annex_subsection_names(tree, anchors, child, &format!("{num}.{}", i + 1), level + 1);
    }
}

fn reference_names(tree: &DocTree, anchors: &mut AnchorTableBuilder, bib: NodeId) {
    let iso = is_iso_publisher(tree, bib);
    let docid = tree
        .children(bib)
        .find(|&c| tree.kind(c) == Some(NodeKind::DocIdentifier));

    let Some(docid) = docid else {
        let text = fallback_ref(&tree.collect_text(bib));
        record(tree, anchors, bib, Anchor::citation(text));
        return;
    };

    let mut reference = format_ref(&tree.collect_text(docid), iso);
    let date = tree
        .children(bib)
        .find(|&c| tree.kind(c) == Some(NodeKind::PublisherDate));
    if iso && let Some(date) = date {
        reference.push_str(&format!(": {}", tree.collect_text(date)));
    }
    record(tree, anchors, bib, Anchor::citation(reference));
}

fn is_iso_publisher(tree: &DocTree, bib: NodeId) -> bool {
    tree.children(bib)
        .filter(|&c| tree.kind(c) == Some(NodeKind::Publisher))
        .any(|publisher| {
            tree.descendants(publisher)
                .filter(|&d| tree.kind(d) == Some(NodeKind::Affiliation))
                .any(|aff| tree.collect_text(aff) == "ISO")
        })
}

// ============================================================================
// Sequential asset numbering
// ============================================================================

/// Number the floating assets of one or more scopes.
///
/// One routine covers both modes: `prefix` is empty for the flat middle-
/// matter numbering and `"{letter}."` inside an annex. Counters run per
/// asset kind across the whole scope list.
fn asset_names(tree: &DocTree, anchors: &mut AnchorTableBuilder, scopes: &[NodeId], prefix: &str) {
    let mut n = 0;
    for &scope in scopes {
        for table in tree.descendants_of_kind(scope, NodeKind::Table) {
            n += 1;
            record(tree, anchors, table, Anchor::asset(format!("Table {prefix}{n}")));
        }
    }

    // Figures carry a secondary index for figures nested directly inside
    // another figure: the sub-index resets whenever a non-nested figure is
    // seen and shows up as a "-{sub}" suffix.
    let (mut i, mut j) = (0u32, 0u32);
    for &scope in scopes {
        for figure in tree.descendants_of_kind(scope, NodeKind::Figure) {
            let nested = tree
                .parent(figure)
                .and_then(|p| tree.kind(p))
                == Some(NodeKind::Figure);
            if nested {
                j += 1;
            } else {
                j = 0;
                i += 1;
            }
            let suffix = if j == 0 { String::new() } else { format!("-{j}") };
            record(
                tree,
                anchors,
                figure,
                Anchor::asset(format!("Figure {prefix}{i}{suffix}")),
            );
        }
    }

    let mut n = 0;
    for &scope in scopes {
        for formula in tree.descendants_of_kind(scope, NodeKind::Formula) {
            n += 1;
            record(
                tree,
                anchors,
                formula,
                Anchor::new(format!("{prefix}{n}"), format!("Formula {prefix}{n}")),
            );
        }
    }
}

// ============================================================================
// Section lookup
// ============================================================================

fn content_titled(tree: &DocTree, title: &str) -> Option<NodeId> {
    tree.descendants(tree.root()).find(|&n| {
        tree.kind(n) == Some(NodeKind::Content) && tree.title_text(n).as_deref() == Some(title)
    })
}

fn first_of_kind(tree: &DocTree, kind: NodeKind) -> Option<NodeId> {
    tree.descendants(tree.root())
        .find(|&n| tree.kind(n) == Some(kind))
}

fn scope_clause(tree: &DocTree) -> Option<NodeId> {
    tree.descendants(tree.root()).find(|&n| {
        is_body_clause(tree, n) && tree.title_text(n).as_deref() == Some("Scope")
    })
}

fn normative_references(tree: &DocTree) -> Option<NodeId> {
    tree.descendants(tree.root()).find(|&n| {
        tree.kind(n) == Some(NodeKind::References)
            && tree.title_text(n).as_deref() == Some("Normative References")
    })
}

/// Body clauses other than Scope, in document order.
fn ordinary_clauses(tree: &DocTree) -> Vec<NodeId> {
    tree.descendants(tree.root())
        .filter(|&n| {
            is_body_clause(tree, n) && tree.title_text(n).as_deref() != Some("Scope")
        })
        .collect()
}

fn is_body_clause(tree: &DocTree, node: NodeId) -> bool {
    tree.kind(node) == Some(NodeKind::Clause)
        && tree.parent(node).and_then(|p| tree.kind(p)) == Some(NodeKind::Sections)
}

/// All middle-matter sections in document order: body clauses (Scope
/// included), the normative references section, the terms section, and the
/// symbols section. This is the combined scope for flat asset numbering.
fn middle_sections(tree: &DocTree) -> Vec<NodeId> {
    tree.descendants(tree.root())
        .filter(|&n| match tree.kind(n) {
            Some(NodeKind::Clause) => is_body_clause(tree, n),
            Some(NodeKind::Terms) | Some(NodeKind::SymbolsAbbrevs) => true,
            Some(NodeKind::References) => {
                tree.title_text(n).as_deref() == Some("Normative References")
            }
            _ => false,
        })
        .collect()
}

fn record(tree: &DocTree, anchors: &mut AnchorTableBuilder, node: NodeId, anchor: Anchor) {
    // Nodes without an id can never be referenced; skip them.
    if let Some(id) = tree.attr(node, Attr::Id) {
        anchors.insert(id, anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled_section(tree: &mut DocTree, kind: NodeKind, title: &str, id: &str) -> NodeId {
        let section = tree.create_element(kind);
        tree.set_attr(section, Attr::Id, id);
        let t = tree.create_element(NodeKind::Title);
        let text = tree.create_text(title);
        tree.append(t, text);
        tree.append(section, t);
        section
    }

    fn element_with_id(tree: &mut DocTree, kind: NodeKind, id: &str) -> NodeId {
        let node = tree.create_element(kind);
        tree.set_attr(node, Attr::Id, id);
        node
    }

    /// Scope, Normative References, and Terms under a sections container.
    fn skeleton(tree: &mut DocTree) -> NodeId {
        let sections = tree.create_element(NodeKind::Sections);
        tree.append(tree.root(), sections);
        let scope = titled_section(tree, NodeKind::Clause, "Scope", "scope");
        tree.append(sections, scope);
        let refs = titled_section(tree, NodeKind::References, "Normative References", "normrefs");
        tree.append(tree.root(), refs);
        let terms = titled_section(tree, NodeKind::Terms, "Terms and Definitions", "terms");
        tree.append(tree.root(), terms);
        sections
    }

    #[test]
    fn fixed_front_sections() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let table = assign_anchors(&tree);

        assert_eq!(table.get("scope").unwrap().label.as_deref(), Some("1"));
        assert_eq!(table.xref("scope"), Some("Clause 1"));
        assert_eq!(table.xref("normrefs"), Some("Clause 2"));
        assert_eq!(table.xref("terms"), Some("Clause 3"));
        assert_eq!(table.get("terms").unwrap().level, Some(1));
    }

    #[test]
    fn clause_numbering_without_symbols_section() {
        let mut tree = DocTree::new();
        let sections = skeleton(&mut tree);
        let c1 = titled_section(&mut tree, NodeKind::Clause, "Requirements", "c1");
        tree.append(sections, c1);
        let c2 = titled_section(&mut tree, NodeKind::Clause, "Testing", "c2");
        tree.append(sections, c2);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("c1"), Some("Clause 4"));
        assert_eq!(table.xref("c2"), Some("Clause 5"));
    }

    #[test]
    fn symbols_section_shifts_clause_numbers() {
        let mut tree = DocTree::new();
        let sections = skeleton(&mut tree);
        let symbols = element_with_id(&mut tree, NodeKind::SymbolsAbbrevs, "symbols");
        tree.append(tree.root(), symbols);
        let c1 = titled_section(&mut tree, NodeKind::Clause, "Requirements", "c1");
        tree.append(sections, c1);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("symbols"), Some("Clause 4"));
        assert_eq!(table.xref("c1"), Some("Clause 5"));
    }

    #[test]
    fn subsection_levels_match_nesting_depth() {
        let mut tree = DocTree::new();
        let sections = skeleton(&mut tree);
        let c1 = titled_section(&mut tree, NodeKind::Clause, "Requirements", "c1");
        tree.append(sections, c1);
        let s1 = element_with_id(&mut tree, NodeKind::Subsection, "s1");
        tree.append(c1, s1);
        let s2 = element_with_id(&mut tree, NodeKind::Subsection, "s2");
        tree.append(c1, s2);
        let s11 = element_with_id(&mut tree, NodeKind::Subsection, "s11");
        tree.append(s1, s11);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("c1"), Some("Clause 4"));
        assert_eq!(table.get("c1").unwrap().level, Some(1));
        assert_eq!(table.xref("s1"), Some("Clause 4.1"));
        assert_eq!(table.get("s1").unwrap().level, Some(2));
        assert_eq!(table.xref("s2"), Some("Clause 4.2"));
        assert_eq!(table.xref("s11"), Some("Clause 4.1.1"));
        assert_eq!(table.get("s11").unwrap().level, Some(3));
    }

    #[test]
    fn introduction_subsections_use_zero_prefix() {
        let mut tree = DocTree::new();
        let intro = titled_section(&mut tree, NodeKind::Content, "Introduction", "intro");
        tree.append(tree.root(), intro);
        let a = element_with_id(&mut tree, NodeKind::Subsection, "i1");
        tree.append(intro, a);
        let b = element_with_id(&mut tree, NodeKind::Subsection, "i2");
        tree.append(intro, b);
        skeleton(&mut tree);

        let table = assign_anchors(&tree);
        assert_eq!(table.get("i1").unwrap().label.as_deref(), Some("0.1"));
        assert_eq!(table.xref("i2"), Some("Clause 0.2"));
        assert_eq!(table.get("i1").unwrap().level, Some(2));
        // The introduction itself takes no number
        assert!(!table.contains("intro"));
    }

    #[test]
    fn terms_are_cross_referenced_by_bare_number() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let terms = tree.node_by_id("terms").unwrap();
        let term = element_with_id(&mut tree, NodeKind::Term, "t1");
        tree.append(terms, term);

        let table = assign_anchors(&tree);
        assert_eq!(table.get("t1").unwrap().label.as_deref(), Some("3.1"));
        assert_eq!(table.xref("t1"), Some("3.1"));
    }

    #[test]
    fn term_notes_numbered_per_term() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let terms = tree.node_by_id("terms").unwrap();
        let term = element_with_id(&mut tree, NodeKind::Term, "t1");
        tree.append(terms, term);
        let n1 = element_with_id(&mut tree, NodeKind::TermNote, "n1");
        tree.append(term, n1);
        let n2 = element_with_id(&mut tree, NodeKind::TermNote, "n2");
        tree.append(term, n2);

        let table = assign_anchors(&tree);
        let note = table.get("n1").unwrap();
        assert_eq!(note.label.as_deref(), Some("Note 1 to entry"));
        assert_eq!(note.xref, "3.1,Note 1");
        assert_eq!(table.xref("n2"), Some("3.1,Note 2"));
    }

    #[test]
    fn annex_letters_and_obligations() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let a = element_with_id(&mut tree, NodeKind::Annex, "ann-a");
        tree.set_attr(a, Attr::Subtype, "normative");
        tree.append(tree.root(), a);
        let b = element_with_id(&mut tree, NodeKind::Annex, "ann-b");
        tree.append(tree.root(), b);

        let table = assign_anchors(&tree);
        assert_eq!(
            table.get("ann-a").unwrap().label.as_deref(),
            Some("<b>Annex A</b><br/>(Normative)")
        );
        assert_eq!(table.xref("ann-a"), Some("Annex A"));
        assert_eq!(
            table.get("ann-b").unwrap().label.as_deref(),
            Some("<b>Annex B</b><br/>(Informative)")
        );
        assert_eq!(table.xref("ann-b"), Some("Annex B"));
        assert_eq!(table.get("ann-a").unwrap().level, Some(1));
    }

    #[test]
    fn annex_subsections_numbered_with_letter() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let a = element_with_id(&mut tree, NodeKind::Annex, "ann-a");
        tree.append(tree.root(), a);
        let s1 = element_with_id(&mut tree, NodeKind::Subsection, "a1");
        tree.append(a, s1);
        let s11 = element_with_id(&mut tree, NodeKind::Subsection, "a11");
        tree.append(s1, s11);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("a1"), Some("A.1"));
        assert_eq!(table.get("a1").unwrap().level, Some(2));
        assert_eq!(table.xref("a11"), Some("A.1.1"));
    }

    #[test]
    fn flat_asset_counters_span_all_middle_sections() {
        let mut tree = DocTree::new();
        let sections = skeleton(&mut tree);
        let scope = tree.node_by_id("scope").unwrap();
        let t1 = element_with_id(&mut tree, NodeKind::Table, "tab1");
        tree.append(scope, t1);
        let c1 = titled_section(&mut tree, NodeKind::Clause, "Requirements", "c1");
        tree.append(sections, c1);
        let t2 = element_with_id(&mut tree, NodeKind::Table, "tab2");
        tree.append(c1, t2);
        let f1 = element_with_id(&mut tree, NodeKind::Formula, "frm1");
        tree.append(c1, f1);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("tab1"), Some("Table 1"));
        assert_eq!(table.xref("tab2"), Some("Table 2"));
        // Formula labels are bare; only the xref carries the word
        assert_eq!(table.get("frm1").unwrap().label.as_deref(), Some("1"));
        assert_eq!(table.xref("frm1"), Some("Formula 1"));
    }

    #[test]
    fn figure_subindex_tracks_nesting() {
        let mut tree = DocTree::new();
        let sections = skeleton(&mut tree);
        let c1 = titled_section(&mut tree, NodeKind::Clause, "Requirements", "c1");
        tree.append(sections, c1);

        let f1 = element_with_id(&mut tree, NodeKind::Figure, "f1");
        tree.append(c1, f1);
        let f1a = element_with_id(&mut tree, NodeKind::Figure, "f1a");
        tree.append(f1, f1a);
        let f1b = element_with_id(&mut tree, NodeKind::Figure, "f1b");
        tree.append(f1, f1b);
        let f2 = element_with_id(&mut tree, NodeKind::Figure, "f2");
        tree.append(c1, f2);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("f1"), Some("Figure 1"));
        assert_eq!(table.xref("f1a"), Some("Figure 1-1"));
        assert_eq!(table.xref("f1b"), Some("Figure 1-2"));
        // Sub-index resets on the next non-nested figure
        assert_eq!(table.xref("f2"), Some("Figure 2"));
    }

    #[test]
    fn annex_assets_carry_letter_prefix() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let a = element_with_id(&mut tree, NodeKind::Annex, "ann-a");
        tree.append(tree.root(), a);
        let t1 = element_with_id(&mut tree, NodeKind::Table, "at1");
        tree.append(a, t1);
        let t2 = element_with_id(&mut tree, NodeKind::Table, "at2");
        tree.append(a, t2);
        let f1 = element_with_id(&mut tree, NodeKind::Figure, "af1");
        tree.append(a, f1);
        let frm = element_with_id(&mut tree, NodeKind::Formula, "afrm");
        tree.append(a, frm);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("at1"), Some("Table A.1"));
        assert_eq!(table.xref("at2"), Some("Table A.2"));
        assert_eq!(table.xref("af1"), Some("Figure A.1"));
        assert_eq!(table.get("afrm").unwrap().label.as_deref(), Some("A.1"));
        assert_eq!(table.xref("afrm"), Some("Formula A.1"));
    }

    fn bibitem(tree: &mut DocTree, id: &str, docid: Option<&str>, iso: bool, date: Option<&str>) -> NodeId {
        let bib = element_with_id(tree, NodeKind::BibItem, id);
        if let Some(docid) = docid {
            let d = tree.create_element(NodeKind::DocIdentifier);
            let t = tree.create_text(docid);
            tree.append(d, t);
            tree.append(bib, d);
        }
        if iso {
            let publisher = tree.create_element(NodeKind::Publisher);
            let aff = tree.create_element(NodeKind::Affiliation);
            let name = tree.create_text("ISO");
            tree.append(aff, name);
            tree.append(publisher, aff);
            tree.append(bib, publisher);
        }
        if let Some(date) = date {
            let d = tree.create_element(NodeKind::PublisherDate);
            let t = tree.create_text(date);
            tree.append(d, t);
            tree.append(bib, d);
        }
        bib
    }

    #[test]
    fn iso_bibitem_with_date() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let bib = bibitem(&mut tree, "b1", Some("9001"), true, Some("2015"));
        tree.append(tree.root(), bib);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("b1"), Some("ISO 9001: 2015"));
    }

    #[test]
    fn non_iso_numeric_bibitem_is_bracketed() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let bib = bibitem(&mut tree, "b1", Some("12"), false, None);
        tree.append(tree.root(), bib);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("b1"), Some("[12]"));
    }

    #[test]
    fn non_iso_bibitem_ignores_date() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let bib = bibitem(&mut tree, "b1", Some("RFC 2119"), false, Some("1997"));
        tree.append(tree.root(), bib);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("b1"), Some("RFC 2119"));
    }

    #[test]
    fn bibitem_without_docid_falls_back_to_text() {
        let mut tree = DocTree::new();
        skeleton(&mut tree);
        let bib = element_with_id(&mut tree, NodeKind::BibItem, "b1");
        let text = tree.create_text("[Aluminium Standard]");
        tree.append(bib, text);
        tree.append(tree.root(), bib);

        let table = assign_anchors(&tree);
        assert_eq!(table.xref("b1"), Some("Aluminium Standard"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let tree = DocTree::new();
        let table = assign_anchors(&tree);
        assert!(table.is_empty());
    }
}
