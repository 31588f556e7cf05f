//! Node types, kinds, and attributes for the document tree.

/// Unique identifier for a node in the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Structural kind of a document node.
///
/// The engine dispatches on a closed set of kinds rather than element-name
/// strings, so every traversal match is exhaustive and checked. Nodes the
/// engine never targets directly (running prose, markup it does not touch)
/// arrive as `Paragraph`/`Emphasis`/`Text` and pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Document root.
    Root,
    /// Container for the middle-matter clauses (the document body).
    Sections,
    /// Front-matter section (e.g. Introduction, Foreword). Identified by
    /// its title text, not by kind alone.
    Content,
    /// Numbered clause.
    Clause,
    /// Nested subsection of a clause, annex, or front-matter section.
    Subsection,
    /// The Terms and Definitions section.
    Terms,
    /// A single term entry inside [`NodeKind::Terms`].
    Term,
    /// A note attached to a term ("Note n to entry").
    TermNote,
    /// The Symbols and Abbreviations section (optional in a document).
    SymbolsAbbrevs,
    /// A references section (normative references or bibliography).
    References,
    /// One bibliographic entry.
    BibItem,
    /// Annex (lettered back-matter section). Obligation comes from the
    /// `Subtype` attribute.
    Annex,
    /// Floating figure. Figures may nest one level inside another figure.
    Figure,
    /// Floating table.
    Table,
    /// Floating formula.
    Formula,
    /// Section title element.
    Title,
    /// Cited-standard title wrapper; a redundant single italic run inside
    /// it is collapsed during resolution.
    IsoTitle,
    /// Paragraph of running text.
    Paragraph,
    /// Block quote.
    Quote,
    /// Source attribution of a quote; carries a `Target` attribute.
    QuoteSource,
    /// Citation origin of a term or definition; carries a `Bibitemid`.
    Origin,
    /// Unresolved in-text cross-reference; carries a `Target` attribute.
    Xref,
    /// Resolved typed citation (rewritten from [`NodeKind::Xref`]).
    Eref,
    /// Stand-alone reference marker inside body text.
    Ref,
    /// Literal reference text nested inside a [`NodeKind::Locality`].
    Reference,
    /// Locality qualifier on a citation (`Type` attribute holds the kind).
    Locality,
    /// Bare section marker trailing a citation origin.
    SectionMarker,
    /// Inline emphasis (italic) run.
    Emphasis,
    /// Publisher block of a bibliographic entry.
    Publisher,
    /// Publisher affiliation; its text names the organization.
    Affiliation,
    /// Document identifier of a bibliographic entry.
    DocIdentifier,
    /// Publication date of a bibliographic entry.
    PublisherDate,
    /// Leaf text content.
    #[default]
    Text,
}

/// Free-form string attributes a node may carry.
///
/// This is the closed vocabulary the engine reads or writes; anything else
/// in the source document is the parser's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Caller-assigned stable identifier, unique within a document.
    Id,
    /// Decorative type marker on references, locality kind on localities.
    Type,
    /// Raw target string of an unresolved reference.
    Target,
    /// Annex obligation subtype (`"normative"` or anything else).
    Subtype,
    /// Resolved target id of a citation.
    Bibitemid,
    /// Display string for a citation at the point of reference.
    Citeas,
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Structural kind.
    pub kind: NodeKind,
    /// Sparse string attributes (most nodes carry none or one).
    pub attrs: Vec<(Attr, String)>,
    /// Text content (only meaningful for [`NodeKind::Text`]).
    pub text: String,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    /// Create a new element node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
            text: String::new(),
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }

    /// Create a leaf text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(NodeKind::Text)
        }
    }
}
