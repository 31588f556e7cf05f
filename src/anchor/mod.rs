//! Anchor assignment: numbering traversals and the resulting lookup table.
//!
//! [`assign_anchors`] walks the whole tree and produces an [`AnchorTable`]
//! mapping every addressable node id to its numbering metadata. The table
//! must be complete before any reference is resolved, because references
//! may point forward.

mod citation;
mod numbering;
mod table;

pub use citation::{fallback_ref, format_ref};
pub use numbering::assign_anchors;
pub use table::{Anchor, AnchorTable, AnchorTableBuilder};
