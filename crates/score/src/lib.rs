//! The concrete hierarchy browsed by scorelens: an in-memory musical score.
//!
//! A [`Score`] owns a tree of [`ScoreNode`]s (systems, parts, staves,
//! measures, down to individual notes) and implements the core
//! [`Hierarchy`](scorelens_core::Hierarchy) capability so the generic
//! adapter can navigate it. [`xml`] loads scores from an XML file and
//! [`dump`] renders the detail text shown for a selected node.

pub mod dump;
pub mod node;
pub mod xml;

pub use dump::{html_dump_of, text_dump_of};
pub use node::{NodeRole, Score, ScoreNode, ScoreNodeBuilder};
pub use xml::{DEMO_SCORE_XML, ScoreLoadError, demo_score, from_xml};
