//! Generic tree browsing for in-memory hierarchies.
//!
//! The crate exposes two collaborating pieces: [`HierarchyAdapter`], a
//! read-only adapter that presents an arbitrary object hierarchy through a
//! uniform child-navigation contract, and [`SelectionCoordinator`], which
//! turns tree-selection events into detail-view refreshes. Neither piece
//! knows anything about node semantics; the hierarchy supplies children via
//! the [`Hierarchy`] capability and the detail text via a [`Describe`]
//! collaborator.

pub mod adapter;
pub mod error;
pub mod hierarchy;
pub mod selection;

pub use adapter::{HierarchyAdapter, ModelListener};
pub use error::AdapterError;
pub use hierarchy::Hierarchy;
pub use selection::{Describe, DetailSink, SelectionCoordinator};
