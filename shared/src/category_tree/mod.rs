//! Category hierarchy reconstruction
//!
//! The backend hands out categories as a flat list of parent-pointer
//! records. This module rebuilds the hierarchy for display:
//! - [`CategoryIndex`]: one-pass index over a snapshot (children
//!   lookup, breadcrumb paths)
//! - [`build_forest`]: the full nested structure
//! - [`rows`]: the flattened `(node, depth)` sequence a table view
//!   walks to render one row per category
//!
//! The input is untrusted. Orphaned parent references fold into the
//! top level, cycles are broken and their members demoted, duplicate
//! ids keep the first occurrence. No operation here mutates the
//! snapshot or returns an error for malformed structure.

pub mod forest;
pub mod index;

// Re-exports
pub use forest::{CategoryNode, CategoryRows, build_forest, rows};
pub use index::{CategoryIndex, MAX_PATH_DEPTH, PATH_SEPARATOR};
