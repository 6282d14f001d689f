//! Retained render nodes used inside rail items.

pub mod avatar;
pub mod icon;

pub use avatar::AvatarNode;
pub use icon::IconGlyph;

use std::sync::atomic::{AtomicU64, Ordering};

static NODE_SEQ: AtomicU64 = AtomicU64::new(1);

/// Hands out process-unique node ids. Nodes keep their id across in-place
/// updates, so tests can tell "updated" apart from "recreated".
pub(crate) fn next_node_id() -> u64 {
    NODE_SEQ.fetch_add(1, Ordering::Relaxed)
}
