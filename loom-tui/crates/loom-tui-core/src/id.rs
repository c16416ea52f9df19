//! Node identifier types.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for nodes in a widget tree.
///
/// Widgets refer to their parent through a `NodeId` rather than a pointer,
/// so a child never keeps its container alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new unique node ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a NodeId from a raw u64 value.
    ///
    /// Meant for tests and for trees that allocate their own ids.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(NodeId::from_raw(42).as_u64(), 42);
        assert_eq!(NodeId::from_raw(7).to_string(), "NodeId(7)");
    }
}
