//! Opaque handles to framework-owned content.
//!
//! Contracts reference rendered child content (icons, card bodies, header
//! actions) without ever inspecting it. A `NodeHandle` is the capability the
//! host framework mints for such content; the catalog stores it and hands it
//! back, nothing more.

/// Opaque reference to a node owned by the host UI framework.
///
/// Handles are plain values: cheap to copy, comparable, hashable. Their raw
/// form only exists so hosts can bridge to their own node arenas.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(u64);

impl NodeHandle {
    /// Wrap a raw id minted by the host framework.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id back for the host framework.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeHandle({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_raw_id() {
        let handle = NodeHandle::from_raw(7);
        assert_eq!(handle.as_raw(), 7);
    }

    #[test]
    fn test_handles_compare_by_id() {
        assert_eq!(NodeHandle::from_raw(1), NodeHandle::from_raw(1));
        assert_ne!(NodeHandle::from_raw(1), NodeHandle::from_raw(2));
    }
}
