/// The outcome of a node-level `insert` or `delete`, reported alongside the rewired link so the
/// owning [`Tree`][crate::Tree] can keep its length in sync.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Change {
    /// A node was created or released.
    Applied,
    /// The value was already present (insert) or absent (delete), so nothing moved.
    Unchanged,
}

impl Change {
    pub(crate) fn applied(self) -> bool {
        self == Self::Applied
    }
}
