//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products keep their identifier across edits and sales; two snapshots of the
/// same product are the same entity even when every other field differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same entity, regardless of its current state.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
