//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Position and reference of the entity with `id` in an ordered sequence.
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<(usize, &E)> {
    items.iter().enumerate().find(|(_, e)| e.id() == id)
}
