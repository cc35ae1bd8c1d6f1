//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implemented by every record that is looked up by identifier in the
/// in-memory collections (stock items, formats, recipes, sheets, ...).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Find an entity by identifier in a loaded collection.
pub fn find_by_id<E: Entity>(entities: &[E], id: E::Id) -> Option<&E> {
    entities.iter().find(|e| e.id() == id)
}
