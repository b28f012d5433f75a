//! Entity trait: identity that survives changes to the record's contents.

use std::collections::HashMap;

/// Anything identified by id rather than by its field values.
///
/// Catalog products are entities: two listings with the same name and price
/// are still different products when their ids differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Lookup table over one snapshot of entities. A repeated id keeps the last
/// occurrence.
pub fn index_by_id<E: Entity>(entities: &[E]) -> HashMap<&E::Id, &E> {
    entities.iter().map(|e| (e.id(), e)).collect()
}
