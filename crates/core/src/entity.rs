//! Entity trait: records that keep their identity while their fields change.

/// Anything identified by an id rather than by its field values.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Two values describe the same entity when their ids match, even if
    /// other fields differ (e.g. an edited copy of a record).
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
