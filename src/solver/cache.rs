use super::*;

/// Memoized properties of a single graph revision.
///
/// Every slot is either unknown (`None`) or holds the final answer. Once known, a slot is never
/// overwritten while the revision stays the same; binding a different revision clears all slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCache {
    revision: Option<Revision>,
    pub is_continuous: Option<bool>,
    pub is_locally_continuous: Option<bool>,
    pub node_continuity: Option<NumNodes>,
    pub edge_continuity: Option<NumNodes>,
    pub has_claw: Option<bool>,
    pub is_claw: Option<bool>,
    pub is_complete: Option<bool>,
    pub has_hamilton_route: Option<bool>,
    pub has_hamilton_circle: Option<bool>,
    pub circumference: Option<NumNodes>,
    pub min_coloring: Option<NumNodes>,
}

impl PropertyCache {
    /// Returns the revision the cached values belong to
    pub fn revision(&self) -> Option<Revision> {
        self.revision
    }

    /// Binds the cache to `revision`. Returns *true* if values of another revision were dropped.
    pub(super) fn bind(&mut self, revision: Revision) -> bool {
        if self.revision == Some(revision) {
            return false;
        }

        let was_bound = self.revision.is_some();
        *self = Self {
            revision: Some(revision),
            ..Self::default()
        };
        was_bound
    }

    /// Returns *true* if no property is known
    pub fn is_blank(&self) -> bool {
        *self
            == Self {
                revision: self.revision,
                ..Self::default()
            }
    }
}

/// Write-once access to a single slot
pub(super) fn learn<T: Copy>(slot: &mut Option<T>, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    }
}
