//! The fixed national-route catalog.

use atlas_core::RouteId;

use crate::route::Route;

/// 999 optional route slots, indexed by route number (slot 0 unused).
///
/// The capacity is a deliberate bound of the command language, not an
/// implementation accident.  A slot's life cycle is strictly
/// `empty → filled → empty`: filled by route creation, emptied only by
/// route removal.
pub struct RouteStore {
    slots: Vec<Option<Route>>,
}

impl RouteStore {
    pub fn new() -> RouteStore {
        RouteStore {
            slots: (0..=RouteId::MAX as usize).map(|_| None).collect(),
        }
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.slots[id.index()].as_ref()
    }

    pub fn get_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.slots[id.index()].as_mut()
    }

    /// Fill a slot.  Callers check occupancy first; filling a full slot is
    /// a logic error.
    pub fn insert(&mut self, route: Route) {
        let slot = &mut self.slots[route.id.index()];
        debug_assert!(slot.is_none(), "route slot already filled");
        *slot = Some(route);
    }

    /// Empty a slot, returning what it held.
    pub fn take(&mut self, id: RouteId) -> Option<Route> {
        self.slots[id.index()].take()
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new()
    }
}
