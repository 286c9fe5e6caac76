//! The `Road` entity.

use atlas_core::{CityId, RouteId};
use rustc_hash::FxHashSet;

/// A weighted, dated undirected edge between two cities.
///
/// The endpoint order is cosmetic: both endpoints' neighbour maps reference
/// the same `RoadId`, and there is never more than one road per unordered
/// city pair.
pub struct Road {
    /// The two endpoints.
    pub cities: [CityId; 2],

    /// Length in kilometres, `>= 1`.
    pub length: u32,

    /// Build year, or year of the most recent repair.  Never 0, and never
    /// decreases over the road's lifetime.
    pub year: i32,

    /// Routes whose walk traverses this road.
    pub routes: FxHashSet<RouteId>,
}

impl Road {
    pub(crate) fn new(a: CityId, b: CityId, length: u32, year: i32) -> Road {
        Road {
            cities: [a, b],
            length,
            year,
            routes: FxHashSet::default(),
        }
    }

    /// The endpoint other than `city`.
    ///
    /// Callers must pass one of the two endpoints.
    #[inline]
    pub fn other_end(&self, city: CityId) -> CityId {
        debug_assert!(self.cities.contains(&city));
        if self.cities[0] == city {
            self.cities[1]
        } else {
            self.cities[0]
        }
    }

    /// `true` if this road joins exactly the unordered pair `{a, b}`.
    #[inline]
    pub fn joins(&self, a: CityId, b: CityId) -> bool {
        (self.cities[0] == a && self.cities[1] == b)
            || (self.cities[0] == b && self.cities[1] == a)
    }
}
