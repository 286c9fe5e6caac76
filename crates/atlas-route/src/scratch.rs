//! Per-search side tables.
//!
//! The heap handle and the predecessor pointer are scratch state of a
//! single search, not properties of a city, so they live in a table
//! allocated per call and indexed by `CityId`.  A fresh table starts fully
//! zeroed/invalid, which removes the reset pass a persistent field would
//! need and makes concurrent-search aliasing impossible by construction.

use atlas_core::{CityId, RoadId};
use atlas_graph::RoadGraph;

/// Handle and predecessor tables for one search, indexed by `CityId`.
pub struct SearchScratch {
    /// Heap position per city; 0 = not in the queue (masked or settled
    /// before fill).  Maintained by the heap during swaps.
    pub handles: Vec<u32>,

    /// Predecessor city on the current best path; `CityId::INVALID` = none.
    pub prev: Vec<CityId>,
}

impl SearchScratch {
    /// Fresh scratch sized to the graph's city arena.
    pub fn for_graph(graph: &RoadGraph) -> SearchScratch {
        SearchScratch {
            handles: vec![0; graph.city_count()],
            prev: vec![CityId::INVALID; graph.city_count()],
        }
    }

    /// Mask out every city incident to a road in `excluded`, except the
    /// search endpoints themselves.  This is how "the detour must not pass
    /// through cities the route already visits" is enforced: the roads of
    /// the route are the exclusion set, and their endpoints are exactly the
    /// route's cities.
    pub fn mask_excluded(
        &mut self,
        graph: &RoadGraph,
        excluded: &[RoadId],
        src: CityId,
        dst: CityId,
    ) {
        for &road_id in excluded {
            for end in graph.road(road_id).cities {
                if end != src && end != dst {
                    self.handles[end.index()] = 0;
                }
            }
        }
    }
}
