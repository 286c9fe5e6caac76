//! `find_best_path` — the two-component-cost Dijkstra variant.

use atlas_core::{CityId, RoadId};
use atlas_graph::RoadGraph;

use crate::error::{RouteError, RouteResult};
use crate::heap::{DistHeap, SENTINEL_YEAR};
use crate::scratch::SearchScratch;

// ── Cost pair ─────────────────────────────────────────────────────────────────

/// The cost of a path: total length and the build/repair year of its oldest
/// road.  Ordered lexicographically with length ascending, year descending.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathCost {
    pub length: u32,
    pub oldest_year: i32,
}

impl PathCost {
    /// Strict "better than": shorter, or equally long with a strictly newer
    /// oldest road.  Note this is *not* a total order — two equal costs are
    /// better than each other in neither direction — which is exactly what
    /// lets callers detect a two-way tie and reject it.
    pub fn better_than(&self, other: &PathCost) -> bool {
        if self.length != other.length {
            return self.length < other.length;
        }
        self.oldest_year > other.oldest_year
    }
}

/// A successful search result: the road sequence in `src → dst` order and
/// its cost.
#[derive(Debug)]
pub struct FoundPath {
    pub roads: Vec<RoadId>,
    pub cost: PathCost,
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Find the best path from `src` to `dst`.
///
/// - `excluded`: roads whose endpoint cities (other than `src` and `dst`)
///   are masked out of the search entirely — used to keep a detour off the
///   rest of its own route.
/// - `allow_direct`: when `false`, the single road directly joining `src`
///   and `dst` (if any) is never relaxed — used by road removal, where the
///   detour must not be the road being removed.
///
/// Returns [`RouteError::NoPath`] when `dst` cannot be reached under those
/// constraints.  The result is the *optimum*, but not necessarily the only
/// one; callers that commit a path must follow up with
/// [`is_unambiguous`](crate::is_unambiguous).
pub fn find_best_path(
    graph: &RoadGraph,
    src: CityId,
    dst: CityId,
    excluded: Option<&[RoadId]>,
    allow_direct: bool,
) -> RouteResult<FoundPath> {
    let no_path = RouteError::NoPath { from: src, to: dst };

    let mut scratch = SearchScratch::for_graph(graph);
    let mut heap = DistHeap::with_capacity(graph.city_count());
    heap.fill_from(graph.city_ids_by_name(), &mut scratch.handles);
    if let Some(excluded) = excluded {
        scratch.mask_excluded(graph, excluded, src, dst);
    }

    // Seed the source and settle it immediately.
    let src_handle = scratch.handles[src.index()];
    heap.decrease_key(&mut scratch.handles, src_handle, 0, SENTINEL_YEAR);
    let mut node = heap.pop(&mut scratch.handles).ok_or(no_path)?;
    let mut curr = src;

    while curr != dst {
        // A sentinel key or a masked handle at the top means everything
        // still reachable has been settled and dst was not among it.
        if node.is_unreached() || scratch.handles[curr.index()] == 0 {
            return Err(no_path);
        }

        for road_id in graph.neighbour_roads(curr) {
            let road = graph.road(road_id);
            let next = road.other_end(curr);

            let direct = (curr == src && next == dst) || (curr == dst && next == src);
            if direct && !allow_direct {
                continue;
            }
            let handle = scratch.handles[next.index()];
            if handle == 0 {
                continue;
            }

            let new_length = node.length.saturating_add(road.length);
            let new_year = node.year.min(road.year);
            if heap.decrease_key(&mut scratch.handles, handle, new_length, new_year) {
                scratch.prev[next.index()] = curr;
            }
        }

        node = heap.pop(&mut scratch.handles).ok_or(no_path)?;
        curr = node.city;
    }

    if node.is_unreached() || scratch.handles[curr.index()] == 0 {
        return Err(no_path);
    }
    let cost = PathCost { length: node.length, oldest_year: node.year };

    // Walk the predecessor chain dst → src, then flip to forward order.
    let mut roads = Vec::new();
    let mut c = dst;
    while c != src {
        let p = scratch.prev[c.index()];
        let road = graph.road_between(c, p).expect("predecessor edge is live");
        roads.push(road);
        c = p;
    }
    roads.reverse();

    Ok(FoundPath { roads, cost })
}
