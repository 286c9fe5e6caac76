//! `is_unambiguous` — proving a found optimum is the *only* optimum.
//!
//! # How the check works
//!
//! A second Dijkstra pass over the same graph, with the same exclusion and
//! direct-edge constraints, but seeded differently: every city on the
//! candidate path starts with the candidate's prefix cost already
//! installed, and its predecessor set to the city before it on the
//! candidate.  No other predecessor is ever recorded.
//!
//! The main loop then relaxes normally.  Whenever the heap *accepts* a key
//! for a city whose recorded predecessor differs from the city we are
//! relaxing from, some other edge sequence reaches a candidate city at a
//! cost that ties or beats the candidate's prefix — the acceptance test
//! deliberately admits an equal length with an equal-or-newer year — and
//! the optimum is therefore not unique.  Relaxing a candidate city from its
//! own recorded predecessor is exempt; that is just the candidate
//! confirming itself.

use atlas_core::{CityId, RoadId};
use atlas_graph::RoadGraph;

use crate::heap::{DistHeap, SENTINEL_YEAR};
use crate::path::FoundPath;
use crate::scratch::SearchScratch;

/// Check that `candidate` (as returned by
/// [`find_best_path`](crate::find_best_path) with identical `src`, `dst`,
/// `excluded`, and `allow_direct` arguments) is the unique optimum.
///
/// `false` means the path is ambiguous — or, degenerately, that the search
/// space fell apart under it; either way the caller must reject.
pub fn is_unambiguous(
    graph: &RoadGraph,
    candidate: &FoundPath,
    src: CityId,
    dst: CityId,
    excluded: Option<&[RoadId]>,
    allow_direct: bool,
) -> bool {
    let mut scratch = SearchScratch::for_graph(graph);
    let mut heap = DistHeap::with_capacity(graph.city_count());
    heap.fill_from(graph.city_ids_by_name(), &mut scratch.handles);
    if let Some(excluded) = excluded {
        scratch.mask_excluded(graph, excluded, src, dst);
    }

    let src_handle = scratch.handles[src.index()];
    heap.decrease_key(&mut scratch.handles, src_handle, 0, SENTINEL_YEAR);
    let Some(mut node) = heap.pop(&mut scratch.handles) else {
        return false;
    };

    // Seed pass: install the candidate's prefix cost and predecessor at
    // every city along it.
    let mut walk_city = src;
    let mut prefix_length: u32 = 0;
    let mut prefix_year: i32 = SENTINEL_YEAR;
    for &road_id in &candidate.roads {
        let road = graph.road(road_id);
        let next = road.other_end(walk_city);
        prefix_length = prefix_length.saturating_add(road.length);
        prefix_year = prefix_year.min(road.year);

        let handle = scratch.handles[next.index()];
        heap.decrease_key(&mut scratch.handles, handle, prefix_length, prefix_year);
        scratch.prev[next.index()] = walk_city;
        walk_city = next;
    }

    // Main pass.
    let mut curr = src;
    while curr != dst {
        if node.is_unreached() || scratch.handles[curr.index()] == 0 {
            return false;
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
                let prev = scratch.prev[next.index()];
                if prev != CityId::INVALID && prev != curr {
                    // A non-candidate approach tied or beat the candidate's
                    // prefix at a candidate city: ambiguous.
                    return false;
                }
            }
        }

        match heap.pop(&mut scratch.handles) {
            Some(popped) => {
                node = popped;
                curr = node.city;
            }
            None => return false,
        }
    }
    true
}
