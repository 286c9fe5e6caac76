//! The `Route` entity: an oriented simple path that survives edge changes.

use atlas_core::{CityId, RoadId, RouteId};
use atlas_graph::RoadGraph;

/// A numbered national route.
///
/// `roads` is an ordered walk from `first` to `last`; consecutive roads
/// share a city and no city repeats.  The orientation is the one the
/// creating call used, so descriptions are reproducible.
pub struct Route {
    pub id: RouteId,
    pub first: CityId,
    pub last: CityId,
    pub roads: Vec<RoadId>,
}

impl Route {
    /// The cities visited, in walk order (`first` through `last`).
    pub fn cities<'a>(&'a self, graph: &'a RoadGraph) -> impl Iterator<Item = CityId> + 'a {
        std::iter::once(self.first).chain(self.roads.iter().scan(self.first, |curr, &r| {
            *curr = graph.road(r).other_end(*curr);
            Some(*curr)
        }))
    }

    /// `true` if `city` lies anywhere on the route (endpoints included).
    pub fn contains_city(&self, graph: &RoadGraph, city: CityId) -> bool {
        if self.roads.is_empty() {
            return city == self.first || city == self.last;
        }
        self.roads
            .iter()
            .any(|&r| graph.road(r).cities.contains(&city))
    }

    /// Find `road` on the walk; returns its position and the endpoint the
    /// walk *enters* it through.  That entry city orients a replacement
    /// path so it can be spliced in without flipping the route.
    pub fn locate_road(&self, graph: &RoadGraph, road: RoadId) -> Option<(usize, CityId)> {
        let mut curr = self.first;
        for (i, &r) in self.roads.iter().enumerate() {
            if r == road {
                return Some((i, curr));
            }
            curr = graph.road(r).other_end(curr);
        }
        None
    }

    /// Replace the single road at `index` with `replacement` (already
    /// oriented to match the walk direction).
    pub fn splice_replacement(&mut self, index: usize, replacement: Vec<RoadId>) {
        self.roads.splice(index..=index, replacement);
    }

    /// Prepend `roads` (oriented `new_first → old first`) to the walk.
    pub fn extend_front(&mut self, mut roads: Vec<RoadId>, new_first: CityId) {
        roads.extend_from_slice(&self.roads);
        self.roads = roads;
        self.first = new_first;
    }

    /// Append `roads` (oriented `old last → new_last`) to the walk.
    pub fn extend_back(&mut self, roads: Vec<RoadId>, new_last: CityId) {
        self.roads.extend(roads);
        self.last = new_last;
    }
}
