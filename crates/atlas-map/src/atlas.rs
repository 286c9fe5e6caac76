//! The `Atlas` — graph plus route catalog, and the mutating verbs.

use log::debug;

use atlas_core::{CityId, RoadId, RouteId, is_valid_city_name, is_valid_length, is_valid_year};
use atlas_graph::RoadGraph;
use atlas_route::{FoundPath, find_best_path, is_unambiguous};

use crate::error::{MapError, MapResult};
use crate::route::Route;
use crate::store::RouteStore;

/// The whole engine state: every city, every road, every route.
///
/// Single-owner and single-threaded by design; each verb is a complete
/// transaction (see the crate docs).
#[derive(Default)]
pub struct Atlas {
    pub(crate) graph: RoadGraph,
    pub(crate) routes: RouteStore,
}

impl Atlas {
    pub fn new() -> Atlas {
        Atlas {
            graph: RoadGraph::new(),
            routes: RouteStore::new(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The underlying graph, read-only.
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// The route in slot `id`, if any.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    // ── add_road ──────────────────────────────────────────────────────────

    /// Create a road between two cities, creating the cities themselves if
    /// they are new to the map.
    pub fn add_road(&mut self, city1: &[u8], city2: &[u8], length: u32, year: i32) -> MapResult<()> {
        if !is_valid_city_name(city1) || !is_valid_city_name(city2) {
            return Err(MapError::InvalidCityName);
        }
        if !is_valid_length(length) {
            return Err(MapError::InvalidLength);
        }
        if !is_valid_year(year) {
            return Err(MapError::InvalidYear);
        }
        if city1 == city2 {
            return Err(MapError::SameCity);
        }
        // Reject a duplicate edge before creating anything, so a failed call
        // leaves no freshly minted city behind.
        if let (Some(a), Some(b)) = (self.graph.city_id(city1), self.graph.city_id(city2)) {
            if self.graph.road_between(a, b).is_some() {
                return Err(MapError::DuplicateRoad);
            }
        }
        let a = self.graph.get_or_add_city(city1)?;
        let b = self.graph.get_or_add_city(city2)?;
        self.graph.add_road(a, b, length, year)?;
        debug!(
            "added road {}–{} length {length} year {year}",
            self.graph.city(a).name_lossy(),
            self.graph.city(b).name_lossy(),
        );
        Ok(())
    }

    // ── repair_road ───────────────────────────────────────────────────────

    /// Move a road's year forward.  Equal year is accepted (repairing twice
    /// in one year is fine); going backwards is not.
    pub fn repair_road(&mut self, city1: &[u8], city2: &[u8], year: i32) -> MapResult<()> {
        if !is_valid_city_name(city1) || !is_valid_city_name(city2) {
            return Err(MapError::InvalidCityName);
        }
        if !is_valid_year(year) {
            return Err(MapError::InvalidYear);
        }
        if city1 == city2 {
            return Err(MapError::SameCity);
        }
        let road = self.lookup_road(city1, city2)?;
        if year < self.graph.road(road).year {
            return Err(MapError::YearRegression);
        }
        self.graph.road_mut(road).year = year;
        Ok(())
    }

    // ── new_route ─────────────────────────────────────────────────────────

    /// Create route `id` along the best path between two existing cities.
    /// The optimum must exist *and* be unique.
    pub fn new_route(&mut self, id: RouteId, city1: &[u8], city2: &[u8]) -> MapResult<()> {
        if !is_valid_city_name(city1) || !is_valid_city_name(city2) {
            return Err(MapError::InvalidCityName);
        }
        if city1 == city2 {
            return Err(MapError::SameCity);
        }
        if self.routes.get(id).is_some() {
            return Err(MapError::RouteExists(id));
        }
        let a = self.graph.city_id(city1).ok_or(MapError::UnknownCity)?;
        let b = self.graph.city_id(city2).ok_or(MapError::UnknownCity)?;

        let path = find_best_path(&self.graph, a, b, None, true)?;
        if !is_unambiguous(&self.graph, &path, a, b, None, true) {
            return Err(MapError::AmbiguousPath);
        }

        self.mark_roads(&path.roads, id);
        self.routes.insert(Route { id, first: a, last: b, roads: path.roads });
        debug!("created route {id} with cost ({}, {})", path.cost.length, path.cost.oldest_year);
        Ok(())
    }

    // ── extend_route ──────────────────────────────────────────────────────

    /// Extend route `id` to reach `city`, on whichever end yields the
    /// better extension.  The extension must avoid every city the route
    /// already visits, and a tie — between the two ends, or within the
    /// winning end — is a rejection.
    pub fn extend_route(&mut self, id: RouteId, city: &[u8]) -> MapResult<()> {
        if !is_valid_city_name(city) {
            return Err(MapError::InvalidCityName);
        }
        let route = self.routes.get(id).ok_or(MapError::NoSuchRoute(id))?;
        let target = self.graph.city_id(city).ok_or(MapError::UnknownCity)?;
        if route.contains_city(&self.graph, target) {
            return Err(MapError::CityOnRoute);
        }

        let excluded = route.roads.as_slice();
        let to_first =
            find_best_path(&self.graph, target, route.first, Some(excluded), true).ok();
        let from_last =
            find_best_path(&self.graph, route.last, target, Some(excluded), true).ok();

        // Pick a side, then hold the winner to the uniqueness bar.
        let (path, from_last) = match (to_first, from_last) {
            (None, None) => return Err(MapError::NoPath),
            (Some(p), None) => {
                self.require_unique(&p, target, route.first, excluded)?;
                (p, false)
            }
            (None, Some(p)) => {
                self.require_unique(&p, route.last, target, excluded)?;
                (p, true)
            }
            (Some(front), Some(back)) => {
                if front.cost.better_than(&back.cost) {
                    self.require_unique(&front, target, route.first, excluded)?;
                    (front, false)
                } else if back.cost.better_than(&front.cost) {
                    self.require_unique(&back, route.last, target, excluded)?;
                    (back, true)
                } else {
                    // The two ends tie: no unambiguous extension exists.
                    return Err(MapError::AmbiguousPath);
                }
            }
        };

        self.mark_roads(&path.roads, id);
        let route = self.routes.get_mut(id).expect("checked above");
        if from_last {
            route.extend_back(path.roads, target);
        } else {
            route.extend_front(path.roads, target);
        }
        debug!("extended route {id} {}", if from_last { "forward" } else { "backward" });
        Ok(())
    }

    // ── remove_road ───────────────────────────────────────────────────────

    /// Remove the road between two cities.  Every route over it is patched
    /// with a locally optimal detour — all of them at once, or none: if any
    /// route's detour is missing or ambiguous, nothing changes.
    pub fn remove_road(&mut self, city1: &[u8], city2: &[u8]) -> MapResult<()> {
        if !is_valid_city_name(city1) || !is_valid_city_name(city2) {
            return Err(MapError::InvalidCityName);
        }
        if city1 == city2 {
            return Err(MapError::SameCity);
        }
        let road_id = self.lookup_road(city1, city2)?;

        let mut route_ids: Vec<RouteId> =
            self.graph.road(road_id).routes.iter().copied().collect();
        route_ids.sort_unstable();

        // Phase 1: find and verify a detour per route, marking each
        // accepted detour's roads as we go.  A failure unwinds the marks.
        let mut patches: Vec<(RouteId, usize, Vec<RoadId>)> = Vec::with_capacity(route_ids.len());
        for &rid in &route_ids {
            let route = self.routes.get(rid).expect("route listed on road");
            let (pos, entry) = route
                .locate_road(&self.graph, road_id)
                .expect("road listed on route");
            let src = entry;
            let dst = self.graph.road(road_id).other_end(entry);

            let found = match find_best_path(&self.graph, src, dst, Some(&route.roads), false) {
                Ok(p) => p,
                Err(_) => {
                    self.unmark_patches(&patches);
                    return Err(MapError::NoPath);
                }
            };
            if !is_unambiguous(&self.graph, &found, src, dst, Some(&route.roads), false) {
                self.unmark_patches(&patches);
                return Err(MapError::AmbiguousPath);
            }
            self.mark_roads(&found.roads, rid);
            patches.push((rid, pos, found.roads));
        }

        // Phase 2: all detours hold — splice them in and drop the road.
        let patched = patches.len();
        for (rid, pos, roads) in patches {
            self.routes
                .get_mut(rid)
                .expect("route listed on road")
                .splice_replacement(pos, roads);
        }
        self.graph.remove_road(road_id);
        debug!(
            "removed road {}–{} ({patched} route(s) rerouted)",
            String::from_utf8_lossy(city1),
            String::from_utf8_lossy(city2),
        );
        Ok(())
    }

    // ── remove_route ──────────────────────────────────────────────────────

    /// Delete route `id`.  Its roads and cities stay on the map.
    pub fn remove_route(&mut self, id: RouteId) -> MapResult<()> {
        let route = self.routes.take(id).ok_or(MapError::NoSuchRoute(id))?;
        for &r in &route.roads {
            self.graph.road_mut(r).routes.remove(&id);
        }
        debug!("removed route {id}");
        Ok(())
    }

    // ── Shared helpers ────────────────────────────────────────────────────

    /// Both cities and the road between them must exist.
    fn lookup_road(&self, city1: &[u8], city2: &[u8]) -> MapResult<RoadId> {
        let a = self.graph.city_id(city1).ok_or(MapError::UnknownCity)?;
        let b = self.graph.city_id(city2).ok_or(MapError::UnknownCity)?;
        self.graph.road_between(a, b).ok_or(MapError::UnknownRoad)
    }

    fn require_unique(
        &self,
        path: &FoundPath,
        src: CityId,
        dst: CityId,
        excluded: &[RoadId],
    ) -> MapResult<()> {
        if is_unambiguous(&self.graph, path, src, dst, Some(excluded), true) {
            Ok(())
        } else {
            Err(MapError::AmbiguousPath)
        }
    }

    /// Record `id` on every road of a committed path.
    pub(crate) fn mark_roads(&mut self, roads: &[RoadId], id: RouteId) {
        for &r in roads {
            self.graph.road_mut(r).routes.insert(id);
        }
    }

    fn unmark_patches(&mut self, patches: &[(RouteId, usize, Vec<RoadId>)]) {
        for (rid, _, roads) in patches {
            for &r in roads {
                self.graph.road_mut(r).routes.remove(rid);
            }
        }
    }
}
