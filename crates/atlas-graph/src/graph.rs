//! The `RoadGraph` arena and its structural operations.

use std::collections::BTreeMap;

use atlas_core::{CityId, RoadId, is_valid_city_name};

use crate::city::City;
use crate::error::{GraphError, GraphResult};
use crate::road::Road;

/// Arena storage for cities and roads plus the ordered city dictionary.
///
/// Structural invariants maintained by every operation:
///
/// - neighbour-map symmetry: a live road `r` joining `a` and `b` appears as
///   `a.neighbours[b.name] == r` and `b.neighbours[a.name] == r`, and
///   nowhere else;
/// - at most one road per unordered city pair;
/// - `index` maps exactly the names of the cities in the arena.
#[derive(Default)]
pub struct RoadGraph {
    /// City arena, indexed by `CityId`.  Cities are never removed.
    cities: Vec<City>,

    /// Road arena, indexed by `RoadId`.  `None` marks a removed road; slots
    /// are never reused.
    roads: Vec<Option<Road>>,

    /// Ordered dictionary: city name → `CityId`.
    index: BTreeMap<Box<[u8]>, CityId>,
}

impl RoadGraph {
    pub fn new() -> RoadGraph {
        RoadGraph::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of live (non-removed) roads.
    pub fn road_count(&self) -> usize {
        self.roads.iter().filter(|r| r.is_some()).count()
    }

    // ── City access ───────────────────────────────────────────────────────

    #[inline]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    /// Look a city up by name.
    pub fn city_id(&self, name: &[u8]) -> Option<CityId> {
        self.index.get(name).copied()
    }

    /// Look a city up, creating it if absent.  Fails only on an invalid
    /// name; creation itself cannot fail, which is what lets the map verbs
    /// validate first and then mutate without a rollback path.
    pub fn get_or_add_city(&mut self, name: &[u8]) -> GraphResult<CityId> {
        if !is_valid_city_name(name) {
            return Err(GraphError::InvalidCityName);
        }
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }
        let id = CityId(self.cities.len() as u32);
        self.cities.push(City::new(name));
        self.index.insert(name.into(), id);
        Ok(id)
    }

    /// All city IDs in byte-wise lexicographic name order.
    pub fn city_ids_by_name(&self) -> impl Iterator<Item = CityId> + '_ {
        self.index.values().copied()
    }

    // ── Road access ───────────────────────────────────────────────────────

    /// Panics if the road has been removed; a `RoadId` held by a route or a
    /// search always refers to a live road.
    #[inline]
    pub fn road(&self, id: RoadId) -> &Road {
        self.roads[id.index()].as_ref().expect("live road")
    }

    #[inline]
    pub fn road_mut(&mut self, id: RoadId) -> &mut Road {
        self.roads[id.index()].as_mut().expect("live road")
    }

    /// The unique road joining `a` and `b`, if any.
    pub fn road_between(&self, a: CityId, b: CityId) -> Option<RoadId> {
        let name_b = &self.cities[b.index()].name;
        self.cities[a.index()].neighbours.get(name_b.as_ref()).copied()
    }

    /// Roads incident to `city`, in neighbour-name order.
    pub fn neighbour_roads(&self, city: CityId) -> impl Iterator<Item = RoadId> + '_ {
        self.cities[city.index()].neighbours.values().copied()
    }

    // ── Structural mutation ───────────────────────────────────────────────

    /// Create a road between two existing cities and link it into both
    /// endpoints' neighbour maps.
    ///
    /// Value validation (length, year) is the caller's concern; this layer
    /// enforces only structure: distinct endpoints, no duplicate edge.
    pub fn add_road(&mut self, a: CityId, b: CityId, length: u32, year: i32) -> GraphResult<RoadId> {
        if a == b {
            return Err(GraphError::SameCity);
        }
        if self.road_between(a, b).is_some() {
            return Err(GraphError::DuplicateRoad);
        }
        let id = RoadId(self.roads.len() as u32);
        self.roads.push(Some(Road::new(a, b, length, year)));

        let name_a = self.cities[a.index()].name.clone();
        let name_b = self.cities[b.index()].name.clone();
        self.cities[a.index()].neighbours.insert(name_b, id);
        self.cities[b.index()].neighbours.insert(name_a, id);
        Ok(id)
    }

    /// Unlink a road from both endpoints' neighbour maps and tombstone its
    /// arena slot.  Returns the removed road.
    pub fn remove_road(&mut self, id: RoadId) -> Road {
        let road = self.roads[id.index()].take().expect("live road");
        let [a, b] = road.cities;
        let name_a = self.cities[a.index()].name.clone();
        let name_b = self.cities[b.index()].name.clone();
        self.cities[a.index()].neighbours.remove(name_b.as_ref());
        self.cities[b.index()].neighbours.remove(name_a.as_ref());
        road
    }
}
