//! Route construction from a serialized description.
//!
//! The input is an ordered list of edge quadruples `(cityA, length, year,
//! cityB)` describing consecutive legs of a walk.  Every leg must either
//! match an existing road exactly (same length, year not newer than the
//! description's — the description's year is then applied, like a repair)
//! or describe a road to be created, materialising any cities the map has
//! not seen yet.
//!
//! The whole operation is a transaction: validation and planning run to
//! completion against the untouched map, and only a fully valid
//! description publishes anything.  A failing description therefore leaves
//! no new city, no new road, and no year change behind.

use log::debug;
use rustc_hash::FxHashSet;

use atlas_core::{RoadId, RouteId, is_valid_city_name, is_valid_length, is_valid_year};

use crate::atlas::Atlas;
use crate::error::{MapError, MapResult};
use crate::route::Route;

/// One leg of a route description: a road from `city_a` to `city_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadLeg<'a> {
    pub city_a: &'a [u8],
    pub length: u32,
    pub year: i32,
    pub city_b: &'a [u8],
}

/// What to do for one leg once the description has fully validated.
enum LegPlan {
    /// The road exists and matches; bump its year to the description's.
    Reuse { road: RoadId, repair_to: i32 },
    /// Create the road (and any of its cities the map lacks).
    Fresh,
}

impl Atlas {
    /// Install the walk described by `legs` as route `id`.
    pub fn build_route(&mut self, id: RouteId, legs: &[RoadLeg<'_>]) -> MapResult<()> {
        if self.routes.get(id).is_some() {
            return Err(MapError::RouteExists(id));
        }
        if legs.is_empty() {
            return Err(MapError::MalformedDescription);
        }

        // ── Validate: fields, chaining, simple-path property ──────────────
        let mut seen: FxHashSet<&[u8]> = FxHashSet::default();
        seen.insert(legs[0].city_a);
        for (i, leg) in legs.iter().enumerate() {
            if !is_valid_city_name(leg.city_a) || !is_valid_city_name(leg.city_b) {
                return Err(MapError::InvalidCityName);
            }
            if !is_valid_length(leg.length) {
                return Err(MapError::InvalidLength);
            }
            if !is_valid_year(leg.year) {
                return Err(MapError::InvalidYear);
            }
            if i > 0 && legs[i - 1].city_b != leg.city_a {
                return Err(MapError::MalformedDescription);
            }
            // A walk that revisits a city is not a route.
            if !seen.insert(leg.city_b) {
                return Err(MapError::MalformedDescription);
            }
        }

        // ── Plan: reconcile each leg against the untouched map ────────────
        let mut plans = Vec::with_capacity(legs.len());
        for leg in legs {
            let a = self.graph.city_id(leg.city_a);
            let b = self.graph.city_id(leg.city_b);
            let plan = match (a, b) {
                (Some(a), Some(b)) => match self.graph.road_between(a, b) {
                    Some(road_id) => {
                        let road = self.graph.road(road_id);
                        if road.length != leg.length || road.year > leg.year {
                            return Err(MapError::RoadMismatch);
                        }
                        LegPlan::Reuse { road: road_id, repair_to: leg.year }
                    }
                    None => LegPlan::Fresh,
                },
                _ => LegPlan::Fresh,
            };
            plans.push(plan);
        }

        // ── Commit: nothing below can fail ────────────────────────────────
        let mut roads = Vec::with_capacity(legs.len());
        for (leg, plan) in legs.iter().zip(plans) {
            match plan {
                LegPlan::Reuse { road, repair_to } => {
                    self.graph.road_mut(road).year = repair_to;
                    roads.push(road);
                }
                LegPlan::Fresh => {
                    let a = self.graph.get_or_add_city(leg.city_a)?;
                    let b = self.graph.get_or_add_city(leg.city_b)?;
                    roads.push(self.graph.add_road(a, b, leg.length, leg.year)?);
                }
            }
        }

        let first = self.graph.city_id(legs[0].city_a).expect("city created above");
        let last = self
            .graph
            .city_id(legs[legs.len() - 1].city_b)
            .expect("city created above");

        self.mark_roads(&roads, id);
        self.routes.insert(Route { id, first, last, roads });
        debug!("built route {id} from a {}-leg description", legs.len());
        Ok(())
    }
}
