//! Unit and scenario tests for atlas-map.
//!
//! The `scenarios` module replays full command sequences from user-reported
//! regressions and checks the final route descriptions byte for byte.

#[cfg(test)]
mod helpers {
    use atlas_core::RouteId;
    use crate::Atlas;

    pub fn rid(n: u32) -> RouteId {
        RouteId::new(n).unwrap()
    }

    /// Route description as a `String` for readable assertions.
    pub fn desc(atlas: &Atlas, n: u32) -> String {
        String::from_utf8(atlas.route_description(rid(n))).unwrap()
    }

    pub fn add(atlas: &mut Atlas, a: &str, b: &str, length: u32, year: i32) {
        atlas.add_road(a.as_bytes(), b.as_bytes(), length, year).unwrap();
    }
}

// ── add_road / repair_road ────────────────────────────────────────────────────

#[cfg(test)]
mod roads {
    use super::helpers::add;
    use crate::{Atlas, MapError};

    #[test]
    fn add_creates_missing_cities() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "Lublin", "Radom", 120, 1999);
        assert_eq!(atlas.graph().city_count(), 2);
        assert_eq!(atlas.graph().road_count(), 1);
    }

    #[test]
    fn add_is_commutative_and_duplicates_fail_both_ways() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        assert_eq!(atlas.add_road(b"a", b"b", 2, 2001), Err(MapError::DuplicateRoad));
        assert_eq!(atlas.add_road(b"b", b"a", 2, 2001), Err(MapError::DuplicateRoad));
        // The duplicate attempt must not have touched the stored road.
        let a = atlas.graph().city_id(b"a").unwrap();
        let b = atlas.graph().city_id(b"b").unwrap();
        let road = atlas.graph().road(atlas.graph().road_between(a, b).unwrap());
        assert_eq!((road.length, road.year), (1, 2000));
    }

    #[test]
    fn failed_add_leaves_no_new_city() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        // 'c' appears only in a rejected call (bad year) — it must not exist.
        assert_eq!(atlas.add_road(b"a", b"c", 1, 0), Err(MapError::InvalidYear));
        assert_eq!(atlas.graph().city_count(), 2);
        assert!(atlas.graph().city_id(b"c").is_none());
    }

    #[test]
    fn add_validation() {
        let mut atlas = Atlas::new();
        assert_eq!(atlas.add_road(b"", b"b", 1, 2000), Err(MapError::InvalidCityName));
        assert_eq!(atlas.add_road(b"a;b", b"b", 1, 2000), Err(MapError::InvalidCityName));
        assert_eq!(atlas.add_road(b"a", b"a", 1, 2000), Err(MapError::SameCity));
        assert_eq!(atlas.add_road(b"a", b"b", 0, 2000), Err(MapError::InvalidLength));
        assert_eq!(atlas.add_road(b"a", b"b", 1, 0), Err(MapError::InvalidYear));
        assert_eq!(atlas.graph().city_count(), 0);
    }

    #[test]
    fn repair_year_is_monotonic_with_equality_allowed() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "X", "Y", 1, 2020);
        assert_eq!(atlas.repair_road(b"X", b"Y", 2019), Err(MapError::YearRegression));
        atlas.repair_road(b"X", b"Y", 2020).unwrap();
        atlas.repair_road(b"X", b"Y", 2020).unwrap();
        atlas.repair_road(b"Y", b"X", 2021).unwrap();
        let x = atlas.graph().city_id(b"X").unwrap();
        let y = atlas.graph().city_id(b"Y").unwrap();
        assert_eq!(atlas.graph().road(atlas.graph().road_between(x, y).unwrap()).year, 2021);
    }

    #[test]
    fn repair_preconditions() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "X", "Y", 1, 2000);
        add(&mut atlas, "Y", "Z", 1, 2000);
        assert_eq!(atlas.repair_road(b"X", b"W", 2005), Err(MapError::UnknownCity));
        assert_eq!(atlas.repair_road(b"X", b"Z", 2005), Err(MapError::UnknownRoad));
        assert_eq!(atlas.repair_road(b"X", b"Y", 0), Err(MapError::InvalidYear));
    }
}

// ── new_route / describe ──────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use super::helpers::{add, desc, rid};
    use crate::{Atlas, MapError};

    #[test]
    fn fresh_map_has_only_empty_descriptions() {
        let atlas = Atlas::new();
        for n in [1, 2, 500, 998, 999] {
            assert_eq!(desc(&atlas, n), "");
        }
    }

    #[test]
    fn new_route_renders_in_argument_order() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        add(&mut atlas, "b", "c", 2, 1995);
        atlas.new_route(rid(7), b"c", b"a").unwrap();
        // Orientation follows the call: c first.
        assert_eq!(desc(&atlas, 7), "7;c;2;1995;b;1;2000;a");
    }

    #[test]
    fn new_route_preconditions() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        assert_eq!(atlas.new_route(rid(1), b"a", b"a"), Err(MapError::SameCity));
        assert_eq!(atlas.new_route(rid(1), b"a", b"zzz"), Err(MapError::UnknownCity));
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        assert_eq!(atlas.new_route(rid(1), b"b", b"a"), Err(MapError::RouteExists(rid(1))));
    }

    #[test]
    fn unreachable_pair_is_rejected() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        add(&mut atlas, "c", "d", 1, 2000);
        assert_eq!(atlas.new_route(rid(1), b"a", b"c"), Err(MapError::NoPath));
        assert_eq!(desc(&atlas, 1), "");
    }

    #[test]
    fn equal_cost_disjoint_ways_are_rejected() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "A", "p", 1, 2000);
        add(&mut atlas, "p", "B", 1, 2000);
        add(&mut atlas, "A", "q", 1, 2000);
        add(&mut atlas, "q", "B", 1, 2000);
        assert_eq!(atlas.new_route(rid(1), b"A", b"B"), Err(MapError::AmbiguousPath));
        assert_eq!(desc(&atlas, 1), "");
    }

    #[test]
    fn remove_route_clears_the_slot_and_the_road_marks() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(9), b"a", b"b").unwrap();
        assert_ne!(desc(&atlas, 9), "");
        atlas.remove_route(rid(9)).unwrap();
        assert_eq!(desc(&atlas, 9), "");
        assert_eq!(atlas.remove_route(rid(9)), Err(MapError::NoSuchRoute(rid(9))));
        // No stale membership: the road can now go away without a detour.
        atlas.remove_road(b"a", b"b").unwrap();
        assert_eq!(atlas.graph().road_count(), 0);
    }

    #[test]
    fn describe_then_build_reproduces_the_route() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 3, 1990);
        add(&mut atlas, "b", "c", 4, 2005);
        atlas.new_route(rid(42), b"a", b"c").unwrap();
        let description = desc(&atlas, 42);

        // A fresh map with the same roads, fed the description's legs.
        let mut fresh = Atlas::new();
        add(&mut fresh, "a", "b", 3, 1990);
        add(&mut fresh, "b", "c", 4, 2005);
        fresh
            .build_route(
                rid(42),
                &[
                    crate::RoadLeg { city_a: b"a", length: 3, year: 1990, city_b: b"b" },
                    crate::RoadLeg { city_a: b"b", length: 4, year: 2005, city_b: b"c" },
                ],
            )
            .unwrap();
        assert_eq!(desc(&fresh, 42), description);
    }
}

// ── extend_route ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod extension {
    use super::helpers::{add, desc, rid};
    use crate::{Atlas, MapError};

    #[test]
    fn preconditions() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        add(&mut atlas, "b", "c", 1, 2000);
        assert_eq!(atlas.extend_route(rid(1), b"c"), Err(MapError::NoSuchRoute(rid(1))));
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        assert_eq!(atlas.extend_route(rid(1), b"zzz"), Err(MapError::UnknownCity));
        // Both endpoints and interior cities count as "already on the route".
        assert_eq!(atlas.extend_route(rid(1), b"a"), Err(MapError::CityOnRoute));
        assert_eq!(atlas.extend_route(rid(1), b"b"), Err(MapError::CityOnRoute));
    }

    #[test]
    fn extends_on_the_cheaper_end() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        // d is 2 from b but 9 from a: extending from the last city wins.
        add(&mut atlas, "b", "d", 2, 2000);
        add(&mut atlas, "a", "d", 9, 2000);
        atlas.extend_route(rid(1), b"d").unwrap();
        assert_eq!(desc(&atlas, 1), "1;a;1;2000;b;2;2000;d");
    }

    #[test]
    fn extends_backwards_updating_the_first_city() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        add(&mut atlas, "d", "a", 2, 2000);
        add(&mut atlas, "d", "b", 9, 2000);
        atlas.extend_route(rid(1), b"d").unwrap();
        assert_eq!(desc(&atlas, 1), "1;d;2;2000;a;1;2000;b");
    }

    #[test]
    fn tie_between_the_two_ends_rejects() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        add(&mut atlas, "d", "a", 5, 2000);
        add(&mut atlas, "d", "b", 5, 2000);
        assert_eq!(atlas.extend_route(rid(1), b"d"), Err(MapError::AmbiguousPath));
        assert_eq!(desc(&atlas, 1), "1;a;1;2000;b");
    }

    #[test]
    fn ambiguous_winning_side_rejects() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        // Two equal ways d→b (via x and via y), and a clearly worse way to a.
        add(&mut atlas, "d", "x", 1, 2000);
        add(&mut atlas, "x", "b", 1, 2000);
        add(&mut atlas, "d", "y", 1, 2000);
        add(&mut atlas, "y", "b", 1, 2000);
        add(&mut atlas, "d", "a", 50, 2000);
        assert_eq!(atlas.extend_route(rid(1), b"d"), Err(MapError::AmbiguousPath));
        assert_eq!(desc(&atlas, 1), "1;a;1;2000;b");
    }

    #[test]
    fn extension_must_avoid_cities_already_visited() {
        // Route a—b—c; the only way to d goes back through b: rejected.
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        add(&mut atlas, "b", "c", 1, 2000);
        atlas.new_route(rid(1), b"a", b"c").unwrap();
        add(&mut atlas, "b", "d", 1, 2000);
        assert_eq!(atlas.extend_route(rid(1), b"d"), Err(MapError::NoPath));
    }
}

// ── remove_road ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod removal {
    use super::helpers::{add, desc, rid};
    use crate::{Atlas, MapError};

    #[test]
    fn plain_removal_without_routes() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.remove_road(b"a", b"b").unwrap();
        assert_eq!(atlas.graph().road_count(), 0);
        assert_eq!(atlas.remove_road(b"a", b"b"), Err(MapError::UnknownRoad));
        assert_eq!(atlas.remove_road(b"a", b"zzz"), Err(MapError::UnknownCity));
    }

    #[test]
    fn route_is_patched_with_a_detour() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        add(&mut atlas, "a", "m", 1, 2001);
        add(&mut atlas, "m", "b", 1, 2002);
        atlas.remove_road(b"a", b"b").unwrap();
        assert_eq!(desc(&atlas, 1), "1;a;1;2001;m;1;2002;b");
        // The removed road is really gone.
        let a = atlas.graph().city_id(b"a").unwrap();
        let b = atlas.graph().city_id(b"b").unwrap();
        assert!(atlas.graph().road_between(a, b).is_none());
    }

    #[test]
    fn detour_orientation_follows_the_route() {
        // Route runs c→a over the road a—c; the detour must keep c first.
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "c", 4, 2000);
        atlas.new_route(rid(3), b"c", b"a").unwrap();
        add(&mut atlas, "c", "m", 1, 2000);
        add(&mut atlas, "m", "a", 1, 2000);
        atlas.remove_road(b"a", b"c").unwrap();
        assert_eq!(desc(&atlas, 3), "3;c;1;2000;m;1;2000;a");
    }

    #[test]
    fn all_routes_over_the_road_are_patched_atomically() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "p", "q", 1, 2000);
        atlas.new_route(rid(1), b"p", b"q").unwrap();
        atlas.new_route(rid(2), b"q", b"p").unwrap();
        add(&mut atlas, "p", "r", 1, 2000);
        add(&mut atlas, "r", "q", 1, 2000);
        atlas.remove_road(b"p", b"q").unwrap();
        assert_eq!(desc(&atlas, 1), "1;p;1;2000;r;1;2000;q");
        assert_eq!(desc(&atlas, 2), "2;q;1;2000;r;1;2000;p");
    }

    #[test]
    fn unpatchable_route_blocks_the_removal() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "p", "q", 1, 2000);
        atlas.new_route(rid(1), b"p", b"q").unwrap();
        // No detour exists at all.
        assert_eq!(atlas.remove_road(b"p", b"q"), Err(MapError::NoPath));
        assert_eq!(desc(&atlas, 1), "1;p;1;2000;q");
        assert_eq!(atlas.graph().road_count(), 1);
    }

    #[test]
    fn ambiguous_detour_blocks_the_removal() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "p", "q", 1, 2000);
        atlas.new_route(rid(1), b"p", b"q").unwrap();
        add(&mut atlas, "p", "r", 1, 2000);
        add(&mut atlas, "r", "q", 1, 2000);
        add(&mut atlas, "p", "s", 1, 2000);
        add(&mut atlas, "s", "q", 1, 2000);
        assert_eq!(atlas.remove_road(b"p", b"q"), Err(MapError::AmbiguousPath));
        assert_eq!(desc(&atlas, 1), "1;p;1;2000;q");
    }

    #[test]
    fn patched_route_is_still_a_simple_path() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        add(&mut atlas, "b", "c", 1, 2000);
        atlas.new_route(rid(1), b"a", b"c").unwrap();
        add(&mut atlas, "a", "m", 1, 2000);
        add(&mut atlas, "m", "b", 1, 2000);
        atlas.remove_road(b"a", b"b").unwrap();

        let route = atlas.route(rid(1)).unwrap();
        let cities: Vec<_> = route.cities(atlas.graph()).collect();
        let distinct: std::collections::HashSet<_> = cities.iter().copied().collect();
        assert_eq!(distinct.len(), cities.len(), "walk revisits a city");
        assert_eq!(cities.first(), Some(&route.first));
        assert_eq!(cities.last(), Some(&route.last));
    }

    #[test]
    fn partial_failure_unwinds_earlier_patch_marks() {
        // Route 1 (p—q) has a detour p—m—r—q; route 2 (p—q—r) has none,
        // because its detour may not pass through r, a city it visits.
        // Removal must fail as a whole, and the marks route 1's accepted
        // detour left on p—m, m—r, r—q must be unwound.
        let mut atlas = Atlas::new();
        add(&mut atlas, "p", "q", 1, 2000);
        add(&mut atlas, "q", "r", 1, 2000);
        atlas.new_route(rid(1), b"p", b"q").unwrap();
        atlas.new_route(rid(2), b"p", b"r").unwrap(); // p—q—r
        add(&mut atlas, "p", "m", 1, 2000);
        add(&mut atlas, "m", "r", 1, 2000);

        assert_eq!(atlas.remove_road(b"p", b"q"), Err(MapError::NoPath));
        assert_eq!(desc(&atlas, 1), "1;p;1;2000;q");
        assert_eq!(desc(&atlas, 2), "2;p;1;2000;q;1;2000;r");

        // If a stale route-1 mark survived on p—m, this removal would try
        // to patch route 1 — which never traverses p—m — instead of going
        // through untouched.
        atlas.remove_road(b"p", b"m").unwrap();
        assert_eq!(desc(&atlas, 1), "1;p;1;2000;q");
        assert_eq!(desc(&atlas, 2), "2;p;1;2000;q;1;2000;r");
    }
}

// ── build_route (description form) ────────────────────────────────────────────

#[cfg(test)]
mod build {
    use super::helpers::{add, desc, rid};
    use crate::{Atlas, MapError, RoadLeg};

    fn leg<'a>(a: &'a str, length: u32, year: i32, b: &'a str) -> RoadLeg<'a> {
        RoadLeg { city_a: a.as_bytes(), length, year, city_b: b.as_bytes() }
    }

    #[test]
    fn materialises_cities_and_roads() {
        let mut atlas = Atlas::new();
        atlas
            .build_route(rid(5), &[leg("a", 1, 2000, "b"), leg("b", 2, 2001, "c")])
            .unwrap();
        assert_eq!(atlas.graph().city_count(), 3);
        assert_eq!(atlas.graph().road_count(), 2);
        assert_eq!(desc(&atlas, 5), "5;a;1;2000;b;2;2001;c");
    }

    #[test]
    fn reuses_matching_roads_and_applies_the_year() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 1990);
        atlas
            .build_route(rid(5), &[leg("a", 1, 2000, "b"), leg("b", 2, 2001, "c")])
            .unwrap();
        // The existing road was repaired up to the description's year.
        let a = atlas.graph().city_id(b"a").unwrap();
        let b = atlas.graph().city_id(b"b").unwrap();
        assert_eq!(atlas.graph().road(atlas.graph().road_between(a, b).unwrap()).year, 2000);
        assert_eq!(atlas.graph().road_count(), 2);
    }

    #[test]
    fn equal_year_reuse_is_accepted() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.build_route(rid(5), &[leg("a", 1, 2000, "b")]).unwrap();
        assert_eq!(desc(&atlas, 5), "5;a;1;2000;b");
    }

    #[test]
    fn revisiting_a_city_fails_and_rolls_back() {
        let mut atlas = Atlas::new();
        let legs = [leg("A", 1, 10, "B"), leg("B", 1, 10, "A")];
        assert_eq!(atlas.build_route(rid(1), &legs), Err(MapError::MalformedDescription));
        assert_eq!(atlas.graph().city_count(), 0);
        assert_eq!(atlas.graph().road_count(), 0);
        assert_eq!(desc(&atlas, 1), "");
    }

    #[test]
    fn length_mismatch_fails_without_side_effects() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 7, 2000);
        let legs = [leg("a", 8, 2005, "b"), leg("b", 1, 2005, "c")];
        assert_eq!(atlas.build_route(rid(1), &legs), Err(MapError::RoadMismatch));
        assert_eq!(atlas.graph().city_count(), 2);
        assert_eq!(atlas.graph().road_count(), 1);
    }

    #[test]
    fn older_year_than_existing_road_fails_without_repair() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 7, 2000);
        let legs = [leg("a", 7, 1999, "b")];
        assert_eq!(atlas.build_route(rid(1), &legs), Err(MapError::RoadMismatch));
        let a = atlas.graph().city_id(b"a").unwrap();
        let b = atlas.graph().city_id(b"b").unwrap();
        assert_eq!(atlas.graph().road(atlas.graph().road_between(a, b).unwrap()).year, 2000);
    }

    #[test]
    fn broken_chain_fails() {
        let mut atlas = Atlas::new();
        let legs = [leg("a", 1, 2000, "b"), leg("x", 1, 2000, "c")];
        assert_eq!(atlas.build_route(rid(1), &legs), Err(MapError::MalformedDescription));
        assert_eq!(atlas.graph().city_count(), 0);
    }

    #[test]
    fn occupied_slot_fails_before_anything_else() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "a", "b", 1, 2000);
        atlas.new_route(rid(1), b"a", b"b").unwrap();
        let legs = [leg("x", 1, 2000, "y")];
        assert_eq!(atlas.build_route(rid(1), &legs), Err(MapError::RouteExists(rid(1))));
        assert!(atlas.graph().city_id(b"x").is_none());
    }

    #[test]
    fn built_route_participates_in_removal_repair() {
        let mut atlas = Atlas::new();
        atlas
            .build_route(rid(8), &[leg("a", 1, 2000, "b"), leg("b", 1, 2000, "c")])
            .unwrap();
        add(&mut atlas, "a", "m", 1, 2000);
        add(&mut atlas, "m", "b", 1, 2000);
        atlas.remove_road(b"a", b"b").unwrap();
        assert_eq!(desc(&atlas, 8), "8;a;1;2000;m;1;2000;b;1;2000;c");
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::helpers::{add, desc, rid};
    use crate::Atlas;

    /// Reroute after removal: the patched route must absorb the detour in
    /// traversal order.
    #[test]
    fn forum1_reroute_after_removal() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "poczatek", "a", 10, 2019);
        add(&mut atlas, "a", "c", 10, 2019);
        add(&mut atlas, "c", "koniec", 10, 2019);

        atlas.new_route(rid(1), b"poczatek", b"koniec").unwrap();

        add(&mut atlas, "poczatek", "koniec", 1, 2019);
        add(&mut atlas, "a", "b", 100, 2019);
        add(&mut atlas, "b", "c", 100, 2019);
        add(&mut atlas, "a", "koniec", 1, 2019);

        atlas.remove_road(b"a", b"c").unwrap();

        assert_eq!(
            desc(&atlas, 1),
            "1;poczatek;10;2019;a;100;2019;b;100;2019;c;10;2019;koniec"
        );
    }

    /// A repair can flip which of two equal-length ways is optimal: the
    /// newer oldest-road wins, and the stale tie disappears.
    #[test]
    fn repair_breaks_a_length_tie() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "A", "p", 1, 2000);
        add(&mut atlas, "p", "B", 1, 2000);
        add(&mut atlas, "A", "q", 1, 2000);
        add(&mut atlas, "q", "B", 1, 2000);
        // Dead tie: rejected.
        assert!(atlas.new_route(rid(1), b"A", b"B").is_err());

        atlas.repair_road(b"A", b"q", 2015).unwrap();
        atlas.repair_road(b"q", b"B", 2015).unwrap();
        atlas.new_route(rid(1), b"A", b"B").unwrap();
        assert_eq!(desc(&atlas, 1), "1;A;1;2015;q;1;2015;B");
    }

    /// Years before year 1 are ordinary values; the description carries the
    /// sign through.
    #[test]
    fn negative_years_round_trip() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "Roma", "Capua", 195, -312);
        atlas.new_route(rid(1), b"Roma", b"Capua").unwrap();
        assert_eq!(desc(&atlas, 1), "1;Roma;195;-312;Capua");
        assert!(atlas.repair_road(b"Roma", b"Capua", -400).is_err());
        atlas.repair_road(b"Roma", b"Capua", -100).unwrap();
        assert_eq!(desc(&atlas, 1), "1;Roma;195;-100;Capua");
    }

    /// Extension past an existing route, then a second route over the same
    /// cities picking the genuinely shortest way.
    #[test]
    fn forum3_extension_and_followup_route() {
        let mut atlas = Atlas::new();
        add(&mut atlas, "A", "B", 1, 2000);
        add(&mut atlas, "B", "C", 1, 2000);
        add(&mut atlas, "C", "D", 1, 2000);
        add(&mut atlas, "C", "E", 1, 2000);
        add(&mut atlas, "E", "F", 1, 2000);
        add(&mut atlas, "E", "D", 7, 2000);

        atlas.new_route(rid(10), b"A", b"D").unwrap();
        atlas.extend_route(rid(10), b"F").unwrap();
        assert_eq!(desc(&atlas, 10), "10;A;1;2000;B;1;2000;C;1;2000;D;7;2000;E;1;2000;F");

        atlas.new_route(rid(11), b"A", b"F").unwrap();
        assert_eq!(desc(&atlas, 11), "11;A;1;2000;B;1;2000;C;1;2000;E;1;2000;F");
    }
}
