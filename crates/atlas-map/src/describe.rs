//! Route-description rendering.
//!
//! The wire format is
//! `routeId;cityName;length;year;cityName;…;cityName` — decimal ASCII
//! numbers, raw octet city names, no trailing newline or semicolon.  An
//! empty slot renders as the empty string; the textual layer prints it
//! as a bare newline, which is the "no such route" answer.
//!
//! City names pass through as raw bytes; only the numbers go through
//! `Display`, so a description is byte-faithful to the names it contains
//! even when they are not valid UTF-8.

use atlas_core::RouteId;

use crate::atlas::Atlas;

impl Atlas {
    /// Render the description of route `id`, or an empty buffer if the
    /// slot is empty.
    pub fn route_description(&self, id: RouteId) -> Vec<u8> {
        let Some(route) = self.routes.get(id) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        push_decimal(&mut out, id.get());

        let mut curr = route.first;
        for &road_id in &route.roads {
            let road = self.graph.road(road_id);
            out.push(b';');
            out.extend_from_slice(&self.graph.city(curr).name);
            out.push(b';');
            push_decimal(&mut out, road.length);
            out.push(b';');
            push_decimal(&mut out, road.year);
            curr = road.other_end(curr);
        }
        out.push(b';');
        out.extend_from_slice(&self.graph.city(curr).name);
        out
    }
}

fn push_decimal(out: &mut Vec<u8>, value: impl std::fmt::Display) {
    out.extend_from_slice(value.to_string().as_bytes());
}
