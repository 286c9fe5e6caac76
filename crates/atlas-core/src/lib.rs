//! `atlas-core` — foundational types for the `atlas` road-map engine.
//!
//! This crate is a dependency of every other `atlas-*` crate.  It
//! intentionally has no `atlas-*` dependencies and no required external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `CityId`, `RoadId`, `RouteId`                        |
//! | [`validate`] | city-name and numeric validators, decimal parsers    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public ID types.    |

pub mod ids;
pub mod validate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CityId, RoadId, RouteId};
pub use validate::{
    is_valid_city_name, is_valid_length, is_valid_year, parse_route_id, parse_unsigned,
    parse_year,
};
