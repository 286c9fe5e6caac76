//! `atlas-graph` — city and road storage for the atlas road-map engine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`city`]  | `City` (owned name, ordered neighbour map)                 |
//! | [`road`]  | `Road` (endpoints, length, year, route membership)         |
//! | [`graph`] | `RoadGraph` (arenas, city dictionary, link/unlink)         |
//! | [`error`] | `GraphError`, `GraphResult<T>`                             |
//!
//! # Data layout
//!
//! Cities and roads live in arena `Vec`s owned by [`RoadGraph`] and are
//! addressed by `CityId` / `RoadId` indices.  Cities are never removed;
//! road slots are tombstoned on removal and never reused.  Each city keeps
//! an ordered map from *neighbour name* to the connecting `RoadId`, and the
//! graph keeps an ordered dictionary from *city name* to `CityId` — both
//! `BTreeMap`s, so iteration is byte-wise lexicographic by name.

pub mod city;
pub mod error;
pub mod graph;
pub mod road;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::City;
pub use error::{GraphError, GraphResult};
pub use graph::RoadGraph;
pub use road::Road;
