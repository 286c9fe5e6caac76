//! `atlas-map` — the public verbs of the atlas road-map engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`atlas`]    | `Atlas`: graph + route catalog, the mutating verbs      |
//! | [`route`]    | `Route`: an oriented simple path with splice/extend     |
//! | [`store`]    | `RouteStore`: the fixed 999-slot catalog                |
//! | [`describe`] | route-description rendering                             |
//! | [`build`]    | `RoadLeg`, route construction from a description        |
//! | [`error`]    | `MapError`, `MapResult<T>`                              |
//!
//! # Transactionality
//!
//! Every verb either succeeds completely or leaves the map exactly as it
//! found it.  Verbs reach that guarantee by validating and planning —
//! including all pathfinding — before publishing the first mutation; the
//! one exception is `remove_road`, where per-route replacement marking
//! interleaves with the per-route searches and a failure unwinds the marks
//! accumulated so far.

pub mod atlas;
pub mod build;
pub mod describe;
pub mod error;
pub mod route;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use atlas::Atlas;
pub use build::RoadLeg;
pub use error::{MapError, MapResult};
pub use route::Route;
pub use store::RouteStore;
