//! `atlas-route` — best-path search for the atlas road-map engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`heap`]    | `DistHeap`: 1-indexed min-heap with external handles      |
//! | [`scratch`] | `SearchScratch`: per-call handle/predecessor side tables  |
//! | [`path`]    | `find_best_path`, `FoundPath`, `PathCost`                 |
//! | [`verify`]  | `is_unambiguous`: the optimum-uniqueness check            |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                            |
//!
//! # Cost model
//!
//! A path's cost is the pair `(total_length, oldest_year)` where
//! `oldest_year` is the minimum build/repair year over the path's roads.
//! Ordering is lexicographic with length ascending and year *descending*:
//! shorter wins, and among equal lengths the path whose oldest road is
//! newest wins.  Operations that commit a path additionally require the
//! optimum to be unique (see [`verify`]); a tie is a rejection, never a
//! coin toss.

pub mod error;
pub mod heap;
pub mod path;
pub mod scratch;
pub mod verify;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use heap::{DistHeap, HeapNode, SENTINEL_LENGTH, SENTINEL_YEAR};
pub use path::{FoundPath, PathCost, find_best_path};
pub use scratch::SearchScratch;
pub use verify::is_unambiguous;
