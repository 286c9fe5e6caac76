//! Map-verb error type.
//!
//! Variants fall into three classes, mirroring how the textual layer
//! reports them (all three read as a plain per-line failure there):
//! malformed input, precondition violations, and algorithmic rejections
//! (no path / ambiguous optimum).

use thiserror::Error;

use atlas_core::RouteId;
use atlas_graph::GraphError;
use atlas_route::RouteError;

/// Errors produced by the map verbs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    // ── Malformed input ───────────────────────────────────────────────────
    #[error("invalid city name")]
    InvalidCityName,

    #[error("road length must be positive")]
    InvalidLength,

    #[error("year 0 does not exist")]
    InvalidYear,

    #[error("malformed route description")]
    MalformedDescription,

    // ── Precondition violations ───────────────────────────────────────────
    #[error("the two cities are the same")]
    SameCity,

    #[error("no such city")]
    UnknownCity,

    #[error("no road between these cities")]
    UnknownRoad,

    #[error("a road between these cities already exists")]
    DuplicateRoad,

    #[error("repair year precedes the road's current year")]
    YearRegression,

    #[error("route {0} already exists")]
    RouteExists(RouteId),

    #[error("route {0} does not exist")]
    NoSuchRoute(RouteId),

    #[error("route already passes through this city")]
    CityOnRoute,

    #[error("an existing road contradicts the description")]
    RoadMismatch,

    // ── Algorithmic rejections ────────────────────────────────────────────
    #[error("no usable path between the requested cities")]
    NoPath,

    #[error("the best path is not defined unambiguously")]
    AmbiguousPath,
}

pub type MapResult<T> = Result<T, MapError>;

impl From<GraphError> for MapError {
    fn from(e: GraphError) -> MapError {
        match e {
            GraphError::InvalidCityName => MapError::InvalidCityName,
            GraphError::SameCity => MapError::SameCity,
            GraphError::DuplicateRoad => MapError::DuplicateRoad,
        }
    }
}

impl From<RouteError> for MapError {
    fn from(e: RouteError) -> MapError {
        match e {
            RouteError::NoPath { .. } => MapError::NoPath,
        }
    }
}
