//! Graph-storage error type.

use thiserror::Error;

/// Errors produced by `atlas-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid city name")]
    InvalidCityName,

    #[error("road endpoints are the same city")]
    SameCity,

    #[error("a road between these cities already exists")]
    DuplicateRoad,
}

pub type GraphResult<T> = Result<T, GraphError>;
