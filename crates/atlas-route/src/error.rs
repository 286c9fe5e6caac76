//! Search-subsystem error type.

use thiserror::Error;

use atlas_core::CityId;

/// Errors produced by `atlas-route`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    #[error("no path from {from} to {to}")]
    NoPath { from: CityId, to: CityId },
}

pub type RouteResult<T> = Result<T, RouteError>;
