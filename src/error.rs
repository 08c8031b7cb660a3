//! Error taxonomy for the route geometry pipeline.

use thiserror::Error;

/// Failures raised by the codec, distance, and segmentation stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The encoded polyline violates the encoding grammar or decodes to
    /// coordinates outside the valid range.
    #[error("malformed polyline: {0}")]
    MalformedPolyline(String),

    #[error("coordinate out of range: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("route has no points")]
    EmptyRoute,

    /// No route point reaches the segment end mark. Indicates a defect in the
    /// caller-supplied cumulative distances, not a user error.
    #[error("no route point reaches segment end at mile {end_mile}")]
    NoSegmentBoundary { end_mile: f64 },

    #[error("route has {points} points but {distances} cumulative distances")]
    MismatchedDistances { points: usize, distances: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures from a [`crate::traits::RouteProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned no route: {0}")]
    NoRoute(String),

    #[error("provider geometry is unusable: {0}")]
    Geometry(#[from] RouteError),

    #[error("all {attempted} route providers failed")]
    Exhausted { attempted: usize },
}

/// The single failure surfaced to callers of the planner.
#[derive(Debug, Error)]
pub enum PlanError {
    /// No usable route: the provider failed, or its geometry was empty or
    /// malformed.
    #[error("unable to find a route")]
    RouteUnavailable(#[source] ProviderError),

    /// An internal invariant broke or the configuration is unusable.
    #[error("route planning failed: {0}")]
    Internal(#[source] RouteError),
}

impl From<ProviderError> for PlanError {
    fn from(err: ProviderError) -> Self {
        PlanError::RouteUnavailable(err)
    }
}

impl From<RouteError> for PlanError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::MalformedPolyline(_)
            | RouteError::EmptyRoute
            | RouteError::InvalidCoordinate { .. } => {
                PlanError::RouteUnavailable(ProviderError::Geometry(err))
            }
            RouteError::NoSegmentBoundary { .. }
            | RouteError::MismatchedDistances { .. }
            | RouteError::InvalidConfig(_) => PlanError::Internal(err),
        }
    }
}
