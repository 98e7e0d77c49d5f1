//! Facade crate for the Harvest delivery route planner.
//!
//! This crate re-exports the core domain types and exposes the
//! nearest-neighbour planner and the directions link adapter behind feature
//! flags.

#![forbid(unsafe_code)]

pub use harvest_core::{
    CandidateStop, Diagnostics, DistanceMetric, GeoPoint, GeoPointError, HaversineMetres,
    Location, PlanError, PlanRequest, PlanResponse, RoutableSet, Route, RoutePlanner,
    RouteRendering, SquaredDegrees, Stop, StopId,
};

#[cfg(feature = "planner")]
pub use harvest_planner::NearestNeighbourPlanner;

#[cfg(feature = "links")]
pub use harvest_links::{
    DEFAULT_BASE_URL, DirectionsLink, DirectionsLinkConfig, LinkError, format_legacy_coordinate,
};
