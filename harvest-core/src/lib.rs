//! Core domain types for the Harvest delivery route planner.
//!
//! Farmers select pending orders and ask for a visiting order starting from
//! their registered location. This crate defines the data passed across that
//! boundary and the [`RoutePlanner`] trait implemented by planners:
//!
//! - [`Location`] is a caller-supplied, possibly incomplete coordinate pair;
//!   [`GeoPoint`] is a validated one.
//! - [`CandidateStop`] becomes a [`Stop`] once its location validates;
//!   unroutable candidates are excluded, never rejected.
//! - [`Route`] is the ordered result, and [`RouteRendering`] its
//!   provider-agnostic view for link adapters.
//! - [`DistanceMetric`] abstracts how far apart two points are.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod metric;
mod planner;
mod point;
mod route;
mod stop;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use metric::{DistanceMetric, HaversineMetres, SquaredDegrees};
pub use planner::{Diagnostics, PlanError, PlanRequest, PlanResponse, RoutableSet, RoutePlanner};
pub use point::{GeoPoint, GeoPointError, Location};
pub use route::{Route, RouteRendering};
pub use stop::{CandidateStop, Stop, StopId};
