//! Directions link adapter for planned Harvest routes.
//!
//! This crate turns a [`RouteRendering`](harvest_core::RouteRendering) into a
//! turn-by-turn directions URL using the Google Maps `dir` grammar:
//!
//! ```text
//! {base}&origin=LAT,LON&destination=LAT,LON&waypoints=LAT,LON|LAT,LON|...
//! ```
//!
//! Links are byte-compatible with the ones farmers have already bookmarked
//! and shared, including the way coordinates are printed (see
//! [`format_legacy_coordinate`]).

#![forbid(unsafe_code)]

mod directions;
mod format;

pub use directions::{DEFAULT_BASE_URL, DirectionsLink, DirectionsLinkConfig, LinkError};
pub use format::format_legacy_coordinate;
