//! Greedy nearest-neighbour route planner for Harvest deliveries.
//!
//! This crate provides [`NearestNeighbourPlanner`], the default implementation
//! of the [`RoutePlanner`](harvest_core::RoutePlanner) trait. Starting at the
//! farmer's location it repeatedly moves to the closest unvisited stop until
//! every routable stop has been visited.
//!
//! The construction is O(n²) in the number of stops with no backtracking and
//! no improvement pass, which suits the tens of orders a farmer fulfils in one
//! trip. Ties go to the stop supplied first, so identical requests always
//! produce identical routes.

#![forbid(unsafe_code)]

mod planner;

pub use planner::NearestNeighbourPlanner;
