//! Property-based tests for the nearest-neighbour planner.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical requests produce identical routes.
//! - **Completeness:** the route holds exactly the routable stops, once each.
//! - **Filtering:** stops missing a coordinate never appear in the route.
//! - **Greedy choice:** each step picks a stop no farther than any other
//!   unvisited stop, checked against a brute-force scan.
//! - **Tie-break:** among equally near stops the earliest supplied wins.


use std::collections::{HashMap, HashSet};

use harvest_core::{
    DistanceMetric, GeoPoint, Location, PlanRequest, RoutePlanner, SquaredDegrees, StopId,
};
use harvest_planner::NearestNeighbourPlanner;
use proptest::prelude::*;

use proptest_support::{FARM_LATITUDE, FARM_LONGITUDE, candidate_set_strategy, routable_ids};

fn farm() -> Location {
    Location::new(FARM_LATITUDE, FARM_LONGITUDE)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: planning is a pure function of its input.
    #[test]
    fn planning_is_deterministic(candidates in candidate_set_strategy(0, 25)) {
        let planner = NearestNeighbourPlanner::new();
        let first = planner
            .plan(PlanRequest::new(farm(), candidates.clone()))
            .expect("farm location is valid");
        let second = planner
            .plan(PlanRequest::new(farm(), candidates))
            .expect("farm location is valid");
        prop_assert_eq!(first.route, second.route);
        prop_assert_eq!(first.excluded, second.excluded);
    }

    /// Property: every routable stop appears exactly once and nothing else
    /// appears.
    #[test]
    fn route_is_a_permutation_of_routable_stops(candidates in candidate_set_strategy(0, 25)) {
        let expected: HashSet<StopId> = routable_ids(&candidates).into_iter().collect();
        let response = NearestNeighbourPlanner::new()
            .plan(PlanRequest::new(farm(), candidates.clone()))
            .expect("farm location is valid");

        let ids = response.route.stop_ids();
        let unique: HashSet<StopId> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len(), "duplicate stop in {:?}", ids);
        prop_assert_eq!(unique, expected);
        prop_assert_eq!(
            response.route.len() + response.excluded.len(),
            candidates.len()
        );
    }

    /// Property: stops missing either coordinate never reach the route.
    #[test]
    fn incomplete_stops_are_never_routed(candidates in candidate_set_strategy(1, 25)) {
        let incomplete: Vec<StopId> = candidates
            .iter()
            .filter(|stop| stop.location.latitude.is_none() || stop.location.longitude.is_none())
            .map(|stop| stop.id)
            .collect();
        let response = NearestNeighbourPlanner::new()
            .plan(PlanRequest::new(farm(), candidates))
            .expect("farm location is valid");

        let routed = response.route.stop_ids();
        for id in &incomplete {
            prop_assert!(!routed.contains(id), "stop {} has no full location", id);
        }
        prop_assert_eq!(response.excluded, incomplete);
    }

    /// Property: each step moves to a nearest unvisited stop, and the earliest
    /// supplied stop wins ties.
    #[test]
    fn each_step_is_a_nearest_choice(candidates in candidate_set_strategy(1, 25)) {
        let input_position: HashMap<StopId, usize> = candidates
            .iter()
            .enumerate()
            .map(|(position, stop)| (stop.id, position))
            .collect();
        let response = NearestNeighbourPlanner::new()
            .plan(PlanRequest::new(farm(), candidates))
            .expect("farm location is valid");

        let stops = response.route.stops();
        let mut current: GeoPoint = response.route.origin();
        for (step, chosen) in stops.iter().enumerate() {
            let chosen_cost = SquaredDegrees.cost(current, chosen.point());
            for other in stops.iter().skip(step + 1) {
                let other_cost = SquaredDegrees.cost(current, other.point());
                prop_assert!(
                    chosen_cost <= other_cost,
                    "step {}: stop {} ({}) chosen over nearer stop {} ({})",
                    step, chosen.id(), chosen_cost, other.id(), other_cost
                );
                if other_cost.total_cmp(&chosen_cost).is_eq() {
                    prop_assert!(
                        input_position.get(&chosen.id()) < input_position.get(&other.id()),
                        "step {}: tie between {} and {} not broken by input order",
                        step, chosen.id(), other.id()
                    );
                }
            }
            current = chosen.point();
        }
    }
}
