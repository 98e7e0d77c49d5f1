//! Behavioural tests for `NearestNeighbourPlanner` using rstest-bdd.

use std::cell::RefCell;

use harvest_core::test_support::{candidate, partial_candidate};
use harvest_core::{
    CandidateStop, Location, PlanError, PlanRequest, PlanResponse, RoutePlanner, StopId,
};
use harvest_planner::NearestNeighbourPlanner;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const MISSING_LONGITUDE_ID: StopId = 4;

#[derive(Debug)]
struct PlannerWorld {
    origin: RefCell<Location>,
    orders: RefCell<Vec<CandidateStop<()>>>,
    outcome: RefCell<Option<Result<PlanResponse<()>, PlanError>>>,
}

impl PlannerWorld {
    fn new() -> Self {
        Self {
            origin: RefCell::new(Location::unknown()),
            orders: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<PlanResponse<()>, PlanError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::new()
}

#[given("a farm at latitude {latitude} and longitude {longitude}")]
fn given_farm(world: &PlannerWorld, latitude: f64, longitude: f64) {
    world.origin.replace(Location::new(latitude, longitude));
}

#[given("a farm without a location")]
fn given_farm_without_location(world: &PlannerWorld) {
    world.origin.replace(Location::unknown());
}

#[given("the reference set of three orders")]
fn given_reference_orders(world: &PlannerWorld) {
    world.orders.borrow_mut().extend([
        candidate(1, 10.0, 76.1),
        candidate(2, 10.0, 76.05),
        candidate(3, 9.9, 76.0),
    ]);
}

#[given("an order without a longitude")]
fn given_order_without_longitude(world: &PlannerWorld) {
    world
        .orders
        .borrow_mut()
        .push(partial_candidate(MISSING_LONGITUDE_ID, Some(10.01), None));
}

#[given("two orders equidistant from the farm")]
fn given_equidistant_orders(world: &PlannerWorld) {
    world
        .orders
        .borrow_mut()
        .extend([candidate(11, 0.0, 0.5), candidate(12, 0.0, -0.5)]);
}

#[when("the nearest-neighbour planner runs")]
fn when_planner_runs(world: &PlannerWorld) {
    let request = PlanRequest::new(*world.origin.borrow(), world.orders.borrow().clone());
    let outcome = NearestNeighbourPlanner::new().plan(request);
    world.outcome.replace(Some(outcome));
}

#[then("the visiting order is {order}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_visiting_order(world: &PlannerWorld, order: String) {
    // Strip surrounding quotes that rstest-bdd may include from Gherkin syntax.
    let expected: Vec<StopId> = order
        .trim_matches('"')
        .split(',')
        .map(|id| id.trim().parse().expect("order ids are integers"))
        .collect();
    let response = world.expect_outcome().expect("expected planning success");
    assert_eq!(response.route.stop_ids(), expected);
}

#[then("the order without a longitude is reported as excluded")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_order_excluded(world: &PlannerWorld) {
    let response = world.expect_outcome().expect("expected planning success");
    assert_eq!(response.excluded, vec![MISSING_LONGITUDE_ID]);
}

#[then("planning fails with a missing origin")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_missing_origin(world: &PlannerWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected MissingOrigin error");
    assert_eq!(err, PlanError::MissingOrigin);
}

#[then("an empty route is returned")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_empty_route(world: &PlannerWorld) {
    let response = world.expect_outcome().expect("expected planning success");
    assert!(response.route.is_empty());
    assert!(response.route.rendering().destination.is_none());
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 0)]
fn closest_first(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 1)]
fn incomplete_addresses_skipped(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 2)]
fn ties_follow_selection_order(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 3)]
fn missing_farm_location(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_neighbour.feature", index = 4)]
fn nothing_routable(world: PlannerWorld) {
    let _ = world;
}
