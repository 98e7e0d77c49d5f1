//! Test-only helpers shared by unit, behaviour and CLI tests.

use std::time::Instant;

use crate::{
    CandidateStop, Diagnostics, Location, PlanError, PlanRequest, PlanResponse, Route,
    RoutePlanner, StopId,
};

/// Construct a payload-free candidate with both coordinates present.
///
/// # Examples
/// ```
/// use harvest_core::test_support::candidate;
///
/// let stop = candidate(1, 10.0, 76.1);
/// assert_eq!(stop.location.latitude, Some(10.0));
/// ```
#[must_use]
pub const fn candidate(id: StopId, latitude: f64, longitude: f64) -> CandidateStop<()> {
    CandidateStop::bare(id, Location::new(latitude, longitude))
}

/// Construct a payload-free candidate with optional coordinates.
#[must_use]
pub const fn partial_candidate(
    id: StopId,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> CandidateStop<()> {
    CandidateStop::bare(
        id,
        Location {
            latitude,
            longitude,
        },
    )
}

/// The reference delivery scenario.
///
/// Origin `(10.0, 76.0)` with stops `1 = A(10.0, 76.1)`,
/// `2 = B(10.0, 76.05)` and `3 = C(9.9, 76.0)`. The nearest-neighbour order
/// is `[2, 1, 3]`.
#[must_use]
pub fn delivery_scenario() -> PlanRequest<()> {
    PlanRequest::new(
        Location::new(10.0, 76.0),
        vec![
            candidate(1, 10.0, 76.1),
            candidate(2, 10.0, 76.05),
            candidate(3, 9.9, 76.0),
        ],
    )
}

/// Planner that keeps routable stops in the order they were supplied.
///
/// Useful where a test needs the planning contract (origin validation and
/// filtering) without caring about the visiting order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrderPlanner;

impl<T> RoutePlanner<T> for InputOrderPlanner {
    fn plan(&self, request: PlanRequest<T>) -> Result<PlanResponse<T>, PlanError> {
        let started_at = Instant::now();
        let routable = request.into_routable()?;
        let candidates = routable.stops.len() as u64;
        Ok(PlanResponse {
            route: Route::new(routable.origin, routable.stops),
            excluded: routable.excluded,
            diagnostics: Diagnostics {
                plan_time: started_at.elapsed(),
                candidates_evaluated: candidates,
                ..Diagnostics::default()
            },
        })
    }
}
