//! `NearestNeighbourPlanner` implementation.

use std::time::Instant;

use harvest_core::{
    Diagnostics, DistanceMetric, GeoPoint, PlanError, PlanRequest, PlanResponse, Route,
    RoutePlanner, SquaredDegrees, Stop,
};

/// Greedy planner that always visits the closest unvisited stop next.
///
/// The planner is generic over the [`DistanceMetric`]. The default,
/// [`SquaredDegrees`], reproduces the orders of previously issued delivery
/// links; pass [`harvest_core::HaversineMetres`] to
/// [`NearestNeighbourPlanner::with_metric`] to compare stops by great-circle
/// distance instead.
///
/// # Examples
/// ```
/// use harvest_core::{CandidateStop, Location, PlanRequest, RoutePlanner};
/// use harvest_planner::NearestNeighbourPlanner;
///
/// let request = PlanRequest::new(
///     Location::new(10.0, 76.0),
///     vec![
///         CandidateStop::bare(1, Location::new(10.0, 76.1)),
///         CandidateStop::bare(2, Location::new(10.0, 76.05)),
///         CandidateStop::bare(3, Location::new(9.9, 76.0)),
///     ],
/// );
/// let response = NearestNeighbourPlanner::new().plan(request)?;
/// assert_eq!(response.route.stop_ids(), vec![2, 1, 3]);
/// # Ok::<(), harvest_core::PlanError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourPlanner<M = SquaredDegrees> {
    metric: M,
}

impl NearestNeighbourPlanner {
    /// Construct a planner using [`SquaredDegrees`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_metric(SquaredDegrees)
    }
}

impl<M: DistanceMetric> NearestNeighbourPlanner<M> {
    /// Construct a planner with an explicit metric.
    pub const fn with_metric(metric: M) -> Self {
        Self { metric }
    }

    /// The metric used to compare stops.
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// Order already validated stops starting from `origin`.
    ///
    /// `stops` must be in the caller's enumeration order; that order breaks
    /// ties.
    pub fn order<T>(&self, origin: GeoPoint, stops: Vec<Stop<T>>) -> (Vec<Stop<T>>, Diagnostics) {
        let started_at = Instant::now();
        let candidates = stops.len() as u64;
        let mut unvisited = stops;
        let mut ordered = Vec::with_capacity(unvisited.len());
        let mut current = origin;
        let mut evaluations = 0_u64;
        let mut total_cost = 0.0_f64;

        while let Some((index, cost)) = self.nearest(current, &unvisited) {
            evaluations = evaluations.saturating_add(unvisited.len() as u64);
            // `Vec::remove` shifts the tail left, keeping input order for ties.
            let next = unvisited.remove(index);
            current = next.point();
            total_cost = accumulate(total_cost, cost);
            ordered.push(next);
        }

        let diagnostics = Diagnostics {
            plan_time: started_at.elapsed(),
            candidates_evaluated: candidates,
            distance_evaluations: evaluations,
            total_cost,
        };
        (ordered, diagnostics)
    }

    /// Index and cost of the closest stop to `current`.
    ///
    /// Only a strictly smaller cost displaces the incumbent, so the earliest
    /// stop wins ties.
    fn nearest<T>(&self, current: GeoPoint, unvisited: &[Stop<T>]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, stop) in unvisited.iter().enumerate() {
            let cost = self.metric.cost(current, stop.point());
            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((index, cost)),
            }
        }
        best
    }
}

impl<T, M> RoutePlanner<T> for NearestNeighbourPlanner<M>
where
    M: DistanceMetric,
{
    fn plan(&self, request: PlanRequest<T>) -> Result<PlanResponse<T>, PlanError> {
        let routable = request.into_routable()?;
        let (ordered, diagnostics) = self.order(routable.origin, routable.stops);
        log::debug!(
            "planned route through {} stops ({} excluded, {} distance evaluations)",
            ordered.len(),
            routable.excluded.len(),
            diagnostics.distance_evaluations
        );
        Ok(PlanResponse {
            route: Route::new(routable.origin, ordered),
            excluded: routable.excluded,
            diagnostics,
        })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "route cost is a running floating-point sum"
)]
fn accumulate(total: f64, cost: f64) -> f64 {
    total + cost
}
