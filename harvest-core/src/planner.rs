use std::time::Duration;

use thiserror::Error;

use crate::{CandidateStop, GeoPoint, Location, Route, Stop, StopId};

/// Parameters for a planning call.
///
/// The request captures the farmer's registered location and the orders
/// selected for delivery.
///
/// # Examples
/// ```rust
/// use harvest_core::{CandidateStop, Location, PlanRequest};
///
/// let request = PlanRequest::new(
///     Location::new(10.0, 76.0),
///     vec![CandidateStop::bare(1, Location::new(10.0, 76.1))],
/// );
/// assert_eq!(request.stops.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest<T> {
    /// Where the route starts.
    pub origin: Location,
    /// Candidate stops, in the order the caller supplied them.
    pub stops: Vec<CandidateStop<T>>,
}

impl<T> PlanRequest<T> {
    /// Construct a request.
    pub const fn new(origin: Location, stops: Vec<CandidateStop<T>>) -> Self {
        Self { origin, stops }
    }

    /// Validate the origin and split the candidates into routable stops and
    /// excluded identifiers.
    ///
    /// Both output vectors preserve the input order. Unroutable candidates
    /// are dropped, never rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingOrigin`] when the origin is unroutable. No
    /// candidate is inspected in that case.
    ///
    /// # Examples
    /// ```rust
    /// use harvest_core::{CandidateStop, Location, PlanRequest};
    ///
    /// let request = PlanRequest::new(
    ///     Location::new(10.0, 76.0),
    ///     vec![
    ///         CandidateStop::bare(1, Location::new(10.0, 76.1)),
    ///         CandidateStop::bare(2, Location { latitude: Some(10.0), longitude: None }),
    ///     ],
    /// );
    /// let routable = request.into_routable()?;
    /// assert_eq!(routable.stops.len(), 1);
    /// assert_eq!(routable.excluded, vec![2]);
    /// # Ok::<(), harvest_core::PlanError>(())
    /// ```
    pub fn into_routable(self) -> Result<RoutableSet<T>, PlanError> {
        let origin = self.origin.to_point().ok_or(PlanError::MissingOrigin)?;
        let mut stops = Vec::with_capacity(self.stops.len());
        let mut excluded = Vec::new();
        for candidate in self.stops {
            match candidate.into_stop() {
                Ok(stop) => stops.push(stop),
                Err(unroutable) => {
                    log::debug!("excluding stop {} without a usable location", unroutable.id);
                    excluded.push(unroutable.id);
                }
            }
        }
        Ok(RoutableSet {
            origin,
            stops,
            excluded,
        })
    }
}

/// A request after origin validation and stop filtering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutableSet<T> {
    /// Validated origin.
    pub origin: GeoPoint,
    /// Routable stops in input order.
    pub stops: Vec<Stop<T>>,
    /// Identifiers of unroutable candidates in input order.
    pub excluded: Vec<StopId>,
}

/// Statistics captured while planning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
    /// Number of routable stops considered.
    pub candidates_evaluated: u64,
    /// Number of metric evaluations performed.
    pub distance_evaluations: u64,
    /// Sum of metric values along the route, in the metric's own unit.
    pub total_cost: f64,
}

/// Response from a successful planning call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResponse<T> {
    /// The ordered route. Empty when nothing was routable.
    pub route: Route<T>,
    /// Candidates dropped for unroutable locations, in input order.
    pub excluded: Vec<StopId>,
    /// Planning statistics.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`RoutePlanner::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The origin has no usable coordinate, so no tour can start.
    #[error("origin location is missing; set your location first")]
    MissingOrigin,
}

/// Sequence delivery stops into a visiting order.
///
/// Implementations must return [`PlanError::MissingOrigin`] for an
/// unroutable origin, drop unroutable stops, and return an empty route rather
/// than an error when nothing is routable.
/// Planners must be `Send + Sync` so callers can share them across requests.
pub trait RoutePlanner<T>: Send + Sync {
    /// Plan a route for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingOrigin`] when the request origin is
    /// unroutable.
    fn plan(&self, request: PlanRequest<T>) -> Result<PlanResponse<T>, PlanError>;
}
