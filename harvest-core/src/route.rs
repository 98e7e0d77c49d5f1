//! Planned routes and their provider-agnostic rendering.
//!
//! A [`Route`] is produced fresh for every planning call and owns its stops.
//! [`RouteRendering`] is the shape link adapters consume: where to start,
//! where to finish and which points to pass through on the way.

use crate::{GeoPoint, Stop, StopId};

/// An ordered visiting sequence starting from a fixed origin.
///
/// # Examples
/// ```
/// use harvest_core::{GeoPoint, Route, Stop};
///
/// let origin = GeoPoint::new(10.0, 76.0)?;
/// let stop = Stop::new(1, GeoPoint::new(10.0, 76.1)?, ());
/// let route = Route::new(origin, vec![stop]);
///
/// assert_eq!(route.stop_ids(), vec![1]);
/// assert_eq!(route.destination(), Some(GeoPoint::new(10.0, 76.1)?));
/// # Ok::<(), harvest_core::GeoPointError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<T> {
    origin: GeoPoint,
    stops: Vec<Stop<T>>,
}

impl<T> Route<T> {
    /// Construct a route from its origin and stops in visiting order.
    pub const fn new(origin: GeoPoint, stops: Vec<Stop<T>>) -> Self {
        Self { origin, stops }
    }

    /// Construct a route with no stops.
    ///
    /// # Examples
    /// ```
    /// use harvest_core::{GeoPoint, Route};
    ///
    /// let route = Route::<()>::empty(GeoPoint::new(0.0, 0.0)?);
    /// assert!(route.is_empty());
    /// assert!(route.destination().is_none());
    /// # Ok::<(), harvest_core::GeoPointError>(())
    /// ```
    #[must_use]
    pub const fn empty(origin: GeoPoint) -> Self {
        Self::new(origin, Vec::new())
    }

    /// Starting point of the route.
    #[must_use]
    pub const fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[Stop<T>] {
        &self.stops
    }

    /// Number of stops on the route.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    ///
    /// An empty route is a valid planning outcome meaning nothing was
    /// routable; callers decide how to present it.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop identifiers in visiting order.
    #[must_use]
    pub fn stop_ids(&self) -> Vec<StopId> {
        self.stops.iter().map(Stop::id).collect()
    }

    /// Final stop's coordinate, if any.
    #[must_use]
    pub fn destination(&self) -> Option<GeoPoint> {
        self.stops.last().map(Stop::point)
    }

    /// Consume the route, returning the stops in visiting order.
    pub fn into_stops(self) -> Vec<Stop<T>> {
        self.stops
    }

    /// Render the route as origin, destination and intermediate waypoints.
    #[must_use]
    pub fn rendering(&self) -> RouteRendering {
        let waypoints = self
            .stops
            .split_last()
            .map_or_else(Vec::new, |(_, intermediate)| {
                intermediate.iter().map(Stop::point).collect()
            });
        RouteRendering {
            origin: self.origin,
            destination: self.destination(),
            waypoints,
        }
    }
}

/// Provider-agnostic description of a route for link adapters.
///
/// `waypoints` holds every stop except the last, in visiting order; the last
/// stop is the `destination`. An empty route has no destination and no
/// waypoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRendering {
    /// Where the route starts.
    pub origin: GeoPoint,
    /// Where the route ends, absent for an empty route.
    pub destination: Option<GeoPoint>,
    /// Intermediate points between origin and destination.
    pub waypoints: Vec<GeoPoint>,
}
