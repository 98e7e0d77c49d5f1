//! Delivery destinations, before and after coordinate validation.

use crate::{GeoPoint, Location};

/// Opaque identifier for a stop, normally the order reference.
pub type StopId = u64;

/// A delivery destination as supplied by the caller.
///
/// The `payload` carries whatever the caller needs back once the stop has been
/// sequenced, typically the order record itself.
///
/// # Examples
/// ```
/// use harvest_core::{CandidateStop, Location};
///
/// let candidate = CandidateStop::new(7, Location::new(10.0, 76.1), "order #7");
/// let stop = candidate.into_stop().expect("routable");
/// assert_eq!(stop.id(), 7);
/// assert_eq!(*stop.payload(), "order #7");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateStop<T> {
    /// Stop identifier.
    pub id: StopId,
    /// Recorded location, possibly incomplete.
    pub location: Location,
    /// Caller-owned data returned alongside the stop.
    pub payload: T,
}

impl<T> CandidateStop<T> {
    /// Construct a candidate stop.
    pub const fn new(id: StopId, location: Location, payload: T) -> Self {
        Self {
            id,
            location,
            payload,
        }
    }

    /// Validate the location, returning the candidate unchanged when it is
    /// unroutable.
    ///
    /// # Errors
    ///
    /// Returns `self` when [`Location::to_point`] yields `None`.
    pub fn into_stop(self) -> Result<Stop<T>, Self> {
        let Some(point) = self.location.to_point() else {
            return Err(self);
        };
        Ok(Stop {
            id: self.id,
            point,
            payload: self.payload,
        })
    }
}

impl CandidateStop<()> {
    /// Construct a candidate stop without a payload.
    #[must_use]
    pub const fn bare(id: StopId, location: Location) -> Self {
        Self::new(id, location, ())
    }
}

/// A routable stop with a validated coordinate.
///
/// Stops are only built from [`CandidateStop::into_stop`] or [`Stop::new`] and
/// are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop<T> {
    id: StopId,
    point: GeoPoint,
    payload: T,
}

impl<T> Stop<T> {
    /// Construct a stop from an already validated point.
    pub const fn new(id: StopId, point: GeoPoint, payload: T) -> Self {
        Self { id, point, payload }
    }

    /// Stop identifier.
    #[must_use]
    pub const fn id(&self) -> StopId {
        self.id
    }

    /// Validated coordinate.
    #[must_use]
    pub const fn point(&self) -> GeoPoint {
        self.point
    }

    /// Caller-owned payload.
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the stop, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}
