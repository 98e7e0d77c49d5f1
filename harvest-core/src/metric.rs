//! Distance metrics used to compare candidate stops.
//!
//! Planners only ever compare metric values against each other, so a metric
//! needs to be monotonic in "how far apart", not physically meaningful.
//! [`SquaredDegrees`] is the reference metric and the default everywhere;
//! [`HaversineMetres`] is an explicit opt-in.

use geo::{Distance, Haversine};

use crate::GeoPoint;

/// Cost of travelling between two points.
///
/// Implementations must be deterministic and return finite, non-negative
/// values for valid points.
pub trait DistanceMetric: Send + Sync {
    /// Cost of moving from `from` to `to`.
    fn cost(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Squared Euclidean distance over raw degrees: `dlat² + dlon²`.
///
/// This treats latitude and longitude as a flat Cartesian grid. It is only a
/// reasonable proxy over small extents (a single district), and it distorts
/// east-west distances away from the equator because a degree of longitude
/// shrinks with latitude. Routes planned with it are reproducible against
/// previously issued delivery links.
///
/// # Examples
/// ```
/// use harvest_core::{DistanceMetric, GeoPoint, SquaredDegrees};
///
/// let from = GeoPoint::new(10.0, 76.0)?;
/// let to = GeoPoint::new(9.9, 76.0)?;
/// let cost = SquaredDegrees.cost(from, to);
/// assert!((cost - 0.01).abs() < 1e-12);
/// # Ok::<(), harvest_core::GeoPointError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SquaredDegrees;

impl DistanceMetric for SquaredDegrees {
    #[expect(
        clippy::float_arithmetic,
        reason = "squared distance is computed in floating point"
    )]
    fn cost(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let dx = to.latitude() - from.latitude();
        let dy = to.longitude() - from.longitude();
        dx * dx + dy * dy
    }
}

/// Great-circle distance in metres on a spherical Earth.
///
/// Choosing this metric changes visiting orders relative to
/// [`SquaredDegrees`] whenever longitude spans are significant, so it must be
/// selected deliberately.
///
/// # Examples
/// ```
/// use harvest_core::{DistanceMetric, GeoPoint, HaversineMetres};
///
/// let from = GeoPoint::new(0.0, 0.0)?;
/// let to = GeoPoint::new(0.0, 1.0)?;
/// let metres = HaversineMetres.cost(from, to);
/// assert!(metres > 111_000.0 && metres < 111_400.0);
/// # Ok::<(), harvest_core::GeoPointError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HaversineMetres;

impl DistanceMetric for HaversineMetres {
    fn cost(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        Haversine.distance(geo::Point::from(from), geo::Point::from(to))
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn cost(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        (**self).cost(from, to)
    }
}
