//! Geographic coordinates: validated points and caller-supplied locations.
//!
//! [`GeoPoint`] is the only coordinate type the planner works with. Callers
//! hand in [`Location`] values straight from their records, where either half
//! of the pair may be absent; [`Location::to_point`] decides whether the
//! location is routable.

use geo::Coord;
use thiserror::Error;

/// Valid latitude range in degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// A coordinate was NaN or infinite.
    #[error("coordinate must be finite")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A validated WGS84 coordinate in degrees.
///
/// Stored as a [`geo::Coord`] with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use harvest_core::GeoPoint;
///
/// let point = GeoPoint::new(10.0, 76.05)?;
/// assert_eq!(point.latitude(), 10.0);
/// assert_eq!(point.longitude(), 76.05);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok::<(), harvest_core::GeoPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LatLon", into = "LatLon")
)]
pub struct GeoPoint {
    coord: Coord<f64>,
}

impl GeoPoint {
    /// Validate and construct a point from latitude and longitude.
    ///
    /// # Errors
    ///
    /// Returns [`GeoPointError`] when either value is non-finite or outside
    /// its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoPointError::NonFinite);
        }
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            coord: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.coord.x
    }

    /// The underlying `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(self) -> Coord<f64> {
        self.coord
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self(point.coord)
    }
}

/// Wire form of a [`GeoPoint`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LatLon {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LatLon> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(value: LatLon) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<GeoPoint> for LatLon {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude(),
            longitude: point.longitude(),
        }
    }
}

/// A coordinate pair as recorded by the caller, with either half optional.
///
/// Order and profile records store latitude and longitude as nullable
/// columns, so nothing about a `Location` is guaranteed.
///
/// # Examples
/// ```
/// use harvest_core::Location;
///
/// assert!(Location::new(10.0, 76.0).to_point().is_some());
/// assert!(Location { latitude: Some(10.0), longitude: None }.to_point().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude in degrees, if recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    /// Longitude in degrees, if recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
}

impl Location {
    /// A location with both coordinates present.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// A location with neither coordinate recorded.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            latitude: None,
            longitude: None,
        }
    }

    /// Return the validated point, or `None` when the location is unroutable.
    ///
    /// A location is unroutable when either coordinate is missing, non-finite
    /// or out of range. Zero is a valid coordinate.
    #[must_use]
    pub fn to_point(self) -> Option<GeoPoint> {
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return None;
        };
        GeoPoint::new(latitude, longitude).ok()
    }
}

impl From<GeoPoint> for Location {
    fn from(point: GeoPoint) -> Self {
        Self::new(point.latitude(), point.longitude())
    }
}
