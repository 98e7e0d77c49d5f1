//! Builds directions URLs from a route rendering.

use harvest_core::{GeoPoint, Route, RouteRendering};
use log::debug;
use thiserror::Error;
use url::Url;

use crate::format::format_legacy_coordinate;

/// Base URL used for links shared before the link format became configurable.
pub const DEFAULT_BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Configuration for [`DirectionsLink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsLinkConfig {
    /// URL the `origin`, `destination` and `waypoints` parameters are
    /// appended to. May already carry a query string.
    pub base_url: String,
}

impl DirectionsLinkConfig {
    /// Create a configuration for a custom base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for DirectionsLinkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Errors raised while preparing a [`DirectionsLink`].
#[derive(Debug, Error)]
pub enum LinkError {
    /// The base URL could not be parsed as an absolute URL.
    #[error("invalid directions base URL `{base_url}`: {source}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        base_url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The base URL has a fragment, which would swallow appended parameters.
    #[error("directions base URL `{base_url}` must not contain a fragment")]
    FragmentInBaseUrl {
        /// The rejected base URL.
        base_url: String,
    },
}

/// Renders planned routes as directions links.
///
/// The base URL is validated once at construction; rendering itself cannot
/// fail. Parameters are appended to the base text as given rather than to a
/// re-serialised URL, so existing query strings survive byte for byte.
///
/// # Examples
/// ```
/// use harvest_core::{GeoPoint, RouteRendering};
/// use harvest_links::DirectionsLink;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let rendering = RouteRendering {
///     origin: GeoPoint::new(10.0, 76.0)?,
///     destination: Some(GeoPoint::new(9.9, 76.0)?),
///     waypoints: vec![GeoPoint::new(10.0, 76.05)?],
/// };
/// let link = DirectionsLink::google_maps().render(&rendering);
/// assert_eq!(
///     link.as_deref(),
///     Some(
///         "https://www.google.com/maps/dir/?api=1&origin=10.0,76.0\
///          &destination=9.9,76.0&waypoints=10.0,76.05"
///     )
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsLink {
    base_url: String,
    separator: &'static str,
}

impl DirectionsLink {
    /// Validate `config` and prepare a link builder.
    ///
    /// # Errors
    /// Returns [`LinkError::InvalidBaseUrl`] when the base URL is not an
    /// absolute URL and [`LinkError::FragmentInBaseUrl`] when it carries a
    /// `#fragment`.
    pub fn new(config: DirectionsLinkConfig) -> Result<Self, LinkError> {
        let parsed = match Url::parse(&config.base_url) {
            Ok(parsed) => parsed,
            Err(source) => {
                return Err(LinkError::InvalidBaseUrl {
                    base_url: config.base_url,
                    source,
                });
            }
        };
        if parsed.fragment().is_some() {
            return Err(LinkError::FragmentInBaseUrl {
                base_url: config.base_url,
            });
        }
        let separator = match parsed.query() {
            None => "?",
            Some("") => "",
            Some(_) => "&",
        };
        Ok(Self {
            base_url: config.base_url,
            separator,
        })
    }

    /// Link builder for [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn google_maps() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            separator: "&",
        }
    }

    /// The base URL parameters are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render a directions link, or `None` when the route has no stops.
    #[must_use]
    pub fn render(&self, rendering: &RouteRendering) -> Option<String> {
        let destination = rendering.destination?;
        let mut link = format!(
            "{}{}origin={}&destination={}",
            self.base_url,
            self.separator,
            coordinate_pair(rendering.origin),
            coordinate_pair(destination),
        );
        if !rendering.waypoints.is_empty() {
            let waypoints: Vec<String> = rendering
                .waypoints
                .iter()
                .copied()
                .map(coordinate_pair)
                .collect();
            link.push_str("&waypoints=");
            link.push_str(&waypoints.join("|"));
        }
        debug!(
            "rendered directions link with {} waypoint(s)",
            rendering.waypoints.len()
        );
        Some(link)
    }

    /// Render the link for a planned route.
    #[must_use]
    pub fn render_route<T>(&self, route: &Route<T>) -> Option<String> {
        self.render(&route.rendering())
    }
}

impl Default for DirectionsLink {
    fn default() -> Self {
        Self::google_maps()
    }
}

fn coordinate_pair(point: GeoPoint) -> String {
    format!(
        "{},{}",
        format_legacy_coordinate(point.latitude()),
        format_legacy_coordinate(point.longitude())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).expect("valid point")
    }

    fn two_stop_rendering() -> RouteRendering {
        RouteRendering {
            origin: point(10.0, 76.0),
            destination: Some(point(10.0, 76.1)),
            waypoints: vec![point(10.0, 76.05)],
        }
    }

    #[rstest]
    fn empty_rendering_has_no_link() {
        let rendering = RouteRendering {
            origin: point(10.0, 76.0),
            destination: None,
            waypoints: Vec::new(),
        };
        assert_eq!(DirectionsLink::google_maps().render(&rendering), None);
    }

    #[rstest]
    fn single_stop_omits_waypoints() {
        let rendering = RouteRendering {
            origin: point(10.0, 76.0),
            destination: Some(point(-0.5, 0.0)),
            waypoints: Vec::new(),
        };
        assert_eq!(
            DirectionsLink::google_maps().render(&rendering).as_deref(),
            Some("https://www.google.com/maps/dir/?api=1&origin=10.0,76.0&destination=-0.5,0.0")
        );
    }

    #[rstest]
    fn waypoints_are_pipe_separated_in_visit_order() {
        let rendering = RouteRendering {
            origin: point(0.0, 0.0),
            destination: Some(point(3.0, 3.0)),
            waypoints: vec![point(1.0, 1.0), point(2.0, 2.0)],
        };
        let link = DirectionsLink::google_maps()
            .render(&rendering)
            .expect("route has stops");
        assert!(link.ends_with("&destination=3.0,3.0&waypoints=1.0,1.0|2.0,2.0"));
    }

    #[rstest]
    #[case::no_query("https://maps.example.com/dir", "https://maps.example.com/dir?origin=")]
    #[case::bare_question_mark("https://maps.example.com/dir?", "https://maps.example.com/dir?origin=")]
    #[case::existing_query(
        "https://maps.example.com/dir?api=1",
        "https://maps.example.com/dir?api=1&origin="
    )]
    fn custom_base_urls_join_cleanly(#[case] base_url: &str, #[case] expected_prefix: &str) {
        let link = DirectionsLink::new(DirectionsLinkConfig::new(base_url))
            .expect("base URL is valid")
            .render(&two_stop_rendering())
            .expect("route has stops");
        assert!(link.starts_with(expected_prefix), "unexpected link {link}");
    }

    #[rstest]
    fn default_config_matches_google_maps() {
        let configured =
            DirectionsLink::new(DirectionsLinkConfig::default()).expect("default is valid");
        assert_eq!(configured, DirectionsLink::google_maps());
        assert_eq!(configured.base_url(), DEFAULT_BASE_URL);
    }

    #[rstest]
    #[case("maps.example.com/dir")]
    #[case("")]
    #[case("https://")]
    fn relative_or_broken_base_url_is_rejected(#[case] base_url: &str) {
        let err = DirectionsLink::new(DirectionsLinkConfig::new(base_url))
            .expect_err("base URL is invalid");
        assert!(matches!(err, LinkError::InvalidBaseUrl { .. }));
    }

    #[rstest]
    fn fragment_in_base_url_is_rejected() {
        let err = DirectionsLink::new(DirectionsLinkConfig::new("https://maps.example.com/#dir"))
            .expect_err("fragment is rejected");
        assert!(matches!(err, LinkError::FragmentInBaseUrl { .. }));
    }
}
