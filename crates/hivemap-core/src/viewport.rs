//! Map viewport selection.
//!
//! Picks a center and a discrete zoom level that keep the query point and
//! the nearest vendor visible with padding. Discrete breakpoints instead
//! of continuous zoom fitting: every breakpoint is chosen so both points
//! stay inside the frame at that level.

use serde::Serialize;

use crate::error::GeoError;
use crate::geo::GeoPoint;
use crate::search::{nearest, Locate};

/// Center of the service region (Austria), shown before any location query.
pub const COUNTRY_CENTER: GeoPoint = GeoPoint {
    latitude: 47.5,
    longitude: 13.5,
};

/// Zoom framing the whole service region.
pub const COUNTRY_ZOOM: u8 = 7;

/// Zoom when only the query point is shown (no vendors to frame).
const QUERY_ONLY_ZOOM: u8 = 12;

/// Fraction of the box span added on each side so markers never sit at
/// the frame edge.
const PADDING_FRACTION: f64 = 0.15;

/// Zoom bounds for the "query + nearest vendor" case. The fixed zooms of
/// the other two cases sit outside this clamp on purpose.
const MIN_PAIR_ZOOM: u8 = 9;
const MAX_PAIR_ZOOM: u8 = 14;

/// A map center and zoom level, computed fresh per query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Choose the viewport for the given query point and candidate set.
///
/// Three cases, in order:
/// - no query point: the fixed country-wide default;
/// - query point but no candidates: centered on the query at a
///   neighborhood zoom;
/// - query point and candidates: frame the query together with the
///   nearest candidate, padded, zoom picked from the padded span.
///
/// # Errors
///
/// Returns `GeoError` if the query point or any candidate position
/// violates the coordinate invariant. There is no failure mode beyond
/// that — empty inputs degrade through the cases above.
pub fn frame<T: Locate>(query: Option<GeoPoint>, candidates: &[T]) -> Result<Viewport, GeoError> {
    let Some(query) = query else {
        return Ok(Viewport {
            center: COUNTRY_CENTER,
            zoom: COUNTRY_ZOOM,
        });
    };
    query.validate()?;

    let Some(found) = nearest(query, candidates)? else {
        return Ok(Viewport {
            center: query,
            zoom: QUERY_ONLY_ZOOM,
        });
    };
    let near = found.item.position();

    let lat_span = (query.latitude - near.latitude).abs();
    let lon_span = (query.longitude - near.longitude).abs();

    // Padding expands the box symmetrically around its center, so the
    // centroid is unchanged; only the span (and therefore the zoom) grows.
    let padded_lat_span = lat_span * (1.0 + 2.0 * PADDING_FRACTION);
    let padded_lon_span = lon_span * (1.0 + 2.0 * PADDING_FRACTION);

    let center = GeoPoint {
        latitude: (query.latitude + near.latitude) / 2.0,
        longitude: (query.longitude + near.longitude) / 2.0,
    };
    let zoom = zoom_for_span(padded_lat_span.max(padded_lon_span))
        .clamp(MIN_PAIR_ZOOM, MAX_PAIR_ZOOM);

    Ok(Viewport { center, zoom })
}

/// Monotonic step function from angular span (degrees) to zoom level.
fn zoom_for_span(span_degrees: f64) -> u8 {
    if span_degrees > 5.0 {
        7
    } else if span_degrees > 2.0 {
        9
    } else if span_degrees > 1.0 {
        10
    } else if span_degrees > 0.5 {
        11
    } else if span_degrees > 0.2 {
        12
    } else if span_degrees > 0.1 {
        13
    } else {
        14
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin(GeoPoint);

    impl Locate for Pin {
        fn position(&self) -> GeoPoint {
            self.0
        }
    }

    fn pin(latitude: f64, longitude: f64) -> Pin {
        Pin(GeoPoint {
            latitude,
            longitude,
        })
    }

    const VIENNA: GeoPoint = GeoPoint {
        latitude: 48.2,
        longitude: 16.4,
    };

    #[test]
    fn no_query_yields_country_default() {
        let pins: Vec<Pin> = vec![];
        let viewport = frame(None, &pins).expect("frame");
        assert_eq!(
            viewport,
            Viewport {
                center: COUNTRY_CENTER,
                zoom: 7,
            }
        );
    }

    #[test]
    fn no_query_ignores_candidates() {
        let pins = vec![pin(48.2, 16.4), pin(47.1, 15.4)];
        let viewport = frame(None, &pins).expect("frame");
        assert_eq!(viewport.center, COUNTRY_CENTER);
        assert_eq!(viewport.zoom, 7);
    }

    #[test]
    fn query_without_candidates_centers_on_query_at_zoom_12() {
        let pins: Vec<Pin> = vec![];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(viewport.center, VIENNA);
        assert_eq!(viewport.zoom, 12);
    }

    #[test]
    fn tiny_span_gets_maximum_zoom() {
        // Nearest 0.05 degrees away: padded span 0.065, well under 0.1.
        let pins = vec![pin(48.25, 16.4)];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(viewport.zoom, 14);
        assert!((viewport.center.latitude - 48.225).abs() < 1e-9);
        assert!((viewport.center.longitude - 16.4).abs() < 1e-9);
    }

    #[test]
    fn center_is_midpoint_of_query_and_nearest() {
        let pins = vec![pin(48.0, 16.0), pin(40.0, 10.0)];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert!((viewport.center.latitude - 48.1).abs() < 1e-9);
        assert!((viewport.center.longitude - 16.2).abs() < 1e-9);
    }

    #[test]
    fn wide_span_clamps_to_minimum_pair_zoom() {
        // Nearest is ~8 degrees of longitude away: raw step says 7, the
        // pair case clamps up to 9.
        let pins = vec![pin(48.2, 8.0)];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(viewport.zoom, 9);
    }

    #[test]
    fn padding_can_push_span_over_a_breakpoint() {
        // Raw span 0.09 would map to 14, but padded (0.117) crosses the
        // 0.1-degree breakpoint and lands on 13.
        let pins = vec![pin(48.2, 16.49)];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(viewport.zoom, 13);
    }

    #[test]
    fn larger_dimension_drives_the_zoom() {
        // Lat span is tiny but lon span is ~1.6 degrees padded: zoom 10.
        let pins = vec![pin(48.21, 15.15)];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(viewport.zoom, 10);
    }

    #[test]
    fn frames_against_the_nearest_not_the_first_candidate() {
        let pins = vec![pin(40.0, 10.0), pin(48.25, 16.4)];
        let viewport = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(viewport.zoom, 14, "should frame the nearby pin");
    }

    #[test]
    fn frame_is_idempotent() {
        let pins = vec![pin(48.3, 16.5), pin(47.8, 16.2)];
        let first = frame(Some(VIENNA), &pins).expect("frame");
        let second = frame(Some(VIENNA), &pins).expect("frame");
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_query_is_rejected() {
        let pins: Vec<Pin> = vec![];
        let query = GeoPoint {
            latitude: -91.0,
            longitude: 0.0,
        };
        let result = frame(Some(query), &pins);
        assert_eq!(result, Err(GeoError::LatitudeOutOfRange(-91.0)));
    }

    #[test]
    fn malformed_candidate_is_rejected() {
        let pins = vec![pin(48.2, 181.0)];
        let result = frame(Some(VIENNA), &pins);
        assert_eq!(result, Err(GeoError::LongitudeOutOfRange(181.0)));
    }

    #[test]
    fn zoom_for_span_breakpoints() {
        assert_eq!(zoom_for_span(6.0), 7);
        assert_eq!(zoom_for_span(3.0), 9);
        assert_eq!(zoom_for_span(1.5), 10);
        assert_eq!(zoom_for_span(0.7), 11);
        assert_eq!(zoom_for_span(0.3), 12);
        assert_eq!(zoom_for_span(0.15), 13);
        assert_eq!(zoom_for_span(0.05), 14);
        assert_eq!(zoom_for_span(0.0), 14);
    }

    #[test]
    fn zoom_for_span_is_monotonic_non_increasing() {
        let spans = [0.0, 0.05, 0.1, 0.11, 0.2, 0.21, 0.5, 0.6, 1.0, 1.1, 2.0, 2.1, 5.0, 5.1, 10.0];
        for window in spans.windows(2) {
            assert!(
                zoom_for_span(window[0]) >= zoom_for_span(window[1]),
                "zoom must not increase as span grows: {} vs {}",
                window[0],
                window[1]
            );
        }
    }
}
