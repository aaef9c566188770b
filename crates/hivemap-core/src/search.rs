//! Radius search over the directory.
//!
//! A linear scan is deliberate: the directory holds tens to low hundreds
//! of vendors, so a spatial index would buy nothing.

use crate::error::GeoError;
use crate::geo::{distance_km, GeoPoint};

/// Search radius in kilometers used when the caller supplies none.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Anything with a fixed position on the map.
pub trait Locate {
    fn position(&self) -> GeoPoint;
}

/// A candidate annotated with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance_km: f64,
}

/// All candidates within `radius_km` of `query`, sorted ascending by
/// distance. The boundary is inclusive; an empty result is a valid
/// outcome, not an error.
///
/// Ties keep their relative input order (the sort is stable and keyed on
/// distance only), so identical inputs always produce identical output.
///
/// # Errors
///
/// Returns `GeoError` if `query` or any candidate position violates the
/// coordinate invariant, or if `radius_km` is non-positive or non-finite.
pub fn search_within_radius<T: Locate>(
    query: GeoPoint,
    radius_km: f64,
    candidates: &[T],
) -> Result<Vec<Ranked<&T>>, GeoError> {
    query.validate()?;
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(GeoError::InvalidRadius(radius_km));
    }

    let mut ranked = Vec::new();
    for candidate in candidates {
        let position = candidate.position();
        position.validate()?;
        let distance = distance_km(query, position);
        if distance <= radius_km {
            ranked.push(Ranked {
                item: candidate,
                distance_km: distance,
            });
        }
    }

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(ranked)
}

/// The candidate nearest to `query`, or `None` for an empty list.
///
/// Ties resolve to the first occurrence in input order. This is the single
/// "nearest" reduction in the system — viewport framing reuses it rather
/// than keeping its own copy.
///
/// # Errors
///
/// Returns `GeoError` if `query` or any candidate position violates the
/// coordinate invariant.
pub fn nearest<T: Locate>(
    query: GeoPoint,
    candidates: &[T],
) -> Result<Option<Ranked<&T>>, GeoError> {
    query.validate()?;

    let mut best: Option<Ranked<&T>> = None;
    for candidate in candidates {
        let position = candidate.position();
        position.validate()?;
        let distance = distance_km(query, position);
        if best.as_ref().is_none_or(|b| distance < b.distance_km) {
            best = Some(Ranked {
                item: candidate,
                distance_km: distance,
            });
        }
    }
    Ok(best)
}
