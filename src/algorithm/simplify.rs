//! Reducing a geometry's point count to fit a budget.

use geo::{CoordsIter, Geometry, Simplify};
use log::debug;

use crate::error::{GeoTensorError, Result};

/// Tolerance of the first simplification round, as a base-10 exponent.
const INITIAL_LOG_TOLERANCE: f64 = -10.0;
/// Exponent increase per round; each round multiplies the tolerance by ~3.162.
const LOG_TOLERANCE_STEP: f64 = 0.5;
/// Escalation rounds before giving up (tolerance ends near 1e22).
const MAX_ROUNDS: usize = 64;

/// Searches for a simplification tolerance that brings `geometry` down to at
/// most `max_points` coordinates.
///
/// Ramer-Douglas-Peucker simplification is re-applied with an exponentially
/// growing tolerance until the geometry fits the budget. The search is
/// bounded: a geometry that cannot be reduced far enough (a single point with
/// a budget of zero, a polygon whose minimal ring still exceeds the budget)
/// fails with [`GeoTensorError::CannotSimplify`] once the tolerance range is
/// exhausted. Point and multi-point geometries pass through unchanged and can
/// only exit via that error when over budget.
///
/// The input is never mutated; the simplified geometry is returned.
pub fn simplify_to_budget(geometry: &Geometry<f64>, max_points: usize) -> Result<Geometry<f64>> {
    let mut log_tolerance = INITIAL_LOG_TOLERANCE;
    let mut simplified = simplify_once(geometry, 10f64.powf(log_tolerance));

    for _ in 0..MAX_ROUNDS {
        let points = simplified.coords_count();
        if points <= max_points {
            return Ok(simplified);
        }
        log_tolerance += LOG_TOLERANCE_STEP;
        let tolerance = 10f64.powf(log_tolerance);
        debug!("{points} points over a budget of {max_points}, retrying with tolerance {tolerance:e}");
        simplified = simplify_once(&simplified, tolerance);
    }

    let points = simplified.coords_count();
    if points <= max_points {
        Ok(simplified)
    } else {
        Err(GeoTensorError::CannotSimplify { points, max_points })
    }
}

/// One tolerance-based simplification pass. Geometry types without a
/// simplification (points, collections) are returned unchanged.
fn simplify_once(geometry: &Geometry<f64>, tolerance: f64) -> Geometry<f64> {
    match geometry {
        Geometry::LineString(line_string) => Geometry::LineString(line_string.simplify(&tolerance)),
        Geometry::MultiLineString(multi) => Geometry::MultiLineString(multi.simplify(&tolerance)),
        Geometry::Polygon(polygon) => Geometry::Polygon(polygon.simplify(&tolerance)),
        Geometry::MultiPolygon(multi) => Geometry::MultiPolygon(multi.simplify(&tolerance)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use geo::{line_string, point, polygon};

    use super::*;

    #[test]
    fn collapses_a_redundant_line() {
        let line = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.001),
            (x: 2.0, y: 0.0),
            (x: 3.0, y: 0.001),
            (x: 4.0, y: 0.0),
        ];
        let simplified = simplify_to_budget(&Geometry::LineString(line), 2).unwrap();
        assert!(simplified.coords_count() <= 2);
    }

    #[test]
    fn keeps_geometries_already_under_budget() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let geometry = Geometry::Polygon(square.clone());
        let simplified = simplify_to_budget(&geometry, 10).unwrap();
        assert_eq!(simplified, Geometry::Polygon(square));
    }

    #[test]
    fn drops_collinear_ring_points() {
        let dense_square = polygon![
            (x: 0.0, y: 0.0),
            (x: 0.5, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 0.5),
            (x: 1.0, y: 1.0),
            (x: 0.5, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.5),
            (x: 0.0, y: 0.0),
        ];
        let simplified = simplify_to_budget(&Geometry::Polygon(dense_square), 5).unwrap();
        assert!(simplified.coords_count() <= 5);
    }

    #[test]
    fn fails_on_irreducible_input() {
        let single = Geometry::Point(point!(x: 1.0, y: 2.0));
        let err = simplify_to_budget(&single, 0).unwrap_err();
        assert!(matches!(
            err,
            GeoTensorError::CannotSimplify {
                points: 1,
                max_points: 0,
            }
        ));
    }

    #[test]
    fn leaves_the_input_untouched() {
        let line = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.001),
            (x: 2.0, y: 0.0),
        ];
        let geometry = Geometry::LineString(line.clone());
        let _ = simplify_to_budget(&geometry, 2).unwrap();
        assert_eq!(geometry, Geometry::LineString(line));
    }
}
