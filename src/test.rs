//! Shared fixtures for the unit tests.

use ndarray::{stack, Array2, Array3, Axis};

use crate::algorithm::vectorize::{vectorize_wkt, VectorizeOptions};

/// Four corners plus the closing coordinate.
pub(crate) const UNIT_SQUARE: &str = "POLYGON((0 0,1 0,1 1,0 1,0 0))";

/// A 3×3 square with a unit hole: ten points total.
pub(crate) const POLYGON_WITH_HOLE: &str =
    "POLYGON((0 0,3 0,3 3,0 3,0 0),(1 1,2 1,2 2,1 2,1 1))";

/// Two disjoint unit squares, five points each.
pub(crate) const TWO_PART_MULTIPOLYGON: &str =
    "MULTIPOLYGON(((0 0,1 0,1 1,0 1,0 0)),((2 2,3 2,3 3,2 3,2 2)))";

/// A unit square with a collinear midpoint on every edge: nine points that
/// simplify back down to five.
pub(crate) const DENSE_SQUARE: &str =
    "POLYGON((0 0,0.5 0,1 0,1 0.5,1 1,0.5 1,0 1,0 0.5,0 0))";

pub(crate) fn square_matrix() -> Array2<f64> {
    vectorize_wkt(UNIT_SQUARE, &VectorizeOptions::default()).unwrap()
}

pub(crate) fn square_batch() -> Array3<f64> {
    let matrix = square_matrix();
    stack(Axis(0), &[matrix.view()]).unwrap()
}
