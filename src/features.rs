//! The fixed per-point feature schema shared by the encoder and the scaler.
//!
//! Every encoded point is one row of [`GEO_VECTOR_LEN`] scalars: an x,y
//! coordinate pair, a ring one-hot (inner or outer), and an action one-hot
//! (render, stop, or full stop). Inside the crate a row is a [`FeatureRow`],
//! so the one-hot invariants hold by construction; the flat numeric layout
//! exists only at the tensor boundary.

use geo::Coord;
use ndarray::{aview1, Array2};

/// Column of the x coordinate.
pub const X_INDEX: usize = 0;
/// Column of the y coordinate.
pub const Y_INDEX: usize = 1;
/// One-hot column: the point belongs to an interior ring (a hole).
pub const IS_INNER_INDEX: usize = 2;
/// One-hot column: the point belongs to an exterior boundary.
pub const IS_OUTER_INDEX: usize = 3;
/// One-hot column: more points of the same ring or part follow.
pub const RENDER_INDEX: usize = 4;
/// One-hot column: the ring or part ends here while the geometry continues.
pub const STOP_INDEX: usize = 5;
/// One-hot column: the last point of the entire geometry.
pub const FULL_STOP_INDEX: usize = 6;
/// Width of a feature row.
pub const GEO_VECTOR_LEN: usize = 7;

/// Which boundary of its polygon a point sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    /// An interior ring: the point outlines a hole.
    Inner,
    /// An exterior ring, or any geometry without hole semantics.
    Outer,
}

/// What follows a point within its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointAction {
    /// More points of the same ring or part follow.
    Render,
    /// The ring or part ends; another part of the same geometry follows.
    Stop,
    /// The entire geometry ends.
    FullStop,
}

/// A single encoded point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    /// The 2-D coordinate.
    pub coord: Coord<f64>,
    /// Ring membership; `None` only for the empty-collection sentinel row.
    pub ring: Option<RingRole>,
    /// Sequence action.
    pub action: PointAction,
}

impl FeatureRow {
    /// Serializes the row into the fixed one-hot layout.
    pub fn to_array(&self) -> [f64; GEO_VECTOR_LEN] {
        let mut values = [0.0; GEO_VECTOR_LEN];
        values[X_INDEX] = self.coord.x;
        values[Y_INDEX] = self.coord.y;
        match self.ring {
            Some(RingRole::Inner) => values[IS_INNER_INDEX] = 1.0,
            Some(RingRole::Outer) => values[IS_OUTER_INDEX] = 1.0,
            None => {}
        }
        match self.action {
            PointAction::Render => values[RENDER_INDEX] = 1.0,
            PointAction::Stop => values[STOP_INDEX] = 1.0,
            PointAction::FullStop => values[FULL_STOP_INDEX] = 1.0,
        }
        values
    }
}

/// Packs rows into a `(points × features)` matrix.
pub fn to_matrix(rows: &[FeatureRow]) -> Array2<f64> {
    let mut matrix = Array2::zeros((rows.len(), GEO_VECTOR_LEN));
    for (mut target, row) in matrix.outer_iter_mut().zip(rows) {
        target.assign(&aview1(&row.to_array()));
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_layout() {
        let row = FeatureRow {
            coord: Coord { x: 3.0, y: -4.5 },
            ring: Some(RingRole::Inner),
            action: PointAction::Stop,
        };
        assert_eq!(row.to_array(), [3.0, -4.5, 1.0, 0.0, 0.0, 1.0, 0.0]);

        let row = FeatureRow {
            coord: Coord { x: 0.0, y: 0.0 },
            ring: None,
            action: PointAction::FullStop,
        };
        assert_eq!(row.to_array(), [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rows_pack_in_order() {
        let rows = vec![
            FeatureRow {
                coord: Coord { x: 1.0, y: 2.0 },
                ring: Some(RingRole::Outer),
                action: PointAction::Render,
            },
            FeatureRow {
                coord: Coord { x: 3.0, y: 4.0 },
                ring: Some(RingRole::Outer),
                action: PointAction::FullStop,
            },
        ];
        let matrix = to_matrix(&rows);
        assert_eq!(matrix.dim(), (2, GEO_VECTOR_LEN));
        assert_eq!(matrix[[0, X_INDEX]], 1.0);
        assert_eq!(matrix[[1, Y_INDEX]], 4.0);
        assert_eq!(matrix[[0, RENDER_INDEX]], 1.0);
        assert_eq!(matrix[[1, FULL_STOP_INDEX]], 1.0);
    }
}
