//! Encoding geometries as per-point feature matrices.

use geo::{Coord, CoordsIter, Geometry, Polygon};
use ndarray::{s, Array2};

use crate::algorithm::simplify::simplify_to_budget;
use crate::error::{GeoTensorError, Result};
use crate::features::{
    to_matrix, FeatureRow, PointAction, RingRole, FULL_STOP_INDEX, GEO_VECTOR_LEN,
};
use crate::io::wkt::read_wkt;

/// Options controlling [`vectorize_wkt`].
#[derive(Debug, Clone, Default)]
pub struct VectorizeOptions {
    /// Point budget: the maximum number of rows the caller can accept.
    pub max_points: Option<usize>,
    /// Permit lossy point reduction when a geometry exceeds the budget.
    pub simplify: bool,
    /// Pad the output with zero rows up to exactly `max_points`.
    pub fixed_size: bool,
}

/// Converts a WKT geometry into a `(points × features)` matrix.
///
/// Each row is one coordinate of the geometry in traversal order: interior
/// rings of a polygon come before its exterior ring, the parts of a
/// multipolygon come in part order. The one-hot columns mark ring membership
/// and whether the point renders, ends a sub-part, or ends the geometry; the
/// last row of the natural-length matrix always carries the full stop.
///
/// With `fixed_size` set the matrix is padded with zero rows up to
/// `max_points` and the full-stop column is then set on **every** row, on top
/// of whatever action flag each row already carried. Consumers that need the
/// true terminator must use [`vectorize_wkt_with_index`]; it is not
/// recoverable from a fixed-size matrix.
///
/// # Examples
///
/// ```
/// use geotensor::{vectorize_wkt, VectorizeOptions};
///
/// let square = "POLYGON((0 0,1 0,1 1,0 1,0 0))";
/// let matrix = vectorize_wkt(square, &VectorizeOptions::default()).unwrap();
/// assert_eq!(matrix.dim(), (5, 7));
/// assert_eq!(matrix[[4, 6]], 1.0); // the closing coordinate is the full stop
/// ```
pub fn vectorize_wkt(geom_wkt: &str, options: &VectorizeOptions) -> Result<Array2<f64>> {
    let (matrix, _) = vectorize_wkt_with_index(geom_wkt, options)?;
    Ok(matrix)
}

/// Like [`vectorize_wkt`], additionally returning the row index of the
/// geometry's terminal point, captured before any fixed-size padding.
pub fn vectorize_wkt_with_index(
    geom_wkt: &str,
    options: &VectorizeOptions,
) -> Result<(Array2<f64>, usize)> {
    if options.simplify && options.max_points.is_none() {
        return Err(GeoTensorError::InvalidConfiguration(
            "point reduction requires a max_points budget".into(),
        ));
    }
    if options.fixed_size && options.max_points.is_none() {
        return Err(GeoTensorError::InvalidConfiguration(
            "fixed-size output requires a max_points budget".into(),
        ));
    }

    let parsed = read_wkt(geom_wkt)?;
    let geometry = match options.max_points {
        Some(max_points) if parsed.coords_count() > max_points => {
            if !options.simplify {
                return Err(GeoTensorError::BudgetExceeded {
                    points: parsed.coords_count(),
                    max_points,
                });
            }
            simplify_to_budget(&parsed, max_points)?
        }
        _ => parsed,
    };

    let rows = vectorize_geometry(&geometry)?;
    let last_point_index = rows.len().saturating_sub(1);
    let mut matrix = to_matrix(&rows);

    if options.fixed_size {
        // The precondition above guarantees the budget is present.
        let max_points = options.max_points.unwrap_or(rows.len());
        matrix = pad_fixed_size(matrix, max_points);
    }

    Ok((matrix, last_point_index))
}

fn vectorize_geometry(geometry: &Geometry<f64>) -> Result<Vec<FeatureRow>> {
    match geometry {
        Geometry::Point(point) => Ok(vectorize_points(
            std::slice::from_ref(&point.0),
            RingRole::Outer,
            true,
        )),
        Geometry::LineString(line_string) => {
            Ok(vectorize_points(&line_string.0, RingRole::Outer, true))
        }
        Geometry::Polygon(polygon) => Ok(vectorize_polygon(polygon, true)),
        Geometry::MultiPolygon(multi) => {
            let mut rows: Vec<FeatureRow> = multi
                .0
                .iter()
                .flat_map(|polygon| vectorize_polygon(polygon, false))
                .collect();
            // Every part ended in a sub-part stop; the globally last point is
            // the geometry's terminator.
            if let Some(last) = rows.last_mut() {
                last.action = PointAction::FullStop;
            }
            Ok(rows)
        }
        Geometry::GeometryCollection(collection) => {
            if !collection.0.is_empty() {
                return Err(GeoTensorError::UnsupportedGeometry(
                    "non-empty GeometryCollection".into(),
                ));
            }
            // The empty collection encodes as a single sentinel row: no
            // coordinate, no ring membership, only the full stop.
            Ok(vec![FeatureRow {
                coord: Coord { x: 0.0, y: 0.0 },
                ring: None,
                action: PointAction::FullStop,
            }])
        }
        other => Err(GeoTensorError::UnsupportedGeometry(
            geometry_type_name(other).into(),
        )),
    }
}

/// Encodes one polygon: holes first, each closed with a sub-part stop, then
/// the exterior ring, terminated with the full stop only when the polygon is
/// the geometry itself rather than part of a multipolygon.
fn vectorize_polygon(polygon: &Polygon<f64>, is_last: bool) -> Vec<FeatureRow> {
    let mut rows = Vec::with_capacity(polygon.coords_count());
    for interior in polygon.interiors() {
        rows.extend(vectorize_points(&interior.0, RingRole::Inner, false));
    }
    rows.extend(vectorize_points(
        &polygon.exterior().0,
        RingRole::Outer,
        is_last,
    ));
    rows
}

/// Encodes an ordered coordinate sequence: every point renders except the
/// last, which either stops its sub-part or ends the geometry.
fn vectorize_points(coords: &[Coord<f64>], role: RingRole, is_last: bool) -> Vec<FeatureRow> {
    let count = coords.len();
    coords
        .iter()
        .enumerate()
        .map(|(index, coord)| {
            let action = if index + 1 == count {
                if is_last {
                    PointAction::FullStop
                } else {
                    PointAction::Stop
                }
            } else {
                PointAction::Render
            };
            FeatureRow {
                coord: *coord,
                ring: Some(role),
                action,
            }
        })
        .collect()
}

fn pad_fixed_size(matrix: Array2<f64>, max_points: usize) -> Array2<f64> {
    let rows = matrix.nrows();
    let mut padded = Array2::zeros((max_points.max(rows), GEO_VECTOR_LEN));
    padded.slice_mut(s![..rows, ..]).assign(&matrix);
    // Every row of a fixed-size matrix is flagged full stop, on top of the
    // action flag it already carries. The true terminator index survives only
    // through vectorize_wkt_with_index.
    padded.column_mut(FULL_STOP_INDEX).fill(1.0);
    padded
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
