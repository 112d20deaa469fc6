//! Counting coordinate tuples in well-known-text geometries.

use wkt::Wkt;

use crate::error::Result;
use crate::io::wkt::parse_wkt;

/// Returns the number of coordinate tuples in a WKT geometry.
///
/// The count is taken on the parsed form, so whatever floating-point
/// formatting a serializer applies cannot change it. A 3-D tuple counts once,
/// exactly like a 2-D tuple; Z ordinates never reach the encoded features.
///
/// # Examples
///
/// ```
/// use geotensor::num_points_from_wkt;
///
/// // The repeated closing coordinate of the ring is part of the count.
/// let square = "POLYGON((0 0,1 0,1 1,0 1,0 0))";
/// assert_eq!(num_points_from_wkt(square).unwrap(), 5);
/// ```
pub fn num_points_from_wkt(geom_wkt: &str) -> Result<usize> {
    Ok(count_tuples(&parse_wkt(geom_wkt)?))
}

/// Returns one shared point budget for N aligned sets of WKT geometries.
///
/// The sets are zipped positionally, stopping at the shortest set; the result
/// is the largest per-position sum of point counts. This picks a single fixed
/// budget for paired datasets whose entries are batched together.
pub fn max_points<S: AsRef<str>>(wkt_sets: &[&[S]]) -> Result<usize> {
    let positions = wkt_sets.iter().map(|set| set.len()).min().unwrap_or(0);
    let mut maximum = 0;

    for position in 0..positions {
        let mut total = 0;
        for set in wkt_sets {
            total += num_points_from_wkt(set[position].as_ref())?;
        }
        maximum = maximum.max(total);
    }

    Ok(maximum)
}

fn count_tuples(wkt: &Wkt<f64>) -> usize {
    match wkt {
        Wkt::Point(point) => usize::from(point.0.is_some()),
        Wkt::LineString(line_string) => line_string.0.len(),
        Wkt::Polygon(polygon) => polygon.0.iter().map(|ring| ring.0.len()).sum(),
        Wkt::MultiPoint(multi) => multi.0.iter().filter(|point| point.0.is_some()).count(),
        Wkt::MultiLineString(multi) => multi.0.iter().map(|line_string| line_string.0.len()).sum(),
        Wkt::MultiPolygon(multi) => multi
            .0
            .iter()
            .map(|polygon| polygon.0.iter().map(|ring| ring.0.len()).sum::<usize>())
            .sum(),
        Wkt::GeometryCollection(collection) => collection.0.iter().map(count_tuples).sum(),
    }
}
