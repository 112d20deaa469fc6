//! Conversion of WKT text into [`geo`] geometries.
//!
//! The algorithms in this crate only ever see `geo` types; everything the
//! `wkt` parser produces is mapped here. Z and M ordinates are dropped during
//! conversion: the feature schema is strictly 2-D, and third ordinates only
//! participate in point counting (see [`crate::algorithm::count`]).

use std::str::FromStr;

use geo::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use wkt::Wkt;

use crate::error::{GeoTensorError, Result};

/// Parses a WKT string into the parser's typed representation.
pub fn parse_wkt(geom_wkt: &str) -> Result<Wkt<f64>> {
    Wkt::from_str(geom_wkt.trim()).map_err(GeoTensorError::WktStr)
}

/// Parses WKT text directly into a [`geo::Geometry`].
pub fn read_wkt(geom_wkt: &str) -> Result<Geometry<f64>> {
    to_geometry(&parse_wkt(geom_wkt)?)
}

/// Maps a parsed WKT geometry onto the `geo` data model.
///
/// Polygon rings are closed on construction, so an unclosed ring in the input
/// text counts and encodes like its canonical, closed form.
pub fn to_geometry(wkt: &Wkt<f64>) -> Result<Geometry<f64>> {
    let geometry = match wkt {
        Wkt::Point(point) => match &point.0 {
            Some(coord) => Geometry::Point(Point::new(coord.x, coord.y)),
            None => return Err(GeoTensorError::UnsupportedGeometry("empty Point".into())),
        },
        Wkt::LineString(line_string) => Geometry::LineString(convert_line_string(line_string)),
        Wkt::Polygon(polygon) => Geometry::Polygon(convert_polygon(polygon)),
        Wkt::MultiPoint(multi) => {
            let points = multi
                .0
                .iter()
                .filter_map(|point| point.0.as_ref())
                .map(|coord| Point::new(coord.x, coord.y))
                .collect();
            Geometry::MultiPoint(MultiPoint(points))
        }
        Wkt::MultiLineString(multi) => Geometry::MultiLineString(MultiLineString(
            multi.0.iter().map(convert_line_string).collect(),
        )),
        Wkt::MultiPolygon(multi) => {
            Geometry::MultiPolygon(MultiPolygon(multi.0.iter().map(convert_polygon).collect()))
        }
        Wkt::GeometryCollection(collection) => {
            let geometries = collection
                .0
                .iter()
                .map(to_geometry)
                .collect::<Result<Vec<_>>>()?;
            Geometry::GeometryCollection(GeometryCollection(geometries))
        }
    };
    Ok(geometry)
}

fn convert_coord(coord: &wkt::types::Coord<f64>) -> Coord<f64> {
    Coord {
        x: coord.x,
        y: coord.y,
    }
}

fn convert_line_string(line_string: &wkt::types::LineString<f64>) -> LineString<f64> {
    LineString::new(line_string.0.iter().map(convert_coord).collect())
}

fn convert_polygon(polygon: &wkt::types::Polygon<f64>) -> Polygon<f64> {
    let mut rings = polygon.0.iter().map(convert_line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Polygon::new(exterior, rings.collect())
}
