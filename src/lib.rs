//! Encoding of vector geometries as fixed-schema numeric tensors, plus a
//! fitted normalization step over batches of such tensors.
//!
//! Geometries arrive as Well-Known Text and leave as `(point × feature)`
//! matrices: an x,y coordinate pair per point, a one-hot marking interior
//! versus exterior ring membership, and a one-hot marking whether the point
//! renders, ends a sub-part, or ends the whole geometry. Batches of matrices
//! can then be centered on each geometry's own centroid and scaled by a
//! single batch-wide factor fitted with [`GeomScaler`].
//!
//! ```
//! use geotensor::{vectorize_wkt, VectorizeOptions};
//!
//! let square = "POLYGON((0 0,1 0,1 1,0 1,0 0))";
//! let matrix = vectorize_wkt(square, &VectorizeOptions::default()).unwrap();
//! assert_eq!(matrix.dim(), (5, 7));
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use algorithm::count::{max_points, num_points_from_wkt};
pub use algorithm::scale::{
    full_stop_index, localized_mean, GeomScaler, PaddingType, TransformOptions,
};
pub use algorithm::simplify::simplify_to_budget;
pub use algorithm::vectorize::{vectorize_wkt, vectorize_wkt_with_index, VectorizeOptions};
pub use error::{GeoTensorError, Result};
pub use features::GEO_VECTOR_LEN;

pub mod algorithm;
pub mod error;
pub mod features;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
