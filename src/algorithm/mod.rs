//! Encoding and normalization algorithms over geometry feature matrices.

/// Count coordinate tuples in well-known-text geometries.
pub mod count;
pub use count::{max_points, num_points_from_wkt};

/// Center and scale batches of encoded geometries.
pub mod scale;
pub use scale::{full_stop_index, localized_mean, GeomScaler, PaddingType, TransformOptions};

/// Reduce a geometry's point count to fit a budget.
pub mod simplify;
pub use simplify::simplify_to_budget;

/// Encode geometries as per-point feature matrices.
pub mod vectorize;
pub use vectorize::{vectorize_wkt, vectorize_wkt_with_index, VectorizeOptions};
