//! Centering and scaling batches of encoded geometries.

use geo::Coord;
use ndarray::{s, Array3, ArrayView2, ArrayView3, Axis};

use crate::error::{GeoTensorError, Result};
use crate::features::{FULL_STOP_INDEX, X_INDEX, Y_INDEX};

/// How trailing rows of a geometry matrix are treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingType {
    /// Trailing rows replicate the last real coordinate and move with it:
    /// every row is centered and scaled.
    #[default]
    Replication,
    /// Trailing rows are zero padding: only rows before the full-stop index
    /// are touched.
    Zero,
}

/// Options controlling [`GeomScaler::transform`].
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Padding discipline of the batch.
    pub padding: PaddingType,
    /// Subtract each geometry's localized mean from its x,y columns.
    pub with_mean: bool,
    /// Divide the x,y columns by the fitted scale factor.
    pub with_std: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            padding: PaddingType::default(),
            with_mean: true,
            with_std: true,
        }
    }
}

/// Returns the window end for a geometry matrix: the index of its first
/// full-stop row.
///
/// A full stop on the very first row means the matrix was flood-flagged by
/// fixed-size padding (or is a single-point geometry); the whole matrix is
/// the window then, as it also is when no full stop is present at all.
pub fn full_stop_index(geometry: ArrayView2<'_, f64>) -> usize {
    let position = geometry
        .column(FULL_STOP_INDEX)
        .iter()
        .position(|&flag| flag == 1.0);
    match position {
        Some(0) | None => geometry.nrows(),
        Some(index) => index,
    }
}

/// Computes the centroid of a geometry matrix over its real points.
///
/// Only rows before the full-stop index participate, so zero padding after
/// the true end of the geometry cannot bias the mean.
pub fn localized_mean(geometry: ArrayView2<'_, f64>) -> Coord<f64> {
    let end = full_stop_index(geometry);
    let window = geometry.slice(s![..end, ..2]);
    match window.mean_axis(Axis(0)) {
        Some(mean) => Coord {
            x: mean[X_INDEX],
            y: mean[Y_INDEX],
        },
        None => Coord { x: 0.0, y: 0.0 },
    }
}

/// Two-phase normalizer for batches of encoded geometries.
///
/// `fit` learns a single batch-wide scale factor; `transform` centers every
/// geometry on its own localized mean and divides by that factor. One shared
/// scalar, rather than a per-axis or per-geometry factor, keeps the spatial
/// aspect ratio of a mixed batch intact.
///
/// # Examples
///
/// ```
/// use geotensor::{vectorize_wkt, GeomScaler, TransformOptions, VectorizeOptions};
/// use ndarray::{stack, Axis};
///
/// let square = vectorize_wkt("POLYGON((0 0,1 0,1 1,0 1,0 0))", &VectorizeOptions::default())
///     .unwrap();
/// let batch = stack(Axis(0), &[square.view()]).unwrap();
///
/// let mut scaler = GeomScaler::new();
/// scaler.fit(batch.view());
/// assert_eq!(scaler.scale_factor(), Some(0.5));
///
/// let normalized = scaler
///     .transform(batch.view(), &TransformOptions::default())
///     .unwrap();
/// assert_eq!(normalized[[0, 0, 0]], -1.0);
/// assert_eq!(normalized[[0, 2, 1]], 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeomScaler {
    scale_factor: Option<f64>,
}

impl GeomScaler {
    /// Creates an unfitted scaler.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fitted scale factor, or `None` before [`fit`](Self::fit).
    ///
    /// A factor of exactly 0.0 (a batch of zero-extent geometries) is a
    /// fitted state, distinct from never having been fit.
    pub fn scale_factor(&self) -> Option<f64> {
        self.scale_factor
    }

    /// Whether [`fit`](Self::fit) has run.
    pub fn is_fitted(&self) -> bool {
        self.scale_factor.is_some()
    }

    /// Fits the scale factor on a `(batch × point × feature)` tensor.
    ///
    /// For every geometry, the x,y extremes are taken over the window before
    /// its full stop, centered on its localized mean; the scale factor is the
    /// population standard deviation of all those extremes pooled across the
    /// batch. Refitting overwrites the previous factor.
    pub fn fit(&mut self, batch: ArrayView3<'_, f64>) {
        let mut extremes = Vec::with_capacity(2 * batch.len_of(Axis(0)));

        for geometry in batch.outer_iter() {
            let mean = localized_mean(geometry.view());
            let end = full_stop_index(geometry.view());
            let window = geometry.slice(s![..end, ..2]);
            if window.is_empty() {
                continue;
            }

            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for row in window.outer_iter() {
                let x = row[X_INDEX] - mean.x;
                let y = row[Y_INDEX] - mean.y;
                min = min.min(x.min(y));
                max = max.max(x.max(y));
            }
            extremes.push(min);
            extremes.push(max);
        }

        self.scale_factor = Some(population_std(&extremes));
    }

    /// Centers and scales the x,y columns of a batch, returning a new tensor.
    ///
    /// Fails with [`GeoTensorError::NotFitted`] before [`fit`](Self::fit).
    /// Centering always subtracts each geometry's own localized mean as
    /// computed from the input batch. With both `with_mean` and `with_std`
    /// disabled the result is an unchanged copy.
    pub fn transform(
        &self,
        batch: ArrayView3<'_, f64>,
        options: &TransformOptions,
    ) -> Result<Array3<f64>> {
        let scale_factor = self.scale_factor.ok_or(GeoTensorError::NotFitted)?;

        let means: Vec<Coord<f64>> = batch
            .outer_iter()
            .map(|geometry| localized_mean(geometry.view()))
            .collect();

        let mut localized = batch.to_owned();
        for (mut geometry, mean) in localized.outer_iter_mut().zip(means) {
            let end = match options.padding {
                PaddingType::Replication => geometry.nrows(),
                PaddingType::Zero => full_stop_index(geometry.view()),
            };
            if options.with_mean {
                geometry
                    .slice_mut(s![..end, X_INDEX])
                    .mapv_inplace(|x| x - mean.x);
                geometry
                    .slice_mut(s![..end, Y_INDEX])
                    .mapv_inplace(|y| y - mean.y);
            }
            if options.with_std {
                geometry
                    .slice_mut(s![..end, ..2])
                    .mapv_inplace(|value| value / scale_factor);
            }
        }

        Ok(localized)
    }
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let len = values.len() as f64;
    let mean = values.iter().sum::<f64>() / len;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / len;
    variance.sqrt()
}
