//! Defines [`GeoTensorError`], representing all errors returned by this crate.

use std::borrow::Cow;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoTensorError {
    /// An operation was requested with an inconsistent set of parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(Cow<'static, str>),

    /// A geometry holds more points than the caller's budget allows and
    /// simplification was not requested.
    #[error("geometry has {points} points, more than the budget of {max_points}; enable simplification or raise the budget")]
    BudgetExceeded {
        /// Points counted in the geometry.
        points: usize,
        /// The caller's point budget.
        max_points: usize,
    },

    /// Simplification ran out of tolerance without meeting the point budget.
    #[error("cannot simplify below the budget of {max_points} points; stuck at {points}")]
    CannotSimplify {
        /// Points remaining after the last simplification round.
        points: usize,
        /// The caller's point budget.
        max_points: usize,
    },

    /// A geometry type the encoder has no rules for.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(Cow<'static, str>),

    /// `transform` was called on a scaler that was never fitted.
    #[error("scaler is not fitted; call fit() before transform()")]
    NotFitted,

    /// Malformed WKT input, surfaced from the parser.
    #[error("failed to parse WKT: {0}")]
    WktStr(&'static str),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoTensorError>;
