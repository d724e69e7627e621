use ndarray::{Array2, ArrayD, ArrayView, ArrayView1, ArrayViewD, Dimension, arr0};

use crate::support::constraint::UnitInterval;

use super::EvaluateError;

/// Sublattice occupancies to evaluate, tagged by input shape.
#[derive(Debug, Clone)]
pub enum Occupancies<'a> {
    /// A single `(y1A, y2A)` point.
    Scalar { y1a: f64, y2a: f64 },

    /// Element-wise pairs from two arrays of identical shape.
    Paired {
        y1a: ArrayViewD<'a, f64>,
        y2a: ArrayViewD<'a, f64>,
    },

    /// Every combination of a `y1A` value with a `y2A` value.
    ///
    /// Results are indexed `[i, j]` for `y1a[i]` and `y2a[j]`.
    Mesh {
        y1a: ArrayView1<'a, f64>,
        y2a: ArrayView1<'a, f64>,
    },
}

impl<'a> Occupancies<'a> {
    /// Creates a single-point input.
    #[must_use]
    pub fn scalar(y1a: f64, y2a: f64) -> Self {
        Self::Scalar { y1a, y2a }
    }

    /// Creates an element-wise input from two arrays of any dimension.
    #[must_use]
    pub fn paired<D: Dimension>(y1a: ArrayView<'a, f64, D>, y2a: ArrayView<'a, f64, D>) -> Self {
        Self::Paired {
            y1a: y1a.into_dyn(),
            y2a: y2a.into_dyn(),
        }
    }

    /// Creates an outer-product input from two one-dimensional arrays.
    #[must_use]
    pub fn mesh(y1a: ArrayView1<'a, f64>, y2a: ArrayView1<'a, f64>) -> Self {
        Self::Mesh { y1a, y2a }
    }

    /// Checks every occupancy and expands the input into two equal-shaped grids.
    ///
    /// A scalar input becomes a pair of zero-dimensional arrays.
    pub(super) fn into_grids(self) -> Result<(ArrayD<f64>, ArrayD<f64>), EvaluateError> {
        match self {
            Self::Scalar { y1a, y2a } => {
                check(y1a)?;
                check(y2a)?;
                Ok((arr0(y1a).into_dyn(), arr0(y2a).into_dyn()))
            }
            Self::Paired { y1a, y2a } => {
                if y1a.shape() != y2a.shape() {
                    return Err(EvaluateError::ShapeMismatch {
                        y1a: y1a.shape().to_vec(),
                        y2a: y2a.shape().to_vec(),
                    });
                }
                check_all(y1a.iter().chain(y2a.iter()))?;
                Ok((y1a.to_owned(), y2a.to_owned()))
            }
            Self::Mesh { y1a, y2a } => {
                check_all(y1a.iter().chain(y2a.iter()))?;
                let shape = (y1a.len(), y2a.len());
                let grid_1 = Array2::from_shape_fn(shape, |(i, _)| y1a[i]);
                let grid_2 = Array2::from_shape_fn(shape, |(_, j)| y2a[j]);
                Ok((grid_1.into_dyn(), grid_2.into_dyn()))
            }
        }
    }
}

/// Rejects an occupancy outside `[0, 1]` or `NaN`.
pub(super) fn check(value: f64) -> Result<(), EvaluateError> {
    UnitInterval::new(value)
        .map(|_| ())
        .map_err(|source| EvaluateError::Occupancy { value, source })
}

fn check_all<'v>(values: impl Iterator<Item = &'v f64>) -> Result<(), EvaluateError> {
    values.copied().try_for_each(check)
}
