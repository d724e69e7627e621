//! Gibbs energy evaluation over scalar, paired, and mesh occupancies.

mod error;
mod occupancies;

pub use error::EvaluateError;
pub use occupancies::Occupancies;

use ndarray::{ArrayD, Zip};

use super::{B2Parameters, Temperature, energy};

/// Gibbs energy values in J/mol, shaped like the evaluated occupancies.
#[derive(Debug, Clone, PartialEq)]
pub enum Energy {
    /// Result of a [`Occupancies::Scalar`] evaluation.
    Scalar(f64),

    /// Result of a [`Occupancies::Paired`] or [`Occupancies::Mesh`] evaluation.
    Array(ArrayD<f64>),
}

impl Energy {
    /// Returns the scalar value, if this is a scalar result.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// Returns the array result, if this is an array result.
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values),
        }
    }

    /// Converts into an array; a scalar becomes a zero-dimensional array.
    #[must_use]
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Self::Scalar(value) => ndarray::arr0(value).into_dyn(),
            Self::Array(values) => values,
        }
    }
}

/// Evaluates the Gibbs energy for every occupancy pair.
///
/// # Errors
///
/// Returns [`EvaluateError`] if paired arrays differ in shape or any
/// occupancy lies outside `[0, 1]`.
pub(super) fn evaluate(
    params: &B2Parameters,
    occupancies: Occupancies<'_>,
    temperature: Temperature,
) -> Result<Energy, EvaluateError> {
    let t_kelvin = temperature.kelvin();

    if let Occupancies::Scalar { y1a, y2a } = occupancies {
        occupancies::check(y1a)?;
        occupancies::check(y2a)?;
        return Ok(Energy::Scalar(energy::gibbs(params, y1a, y2a, t_kelvin)));
    }

    let (y1a, y2a) = occupancies.into_grids()?;
    let values = Zip::from(&y1a)
        .and(&y2a)
        .map_collect(|&y1a, &y2a| energy::gibbs(params, y1a, y2a, t_kelvin));

    Ok(Energy::Array(values))
}
