//! Problem formulation for the equilibrium site-fraction search.

use std::convert::Infallible;

use twine_core::{Model, OptimizationProblem};

use crate::models::alloy::b2::core::{B2Parameters, energy};

/// Site fractions of A on both sublattices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SitePair {
    pub(super) y1a: f64,
    pub(super) y2a: f64,
}

/// Gibbs energy model at a fixed temperature.
///
/// Returns the molar Gibbs energy in J/mol.
pub(super) struct IsothermalGibbs<'a> {
    params: &'a B2Parameters,
    t_kelvin: f64,
}

impl<'a> IsothermalGibbs<'a> {
    pub(super) fn new(params: &'a B2Parameters, t_kelvin: f64) -> Self {
        Self { params, t_kelvin }
    }
}

impl Model for IsothermalGibbs<'_> {
    type Input = SitePair;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(energy::gibbs(
            self.params,
            input.y1a,
            input.y2a,
            self.t_kelvin,
        ))
    }
}

/// Optimization problem along the fixed-composition line `y2A = 2·xA - y1A`.
///
/// The solver variable is `y1A`; the objective is the Gibbs energy.
pub(super) struct FixedComposition {
    x_a: f64,
}

impl FixedComposition {
    pub(super) fn new(x_a: f64) -> Self {
        Self { x_a }
    }
}

impl OptimizationProblem<1> for FixedComposition {
    type Input = SitePair;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(SitePair {
            y1a: x[0],
            y2a: 2.0 * self.x_a - x[0],
        })
    }

    fn objective(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
