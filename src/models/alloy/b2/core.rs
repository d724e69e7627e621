//! Two-sublattice (B2) binary solution model.
//!
//! Species A and B share two interpenetrating sublattices. Each sublattice is
//! fully occupied, so the state is described by the A site fractions `y1A`
//! and `y2A`. The B2 ordered state has `y1A ≠ y2A`; the disordered (A2)
//! state has `y1A = y2A`.

mod energy;
mod equilibrium;
mod evaluate;
mod input;
mod parameters;

pub use energy::{GAS_CONSTANT, GibbsTerms};
pub use equilibrium::{Equilibrium, EquilibriumConfig, EquilibriumError, feasible_bounds};
pub use evaluate::{Energy, EvaluateError, Occupancies};
pub use input::{SiteFraction, Temperature};
pub use parameters::{B2Parameters, ParametersError};
pub use twine_solvers::optimization::golden_section::{ConfigError, Status};

use uom::si::f64::MolarEnergy;

/// A B2 binary solution with fixed interaction parameters.
///
/// Parameters are validated once in [`B2Binary::new`] and cannot change
/// afterwards, so a model can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct B2Binary {
    params: B2Parameters,
}

impl B2Binary {
    /// Nearest-neighbor coordination number of the B2 lattice.
    pub const COORDINATION_NUMBER: u32 = 8;

    /// Creates a model from a parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ParametersError`] if paired series differ in length or any
    /// parameter is not finite.
    pub fn new(params: B2Parameters) -> Result<Self, ParametersError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the model parameters.
    #[must_use]
    pub fn parameters(&self) -> &B2Parameters {
        &self.params
    }

    /// Returns the enthalpy, configurational, and excess contributions at one point.
    #[must_use]
    pub fn terms(
        &self,
        y1a: SiteFraction,
        y2a: SiteFraction,
        temperature: Temperature,
    ) -> GibbsTerms {
        energy::terms(
            &self.params,
            y1a.into_inner(),
            y2a.into_inner(),
            temperature.kelvin(),
        )
    }

    /// Returns the molar Gibbs energy at one point.
    #[must_use]
    pub fn evaluate_scalar(
        &self,
        y1a: SiteFraction,
        y2a: SiteFraction,
        temperature: Temperature,
    ) -> MolarEnergy {
        self.terms(y1a, y2a, temperature).total()
    }

    /// Evaluates the molar Gibbs energy (J/mol) for scalar, paired, or mesh occupancies.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError`] if paired arrays differ in shape or any
    /// occupancy lies outside `[0, 1]`.
    pub fn evaluate(
        &self,
        occupancies: Occupancies<'_>,
        temperature: Temperature,
    ) -> Result<Energy, EvaluateError> {
        evaluate::evaluate(&self.params, occupancies, temperature)
    }

    /// Finds the site fractions that minimize the Gibbs energy at bulk composition `x_a`.
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumError`] if the golden section solver fails.
    /// A search that stops without converging still returns `Ok`; check
    /// [`Equilibrium::status`].
    pub fn equilibrium(
        &self,
        x_a: SiteFraction,
        temperature: Temperature,
        config: &EquilibriumConfig,
    ) -> Result<Equilibrium, EquilibriumError> {
        equilibrium::equilibrium(&self.params, x_a, temperature, config)
    }
}
