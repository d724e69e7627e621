//! B2 ordered binary solution models.
//!
//! This module provides [`twine_core::Model`] implementations for the
//! two-sublattice B2 model. The computational core, including scalar, paired,
//! and mesh evaluation, lives in the internal `core` module; its public types
//! are re-exported here.
//!
//! - [`GibbsModel`]: Gibbs energy terms at given site fractions
//! - [`EquilibriumModel`]: minimum-energy site fractions at a bulk composition

mod core;

pub use self::core::{
    B2Binary, B2Parameters, ConfigError, Energy, Equilibrium, EquilibriumConfig,
    EquilibriumError, EvaluateError, GAS_CONSTANT, GibbsTerms, Occupancies, ParametersError,
    SiteFraction, Status, Temperature, feasible_bounds,
};

use std::convert::Infallible;

use twine_core::Model;

/// Input for [`GibbsModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GibbsInput {
    /// Site fraction of A on sublattice 1.
    pub y1a: SiteFraction,

    /// Site fraction of A on sublattice 2.
    pub y2a: SiteFraction,

    pub temperature: Temperature,
}

/// Gibbs energy of a B2 binary at given site fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct GibbsModel {
    binary: B2Binary,
}

impl GibbsModel {
    #[must_use]
    pub fn new(binary: B2Binary) -> Self {
        Self { binary }
    }
}

impl Model for GibbsModel {
    type Input = GibbsInput;
    type Output = GibbsTerms;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.binary.terms(input.y1a, input.y2a, input.temperature))
    }
}

/// Input for [`EquilibriumModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumInput {
    /// Bulk mole fraction of A.
    pub x_a: SiteFraction,

    pub temperature: Temperature,
}

/// Equilibrium site fractions of a B2 binary at fixed composition and temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumModel {
    binary: B2Binary,
    config: EquilibriumConfig,
}

impl EquilibriumModel {
    /// Creates a model using the default solver configuration.
    #[must_use]
    pub fn new(binary: B2Binary) -> Self {
        Self::with_config(binary, EquilibriumConfig::default())
    }

    #[must_use]
    pub fn with_config(binary: B2Binary, config: EquilibriumConfig) -> Self {
        Self { binary, config }
    }
}

impl Model for EquilibriumModel {
    type Input = EquilibriumInput;
    type Output = Equilibrium;
    type Error = EquilibriumError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.binary
            .equilibrium(input.x_a, input.temperature, &self.config)
    }
}
