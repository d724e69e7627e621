use twine_solvers::optimization::golden_section;

/// Solver configuration for the equilibrium site-fraction search.
///
/// Tolerances are checked when the configuration is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumConfig {
    max_iters: usize,
    y1a_tol: f64,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            y1a_tol: 1e-8,
        }
    }
}

impl EquilibriumConfig {
    /// Creates a configuration.
    ///
    /// `y1a_tol` is the absolute tolerance on the sublattice-1 site fraction.
    ///
    /// # Errors
    ///
    /// Returns [`golden_section::ConfigError`] if `y1a_tol` is negative or
    /// not finite.
    pub fn new(max_iters: usize, y1a_tol: f64) -> Result<Self, golden_section::ConfigError> {
        golden_section::Config::new(max_iters, y1a_tol, 0.0)?;
        Ok(Self { max_iters, y1a_tol })
    }

    /// Maximum iteration count for the golden section search.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Absolute tolerance on `y1A`.
    #[must_use]
    pub fn y1a_tol(&self) -> f64 {
        self.y1a_tol
    }

    /// Converts this configuration into a golden section solver configuration.
    pub(super) fn golden_section(
        &self,
    ) -> Result<golden_section::Config, golden_section::ConfigError> {
        golden_section::Config::new(self.max_iters, self.y1a_tol, 0.0)
    }
}
