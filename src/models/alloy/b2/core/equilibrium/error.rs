use thiserror::Error;
use twine_solvers::optimization::golden_section;

/// Errors that prevent an equilibrium solve from producing a result.
///
/// A search that stops without converging is not an error; see
/// [`Equilibrium::status`](super::Equilibrium::status).
#[derive(Debug, Error)]
pub enum EquilibriumError {
    /// The solver configuration was rejected.
    #[error("invalid solver configuration")]
    Config(#[from] golden_section::ConfigError),

    /// The golden section solver encountered an error.
    #[error("golden section solver error")]
    GoldenSection(#[from] golden_section::Error),
}
