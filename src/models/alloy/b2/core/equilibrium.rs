//! Equilibrium sublattice occupancies at fixed composition and temperature.
//!
//! Mass balance `xA = (y1A + y2A) / 2` leaves `y1A` as the only free variable.
//! The Gibbs energy along that line is minimized by golden section search
//! over the interval that keeps both site fractions inside `[0, 1]`.

mod config;
mod error;
mod problem;

pub use config::EquilibriumConfig;
pub use error::EquilibriumError;

use tracing::{debug, trace, warn};
use twine_solvers::optimization::golden_section::{self, Status};
use uom::si::{f64::MolarEnergy, molar_energy::joule_per_mole};

use super::{B2Parameters, SiteFraction, Temperature};

use problem::{FixedComposition, IsothermalGibbs};

/// Minimum-energy site fractions for a bulk composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    /// Site fraction of A on sublattice 1.
    pub y1a: f64,

    /// Site fraction of A on sublattice 2, `2·xA - y1A`.
    pub y2a: f64,

    /// Molar Gibbs energy at `(y1a, y2a)`.
    pub energy: MolarEnergy,

    /// Solver termination status, passed through unchanged.
    pub status: Status,

    /// Iteration count performed by the solver.
    pub iters: usize,
}

impl Equilibrium {
    /// Bulk mole fraction of A, `(y1A + y2A) / 2`.
    #[must_use]
    pub fn x_a(&self) -> f64 {
        0.5 * (self.y1a + self.y2a)
    }

    /// Long-range order parameter `(y1A - y2A) / 2`.
    ///
    /// Zero for a disordered (A2) state; its sign tells which sublattice
    /// A prefers.
    #[must_use]
    pub fn order_parameter(&self) -> f64 {
        0.5 * (self.y1a - self.y2a)
    }

    /// Returns `true` if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Returns the `y1A` interval that keeps `y1A` and `2·xA - y1A` within `[0, 1]`.
#[must_use]
pub fn feasible_bounds(x_a: SiteFraction) -> [f64; 2] {
    let x_a = x_a.into_inner();
    [(2.0 * x_a - 1.0).max(0.0), (2.0 * x_a).min(1.0)]
}

/// Minimizes the Gibbs energy over `y1A` at fixed `xA` and temperature.
///
/// # Errors
///
/// Returns [`EquilibriumError`] if the configuration is rejected or the
/// solver fails.
pub(super) fn equilibrium(
    params: &B2Parameters,
    x_a: SiteFraction,
    temperature: Temperature,
    config: &EquilibriumConfig,
) -> Result<Equilibrium, EquilibriumError> {
    let model = IsothermalGibbs::new(params, temperature.kelvin());
    let problem = FixedComposition::new(x_a.into_inner());

    let solution = golden_section::minimize(
        &model,
        &problem,
        feasible_bounds(x_a),
        &config.golden_section()?,
        |event: &golden_section::Event<'_, _, _>| -> Option<golden_section::Action> {
            trace!(y1a = event.x(), best = event.other().x, "golden section step");
            None
        },
    )?;

    if solution.status != Status::Converged {
        warn!(
            status = ?solution.status,
            iters = solution.iters,
            "equilibrium search did not converge"
        );
    }

    let result = Equilibrium {
        y1a: solution.snapshot.input.y1a,
        y2a: solution.snapshot.input.y2a,
        energy: MolarEnergy::new::<joule_per_mole>(solution.objective),
        status: solution.status,
        iters: solution.iters,
    };

    debug!(
        x_a = x_a.into_inner(),
        t = temperature.kelvin(),
        y1a = result.y1a,
        y2a = result.y2a,
        g = solution.objective,
        status = ?result.status,
        "equilibrium site fractions"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::support::constraint::UnitInterval;

    fn x(value: f64) -> SiteFraction {
        UnitInterval::new(value).unwrap()
    }

    fn kelvin(value: f64) -> Temperature {
        Temperature::from_kelvin(value).unwrap()
    }

    fn ordering_params() -> B2Parameters {
        B2Parameters::new(0.0, -10_000.0, 0.0)
    }

    #[test]
    fn bounds_follow_mass_balance() {
        assert_eq!(feasible_bounds(x(0.0)), [0.0, 0.0]);
        assert_eq!(feasible_bounds(x(1.0)), [1.0, 1.0]);
        assert_eq!(feasible_bounds(x(0.5)), [0.0, 1.0]);
        assert_eq!(feasible_bounds(x(0.25)), [0.0, 0.5]);
        assert_eq!(feasible_bounds(x(0.75)), [0.5, 1.0]);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn pure_b_collapses_to_single_point() {
        let result = equilibrium(
            &ordering_params(),
            x(0.0),
            kelvin(1000.0),
            &EquilibriumConfig::default(),
        )
        .unwrap();

        assert_eq!(result.y1a, 0.0);
        assert_eq!(result.y2a, 0.0);
        assert_eq!(result.energy.get::<joule_per_mole>(), 0.0);
        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iters, 0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn pure_a_collapses_to_single_point() {
        let result = equilibrium(
            &ordering_params(),
            x(1.0),
            kelvin(1000.0),
            &EquilibriumConfig::default(),
        )
        .unwrap();

        assert_eq!(result.y1a, 1.0);
        assert_eq!(result.y2a, 1.0);
        assert!(result.is_converged());
    }

    #[test]
    fn mass_balance_holds_across_compositions() {
        let params = ordering_params().with_l1([2000.0, -500.0], [1500.0, 300.0]);
        for x_a in [0.05, 0.2, 0.37, 0.5, 0.61, 0.9] {
            let result = equilibrium(
                &params,
                x(x_a),
                kelvin(700.0),
                &EquilibriumConfig::default(),
            )
            .unwrap();

            assert!(result.is_converged());
            assert_abs_diff_eq!(result.x_a(), x_a, epsilon = 1e-12);
            assert!((0.0..=1.0).contains(&result.y1a));
            assert!((-1e-12..=1.0 + 1e-12).contains(&result.y2a));
        }
    }

    #[test]
    fn orders_below_critical_temperature() {
        // With GAB = -10000 J/mol the equiatomic B2 state disorders near 1203 K.
        let result = equilibrium(
            &ordering_params(),
            x(0.5),
            kelvin(500.0),
            &EquilibriumConfig::default(),
        )
        .unwrap();

        assert!(result.is_converged());
        assert!(result.order_parameter().abs() > 0.45);
        assert!(result.energy.get::<joule_per_mole>() < -9000.0);
    }

    #[test]
    fn disorders_above_critical_temperature() {
        let result = equilibrium(
            &ordering_params(),
            x(0.5),
            kelvin(2000.0),
            &EquilibriumConfig::default(),
        )
        .unwrap();

        assert!(result.is_converged());
        assert_abs_diff_eq!(result.y1a, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(result.order_parameter(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn non_convergence_is_passed_through() {
        let config = EquilibriumConfig::new(2, 0.0).unwrap();
        let result = equilibrium(&ordering_params(), x(0.5), kelvin(2000.0), &config).unwrap();

        assert_eq!(result.status, Status::MaxIters);
        assert_eq!(result.iters, 2);
        assert_abs_diff_eq!(result.x_a(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn converges_away_from_first_interior_point() {
        // The first interior point of a [0, 1] golden section bracket.
        let first_interior = 0.381_966_011_250_105_1;

        let result = equilibrium(
            &ordering_params(),
            x(0.5),
            kelvin(500.0),
            &EquilibriumConfig::default(),
        )
        .unwrap();

        assert!(result.is_converged());
        assert!(result.iters > 1);
        assert!((result.y1a - first_interior).abs() > 0.1);
    }
}
