//! Gibbs energy of the B2 two-sublattice binary solution.
//!
//! The molar Gibbs energy is the sum of three contributions:
//!
//! - `h0`: pairwise mixing enthalpy, bilinear in the site fractions
//! - `st`: ideal configurational term, `0.5·R·T·Σ y·ln(y)` over both sublattices
//! - `gex`: excess energy as polynomial series in `y1A - y1B`
//!
//! Functions here work on raw `f64` values (site fractions and kelvin, J/mol
//! out) and do not range-check their arguments.

use uom::si::{f64::MolarEnergy, molar_energy::joule_per_mole};

use crate::support::math::x_ln_x;

use super::B2Parameters;

/// Universal gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// The three additive contributions to the molar Gibbs energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GibbsTerms {
    /// Pairwise mixing enthalpy `h0`.
    pub mixing_enthalpy: MolarEnergy,

    /// Ideal configurational contribution `st`, i.e. `-T·S_conf`.
    pub ideal_entropy: MolarEnergy,

    /// Excess Gibbs energy `gex`.
    pub excess: MolarEnergy,
}

impl GibbsTerms {
    /// Returns the total molar Gibbs energy.
    #[must_use]
    pub fn total(&self) -> MolarEnergy {
        self.mixing_enthalpy + self.ideal_entropy + self.excess
    }

    fn from_raw(raw: RawTerms) -> Self {
        Self {
            mixing_enthalpy: MolarEnergy::new::<joule_per_mole>(raw.h0),
            ideal_entropy: MolarEnergy::new::<joule_per_mole>(raw.st),
            excess: MolarEnergy::new::<joule_per_mole>(raw.gex),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RawTerms {
    h0: f64,
    st: f64,
    gex: f64,
}

/// Site fractions of both species on both sublattices.
#[derive(Debug, Clone, Copy)]
struct Sites {
    y1a: f64,
    y1b: f64,
    y2a: f64,
    y2b: f64,
}

impl Sites {
    fn new(y1a: f64, y2a: f64) -> Self {
        Self {
            y1a,
            y1b: 1.0 - y1a,
            y2a,
            y2b: 1.0 - y2a,
        }
    }
}

/// Returns the molar Gibbs energy in J/mol.
pub(super) fn gibbs(params: &B2Parameters, y1a: f64, y2a: f64, t_kelvin: f64) -> f64 {
    let raw = raw_terms(params, y1a, y2a, t_kelvin);
    raw.h0 + raw.st + raw.gex
}

/// Returns the individual Gibbs energy contributions.
pub(super) fn terms(params: &B2Parameters, y1a: f64, y2a: f64, t_kelvin: f64) -> GibbsTerms {
    GibbsTerms::from_raw(raw_terms(params, y1a, y2a, t_kelvin))
}

fn raw_terms(params: &B2Parameters, y1a: f64, y2a: f64, t_kelvin: f64) -> RawTerms {
    let sites = Sites::new(y1a, y2a);
    RawTerms {
        h0: mixing_enthalpy(params, sites),
        st: ideal_entropy(sites, t_kelvin),
        gex: excess(params, sites),
    }
}

fn mixing_enthalpy(params: &B2Parameters, s: Sites) -> f64 {
    s.y1a * s.y2a * params.g_aa
        + s.y1a * s.y2b * params.g_ab
        + s.y1b * s.y2a * params.g_ab
        + s.y1b * s.y2b * params.g_bb
}

fn ideal_entropy(s: Sites, t_kelvin: f64) -> f64 {
    0.5 * GAS_CONSTANT
        * t_kelvin
        * (x_ln_x(s.y1a) + x_ln_x(s.y1b) + x_ln_x(s.y2a) + x_ln_x(s.y2b))
}

fn excess(params: &B2Parameters, s: Sites) -> f64 {
    let w1 = s.y1a * s.y1b;
    let d1 = s.y1a - s.y1b;
    let d2 = s.y2a - s.y2b;

    let first: f64 = params
        .l1a
        .iter()
        .zip(&params.l1b)
        .zip(powers(d1))
        .map(|((la, lb), p)| w1 * p * (s.y2a * la + s.y2b * lb))
        .sum();

    let second: f64 = params
        .l2a
        .iter()
        .zip(&params.l2b)
        .zip(powers(d1))
        .map(|((la, lb), p)| w1 * p * (s.y2a * s.y2a * la + s.y2b * s.y2b * lb))
        .sum();

    let w = 0.5 * w1 * s.y2a * s.y2b;
    let reciprocal: f64 = params
        .rec_l
        .iter()
        .zip(powers(d1).zip(powers(d2)))
        .map(|(l, (p1, p2))| w * l * (p1 + p2))
        .sum();

    first + second + reciprocal
}

/// Yields `1, x, x², …` with `x⁰ = 1` even for `x = 0`.
fn powers(x: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(1.0), move |p| Some(p * x))
}
