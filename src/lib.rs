//! # Twine Sublattice
//!
//! Sublattice solution models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The first model is the two-sublattice binary used for B2 ordering: a
//! closed-form Gibbs energy in the A site fractions of both sublattices, and
//! a bounded search for the site fractions that minimize it at a given bulk
//! composition and temperature.
//!
//! ```
//! use twine_sublattice::models::alloy::b2::{
//!     B2Binary, B2Parameters, EquilibriumConfig, Occupancies, Temperature,
//! };
//! use twine_sublattice::support::constraint::UnitInterval;
//!
//! let alloy = B2Binary::new(B2Parameters::new(0.0, -10_000.0, 0.0)).unwrap();
//! let t = Temperature::from_kelvin(1000.0).unwrap();
//!
//! let g = alloy.evaluate(Occupancies::scalar(0.5, 0.5), t).unwrap();
//! assert!((g.as_scalar().unwrap() + 10_762.83).abs() < 1e-2);
//!
//! let eq = alloy
//!     .equilibrium(UnitInterval::new(0.5).unwrap(), t, &EquilibriumConfig::default())
//!     .unwrap();
//! assert!(eq.is_converged());
//! assert!((eq.x_a() - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
