use std::ops::Deref;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, StrictlyPositive, UnitInterval,
};

/// A fraction in `[0, 1]`.
///
/// Used for sublattice site fractions (`y1A`, `y2A`) and for the bulk mole
/// fraction `xA`.
pub type SiteFraction = Constrained<f64, UnitInterval>;

/// A finite absolute temperature strictly above zero kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature(Constrained<f64, StrictlyPositive>);

impl Temperature {
    /// Creates a [`Temperature`] from a thermodynamic temperature quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the temperature is not strictly positive and finite in kelvin.
    pub fn new(temperature: ThermodynamicTemperature) -> ConstraintResult<Self> {
        Self::from_kelvin(temperature.get::<kelvin>())
    }

    /// Creates a [`Temperature`] from a value in kelvin.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is zero, negative, infinite, or `NaN`.
    pub fn from_kelvin(value: f64) -> ConstraintResult<Self> {
        let value = StrictlyPositive::new(value)?;
        if !value.as_ref().is_finite() {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self(value))
    }

    /// Returns the temperature in kelvin.
    #[must_use]
    pub fn kelvin(self) -> f64 {
        *self.0.as_ref()
    }
}

impl Deref for Temperature {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl From<Temperature> for ThermodynamicTemperature {
    fn from(temperature: Temperature) -> Self {
        ThermodynamicTemperature::new::<kelvin>(temperature.kelvin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn converts_to_kelvin() {
        let t = Temperature::new(ThermodynamicTemperature::new::<degree_celsius>(726.85)).unwrap();
        assert_relative_eq!(t.kelvin(), 1000.0, epsilon = 1e-9);
        assert_relative_eq!(*t, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn absolute_zero_is_rejected() {
        assert!(Temperature::from_kelvin(0.0).is_err());
        assert!(Temperature::from_kelvin(-10.0).is_err());
        assert!(Temperature::from_kelvin(f64::NAN).is_err());
        assert_eq!(
            Temperature::from_kelvin(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn infinite_quantity_is_rejected() {
        let hot = ThermodynamicTemperature::new::<kelvin>(f64::INFINITY);
        assert!(Temperature::new(hot).is_err());
        assert!(Temperature::from_kelvin(f64::MAX).is_ok());
    }
}
