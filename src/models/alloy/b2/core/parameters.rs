//! Interaction parameters for the B2 two-sublattice model.

use thiserror::Error;

/// Errors detected when a [`B2Parameters`] set is turned into a model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParametersError {
    /// Paired A/B coefficient series have different lengths.
    #[error("{series} series length mismatch: {a_len} A terms, {b_len} B terms")]
    SeriesLengthMismatch {
        series: &'static str,
        a_len: usize,
        b_len: usize,
    },

    /// A parameter is infinite or `NaN`.
    #[error("non-finite parameter {name}: {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Interaction energies and excess-Gibbs-energy coefficient series.
///
/// All values are in J/mol. Series are indexed by polynomial order in the
/// site-fraction difference `y1A - y1B`.
///
/// The default set has zero interaction energies and a single zero term in
/// each series, so the excess contribution vanishes.
#[derive(Debug, Clone, PartialEq)]
pub struct B2Parameters {
    /// A-A pair interaction energy.
    pub g_aa: f64,

    /// A-B pair interaction energy.
    pub g_ab: f64,

    /// B-B pair interaction energy.
    pub g_bb: f64,

    /// First series, weighted by `y2A`.
    pub l1a: Vec<f64>,

    /// First series, weighted by `y2B`.
    pub l1b: Vec<f64>,

    /// Second series, weighted by `y2A²`.
    pub l2a: Vec<f64>,

    /// Second series, weighted by `y2B²`.
    pub l2b: Vec<f64>,

    /// Reciprocal series, weighted by `y1A·y1B·y2A·y2B`.
    pub rec_l: Vec<f64>,
}

impl Default for B2Parameters {
    fn default() -> Self {
        Self {
            g_aa: 0.0,
            g_ab: 0.0,
            g_bb: 0.0,
            l1a: vec![0.0],
            l1b: vec![0.0],
            l2a: vec![0.0],
            l2b: vec![0.0],
            rec_l: vec![0.0],
        }
    }
}

impl B2Parameters {
    /// Creates parameters with the given pair energies and zero series.
    #[must_use]
    pub fn new(g_aa: f64, g_ab: f64, g_bb: f64) -> Self {
        Self {
            g_aa,
            g_ab,
            g_bb,
            ..Self::default()
        }
    }

    /// Sets the first excess series.
    #[must_use]
    pub fn with_l1(mut self, l1a: impl Into<Vec<f64>>, l1b: impl Into<Vec<f64>>) -> Self {
        self.l1a = l1a.into();
        self.l1b = l1b.into();
        self
    }

    /// Sets the second excess series.
    #[must_use]
    pub fn with_l2(mut self, l2a: impl Into<Vec<f64>>, l2b: impl Into<Vec<f64>>) -> Self {
        self.l2a = l2a.into();
        self.l2b = l2b.into();
        self
    }

    /// Sets the reciprocal excess series.
    #[must_use]
    pub fn with_rec_l(mut self, rec_l: impl Into<Vec<f64>>) -> Self {
        self.rec_l = rec_l.into();
        self
    }

    /// Checks series pairing and finiteness.
    pub(super) fn validate(&self) -> Result<(), ParametersError> {
        if self.l1a.len() != self.l1b.len() {
            return Err(ParametersError::SeriesLengthMismatch {
                series: "L1",
                a_len: self.l1a.len(),
                b_len: self.l1b.len(),
            });
        }
        if self.l2a.len() != self.l2b.len() {
            return Err(ParametersError::SeriesLengthMismatch {
                series: "L2",
                a_len: self.l2a.len(),
                b_len: self.l2b.len(),
            });
        }

        let scalars = [("GAA", self.g_aa), ("GAB", self.g_ab), ("GBB", self.g_bb)];
        let series = [
            ("L1A", &self.l1a),
            ("L1B", &self.l1b),
            ("L2A", &self.l2a),
            ("L2B", &self.l2b),
            ("recL", &self.rec_l),
        ];
        let values = scalars.into_iter().chain(
            series
                .into_iter()
                .flat_map(|(name, terms)| terms.iter().map(move |&value| (name, value))),
        );
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ParametersError::NonFinite { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_series_are_single_zero_terms() {
        let params = B2Parameters::default();
        assert_eq!(params.l1a, [0.0]);
        assert_eq!(params.l2b, [0.0]);
        assert_eq!(params.rec_l, [0.0]);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn mismatched_series_are_rejected() {
        let params = B2Parameters::new(0.0, -1.0, 0.0).with_l1([1.0, 2.0], [1.0]);
        assert_eq!(
            params.validate(),
            Err(ParametersError::SeriesLengthMismatch {
                series: "L1",
                a_len: 2,
                b_len: 1,
            })
        );

        let params = B2Parameters::default().with_l2(Vec::<f64>::new(), vec![3.0]);
        assert!(matches!(
            params.validate(),
            Err(ParametersError::SeriesLengthMismatch { series: "L2", .. })
        ));
    }

    #[test]
    fn empty_series_are_allowed() {
        let params = B2Parameters::default()
            .with_l1(Vec::<f64>::new(), Vec::<f64>::new())
            .with_l2(Vec::<f64>::new(), Vec::<f64>::new())
            .with_rec_l(Vec::<f64>::new());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let params = B2Parameters::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            params.validate(),
            Err(ParametersError::NonFinite { name: "GAA", .. })
        ));

        let params = B2Parameters::default().with_rec_l([0.0, f64::INFINITY]);
        assert!(matches!(
            params.validate(),
            Err(ParametersError::NonFinite { name: "recL", .. })
        ));
    }
}
