//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints (site fractions, temperatures)
//! - [`math`]: Scalar helpers such as the zero-extended logarithm

pub mod constraint;
pub mod math;
