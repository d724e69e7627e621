//! Alloy solution models.
//!
//! This module contains Gibbs-energy models for ordered and disordered
//! metallic solutions described on sublattices.

pub mod b2;
