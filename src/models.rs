//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently `alloy`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The module re-exports
//! the core types callers need, and its [`twine_core::Model`] implementations
//! are thin adapters that delegate to the core API.

pub mod alloy;
