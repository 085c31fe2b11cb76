//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Environment loading, validation and logging setup
//! - [`bootstrap`] - Composition root wiring adapters into the job

pub mod bootstrap;
pub mod config;
