#![warn(missing_docs)]

//! Provides generic utilities for procnoise, the procedural noise synthesis library.

/// Configures log4rs for hosts embedding the noise library.
pub mod logging;
/// Scalar helpers shared by the noise generators: interpolation and periodic index wrapping.
pub mod math;
mod vector;

pub use vector::Vector;
