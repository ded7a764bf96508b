//! Board-agnostic core logic for the potentiometer sampler
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - ADC controller: calibration, enable and polled single conversions
//! - Sampling loop: LED toggle, serial readout and value-driven pacing
//! - Configuration type definitions
//!
//! Hardware is reached only through the `potmeter-hal` traits, so the whole
//! crate runs on the host against a simulated converter.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod adc;
pub mod config;
pub mod sampling;

pub use adc::{AdcController, AdcError, ConversionResult};
pub use config::SamplerConfig;
pub use sampling::{SamplingError, SamplingLoop};
