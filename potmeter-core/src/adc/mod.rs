//! ADC controller
//!
//! Brings the converter from an unknown power-up state to a calibrated,
//! enabled, single-channel configuration exactly once, then serves blocking
//! software-triggered conversions for the rest of program life.
//!
//! Every synchronization point is a busy-poll on a register predicate. By
//! default those polls never give up, which matches the hardware protocol:
//! a converter that never answers hangs the caller. [`WaitPolicy::Bounded`]
//! turns a stuck barrier into [`AdcError::Timeout`] instead.

mod channel;
mod controller;

#[cfg(test)]
pub(crate) mod sim;

pub use channel::{AdcChannel, SampleTime};
pub use controller::{AdcController, Ready, Uninitialized};

use potmeter_hal::adc::dr;

/// A single 12-bit conversion result
///
/// Only exists between a read of the data register and the end of the loop
/// iteration that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConversionResult(u16);

impl ConversionResult {
    /// Largest value a 12-bit conversion can produce
    pub const MAX: u16 = 4095;

    /// Take the data bits of a raw `DR` value
    pub const fn from_raw(raw: u32) -> Self {
        Self((raw & dr::DATA_MASK) as u16)
    }

    /// The converted value, 0..=4095
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<ConversionResult> for u16 {
    fn from(result: ConversionResult) -> Self {
        result.value()
    }
}

/// How long a wait-for-condition barrier may spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitPolicy {
    /// Poll until the condition holds, however long that takes
    #[default]
    Unbounded,
    /// Give up after `max_polls` evaluations of the condition (at least one)
    Bounded { max_polls: u32 },
}

/// The wait-for-condition points of the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Barrier {
    /// Ongoing conversion acknowledged a stop request
    Stop,
    /// Converter reports disabled after a disable request
    Disable,
    /// Calibration finished
    Calibration,
    /// Converter reports ready after an enable request
    Ready,
    /// Triggered conversion finished
    EndOfConversion,
}

/// Errors from the ADC controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// A barrier did not resolve within the configured poll budget
    Timeout(Barrier),
}

impl core::fmt::Display for AdcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AdcError::Timeout(barrier) => write!(f, "ADC timed out waiting for {:?}", barrier),
        }
    }
}
