//! Configuration types
//!
//! Everything is fixed at compile time. The defaults describe the reference
//! board: potentiometer wiper on PA4, longest sampling time, a pacing loop
//! of 100 iterations per count and a connect banner on the serial line.

use crate::adc::{AdcChannel, SampleTime, WaitPolicy};

/// ADC controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcConfig {
    /// The one channel that is sampled
    pub channel: AdcChannel,
    /// Sampling time for that channel
    pub sample_time: SampleTime,
    /// How long each barrier may spin
    pub wait: WaitPolicy,
}

impl AdcConfig {
    /// Reference board settings
    pub const fn new() -> Self {
        Self {
            channel: AdcChannel::In4,
            sample_time: SampleTime::LONGEST,
            wait: WaitPolicy::Unbounded,
        }
    }

    /// Same settings, but give up on any barrier after `max_polls` polls
    pub const fn with_timeout(mut self, max_polls: u32) -> Self {
        self.wait = WaitPolicy::Bounded { max_polls };
        self
    }
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Pacing delay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacingConfig {
    /// Busy-wait iterations per count of the conversion result
    pub iterations_per_count: u32,
}

impl PacingConfig {
    pub const fn new() -> Self {
        Self {
            iterations_per_count: 100,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Serial text settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputConfig {
    /// Written once before the first sample
    pub banner: Option<&'static str>,
    /// Written after every value; empty means values run together
    pub separator: &'static str,
}

impl OutputConfig {
    pub const fn new() -> Self {
        Self {
            banner: Some("USART Connected!\n"),
            separator: "",
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    pub adc: AdcConfig,
    pub pacing: PacingConfig,
    pub output: OutputConfig,
}

/// Configuration rejected by [`SamplerConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Internal channels need the sensor/reference woken up, which the
    /// controller does not do
    InternalChannel(AdcChannel),
    /// A bounded wait of zero polls can never succeed
    ZeroPollBudget,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InternalChannel(channel) => {
                write!(f, "channel {} is internal and not supported", channel.index())
            }
            ConfigError::ZeroPollBudget => write!(f, "bounded wait needs at least one poll"),
        }
    }
}

impl SamplerConfig {
    pub const fn new() -> Self {
        Self {
            adc: AdcConfig::new(),
            pacing: PacingConfig::new(),
            output: OutputConfig::new(),
        }
    }

    /// Check the settings before any hardware is touched
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adc.channel.is_internal() {
            return Err(ConfigError::InternalChannel(self.adc.channel));
        }
        if self.adc.wait == (WaitPolicy::Bounded { max_polls: 0 }) {
            return Err(ConfigError::ZeroPollBudget);
        }
        Ok(())
    }
}
