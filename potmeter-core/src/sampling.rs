//! Sampling loop
//!
//! One iteration, in order:
//! 1. Invert the LED
//! 2. Trigger and await one conversion
//! 3. Send the value as decimal ASCII
//! 4. Busy-wait for a time proportional to the value
//!
//! A higher reading therefore means slower blinking and slower reporting.

use core::fmt::Write;

use heapless::String;
use potmeter_hal::{AdcRegisters, BusyWait, OutputPin, UartTx};

use crate::adc::{AdcController, AdcError, ConversionResult, Ready};
use crate::config::{OutputConfig, PacingConfig, SamplerConfig};

/// Longest decimal rendering of a 12-bit value ("4095")
pub const RESULT_DIGITS: usize = 4;

/// Render a result as decimal ASCII without padding or terminator
pub fn render(result: ConversionResult) -> String<RESULT_DIGITS> {
    let mut text = String::new();
    // Cannot fail: a 12-bit value has at most four digits.
    let _ = write!(text, "{}", result.value());
    text
}

/// Busy-wait iterations for a result
///
/// Linear in the result, so never decreasing: zero for a reading of 0 and
/// `4095 * iterations_per_count` at full scale.
pub fn pacing_iterations(result: ConversionResult, pacing: &PacingConfig) -> u32 {
    u32::from(result.value()).saturating_mul(pacing.iterations_per_count)
}

/// Errors that end the sampling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplingError<E> {
    /// The converter did not answer in time
    Adc(AdcError),
    /// The text channel failed
    Output(E),
}

impl<E> From<AdcError> for SamplingError<E> {
    fn from(e: AdcError) -> Self {
        SamplingError::Adc(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for SamplingError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SamplingError::Adc(e) => write!(f, "{}", e),
            SamplingError::Output(e) => write!(f, "serial output failed: {:?}", e),
        }
    }
}

/// The main control loop and the collaborators it drives
pub struct SamplingLoop<R, T, L, W> {
    adc: AdcController<R, Ready>,
    output: T,
    led: L,
    spin: W,
    pacing: PacingConfig,
    text: OutputConfig,
}

impl<R, T, L, W> SamplingLoop<R, T, L, W>
where
    R: AdcRegisters,
    T: UartTx,
    L: OutputPin,
    W: BusyWait,
{
    /// Assemble the loop around an initialized controller
    pub fn new(
        adc: AdcController<R, Ready>,
        output: T,
        led: L,
        spin: W,
        config: &SamplerConfig,
    ) -> Self {
        Self {
            adc,
            output,
            led,
            spin,
            pacing: config.pacing,
            text: config.output,
        }
    }

    /// Send the banner, if one is configured
    pub fn announce(&mut self) -> Result<(), SamplingError<T::Error>> {
        if let Some(banner) = self.text.banner {
            self.output.write_str(banner).map_err(SamplingError::Output)?;
        }
        Ok(())
    }

    /// Run one iteration and return the value it sampled
    pub fn step(&mut self) -> Result<ConversionResult, SamplingError<T::Error>> {
        self.led.toggle();

        let result = self.adc.convert_once()?;
        trace!("sample {}", result.value());

        let text = render(result);
        self.output.write_str(&text).map_err(SamplingError::Output)?;
        if !self.text.separator.is_empty() {
            self.output
                .write_str(self.text.separator)
                .map_err(SamplingError::Output)?;
        }

        self.spin.spin(pacing_iterations(result, &self.pacing));
        Ok(result)
    }

    /// Loop forever; only returns if an iteration fails
    pub fn run(&mut self) -> SamplingError<T::Error> {
        loop {
            if let Err(e) = self.step() {
                return e;
            }
        }
    }

    pub fn adc(&self) -> &AdcController<R, Ready> {
        &self.adc
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    /// Take the loop apart, e.g. to reuse the LED and serial line after a fault
    pub fn into_parts(self) -> (AdcController<R, Ready>, T, L, W) {
        (self.adc, self.output, self.led, self.spin)
    }
}
