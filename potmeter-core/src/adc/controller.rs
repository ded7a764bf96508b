//! Calibration, enable and polled conversion protocol
//!
//! Follows the RM0360 appendix A.7 sequences: calibrate with the converter
//! disabled, enable from a known-clear ready flag, then trigger single
//! conversions in software and poll for end of conversion.

use core::marker::PhantomData;

use potmeter_hal::adc::{cfgr1, chselr, cr, isr, smpr, AdcRegister, AdcRegisters};

use super::{AdcChannel, AdcError, Barrier, ConversionResult, SampleTime, WaitPolicy};
use crate::config::AdcConfig;

/// Typestate: not yet calibrated and enabled
#[derive(Debug)]
pub struct Uninitialized;

/// Typestate: calibrated, enabled and configured; accepts triggers
#[derive(Debug)]
pub struct Ready;

/// Owned handle over the ADC register block
///
/// Register access goes through the vetted operations below only. Setup
/// steps exist on the [`Uninitialized`] handle; conversions exist on the
/// [`Ready`] handle returned by [`AdcController::initialize`].
pub struct AdcController<R, S = Uninitialized> {
    regs: R,
    config: AdcConfig,
    _state: PhantomData<S>,
}

impl<R: AdcRegisters, S> AdcController<R, S> {
    /// Configuration this controller was built with
    pub fn config(&self) -> &AdcConfig {
        &self.config
    }

    /// Borrow the register block, e.g. to inspect a simulated converter
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Give back the register block
    pub fn release(self) -> R {
        self.regs
    }

    /// `ADEN`: converter is enabled (also set while a disable is pending)
    pub fn is_enabled(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Cr, cr::ADEN)
    }

    /// `ADDIS`: a disable request is still in progress
    pub fn is_disabling(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Cr, cr::ADDIS)
    }

    /// `ADCAL`: calibration is running
    pub fn is_calibrating(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Cr, cr::ADCAL)
    }

    /// `ADSTART`: a conversion is in progress
    pub fn is_converting(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Cr, cr::ADSTART)
    }

    /// `ADRDY`: converter is ready to accept triggers
    pub fn is_ready(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Isr, isr::ADRDY)
    }

    /// `EOC`: a conversion result is waiting in the data register
    pub fn is_end_of_conversion(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Isr, isr::EOC)
    }

    /// `DMAEN`: results would be drained by DMA
    pub fn is_dma_enabled(&mut self) -> bool {
        self.regs.bit_is_set(AdcRegister::Cfgr1, cfgr1::DMAEN)
    }

    /// Raw `CHSELR` channel bits
    pub fn selected_channels(&mut self) -> u32 {
        self.regs.read(AdcRegister::Chselr) & chselr::MASK
    }

    /// Current `SMP` setting
    pub fn sample_time(&mut self) -> Option<SampleTime> {
        SampleTime::from_bits(self.regs.read(AdcRegister::Smpr) & smpr::SMP_MASK)
    }

    /// Request a `CR` action
    ///
    /// `CR` bits are set by writing one and writing zero has no effect, so
    /// only the requested bit is written. A read-modify-write could echo
    /// `ADEN` back while another action is requested.
    fn request(&mut self, bit: u32) {
        self.regs.write(AdcRegister::Cr, bit);
    }

    /// Spin until `condition` holds, subject to the wait policy
    ///
    /// Returns the number of polls it took.
    fn wait_until<F>(&mut self, barrier: Barrier, mut condition: F) -> Result<u32, AdcError>
    where
        F: FnMut(&mut Self) -> bool,
    {
        let mut polls: u32 = 0;
        loop {
            polls = polls.saturating_add(1);
            if condition(self) {
                return Ok(polls);
            }
            if let WaitPolicy::Bounded { max_polls } = self.config.wait {
                if polls >= max_polls {
                    error!("ADC barrier {} stuck after {} polls", barrier, polls);
                    return Err(AdcError::Timeout(barrier));
                }
            }
            core::hint::spin_loop();
        }
    }

    fn into_state<T>(self) -> AdcController<R, T> {
        AdcController {
            regs: self.regs,
            config: self.config,
            _state: PhantomData,
        }
    }
}

impl<R: AdcRegisters> AdcController<R, Uninitialized> {
    /// Take ownership of the register block
    ///
    /// The caller must already have enabled the ADC clock and put the input
    /// pin into analog mode. Nothing is written until [`initialize`].
    ///
    /// [`initialize`]: AdcController::initialize
    pub fn new(regs: R, config: AdcConfig) -> Self {
        Self {
            regs,
            config,
            _state: PhantomData,
        }
    }

    /// Run the whole bring-up sequence
    ///
    /// Disable, drop DMA, calibrate, clear stale ready, enable, select the
    /// channel, set the sampling time. Each step finishes before the next
    /// one starts.
    pub fn initialize(mut self) -> Result<AdcController<R, Ready>, AdcError> {
        debug!("ADC bring-up: {}", self.config);

        self.ensure_disabled()?;
        self.disable_dma();
        self.calibrate()?;
        self.clear_ready();
        self.enable()?;

        let channel = self.config.channel;
        let sample_time = self.config.sample_time;
        self.select_channel(channel);
        self.set_sample_time(sample_time);

        info!("ADC ready on channel {}", channel.index());
        Ok(self.into_state())
    }

    /// Make sure the converter is off
    ///
    /// Does nothing if it already is. Otherwise any ongoing conversion is
    /// stopped first, because a disable request is ignored while `ADSTART`
    /// is set, then the disable is requested and awaited.
    pub fn ensure_disabled(&mut self) -> Result<(), AdcError> {
        if !self.is_enabled() {
            trace!("ADC already disabled");
            return Ok(());
        }

        if self.is_converting() {
            debug!("stopping ongoing conversion");
            self.request(cr::ADSTP);
            self.wait_until(Barrier::Stop, |adc| !adc.is_converting())?;
        }

        debug!("disabling ADC");
        self.request(cr::ADDIS);
        let polls = self.wait_until(Barrier::Disable, |adc| !adc.is_enabled())?;
        trace!("ADC disabled after {} polls", polls);
        Ok(())
    }

    /// Detach DMA so results are only taken by explicit reads
    pub fn disable_dma(&mut self) {
        self.regs.clear_bits(AdcRegister::Cfgr1, cfgr1::DMAEN);
    }

    /// Run the self-calibration and wait for it to finish
    ///
    /// Only valid with the converter disabled.
    pub fn calibrate(&mut self) -> Result<(), AdcError> {
        debug_assert!(!self.is_enabled(), "calibration requires ADEN = 0");

        debug!("calibrating ADC");
        self.request(cr::ADCAL);
        let polls = self.wait_until(Barrier::Calibration, |adc| !adc.is_calibrating())?;
        trace!("calibration done after {} polls", polls);
        Ok(())
    }

    /// Clear a ready flag left over from an earlier session
    pub fn clear_ready(&mut self) {
        if self.is_ready() {
            trace!("clearing stale ADRDY");
            // Write-one-to-clear; writing only this bit leaves other flags alone.
            self.regs.write(AdcRegister::Isr, isr::ADRDY);
        }
    }

    /// Enable the converter and wait until it reports ready
    ///
    /// An unfinished calibration is awaited first; the enable request is
    /// never issued while `ADCAL` is set.
    pub fn enable(&mut self) -> Result<(), AdcError> {
        if self.is_calibrating() {
            warn!("enable requested during calibration");
            self.wait_until(Barrier::Calibration, |adc| !adc.is_calibrating())?;
        }

        debug!("enabling ADC");
        self.request(cr::ADEN);
        let polls = self.wait_until(Barrier::Ready, |adc| adc.is_ready())?;
        trace!("ADC ready after {} polls", polls);
        Ok(())
    }

    /// Select exactly one channel, replacing any previous selection
    pub fn select_channel(&mut self, channel: AdcChannel) {
        debug_assert!(!self.is_converting(), "CHSELR is locked while ADSTART = 1");
        self.regs.write(AdcRegister::Chselr, channel.mask());
    }

    /// Set the sampling time for all channels
    pub fn set_sample_time(&mut self, sample_time: SampleTime) {
        debug_assert!(!self.is_converting(), "SMPR is locked while ADSTART = 1");
        self.regs
            .modify(AdcRegister::Smpr, |v| (v & !smpr::SMP_MASK) | sample_time.bits());
    }
}

impl<R: AdcRegisters> AdcController<R, Ready> {
    /// Trigger one conversion and block until its result is available
    ///
    /// Reading the data register clears `EOC`, so the flag is never cleared
    /// here explicitly.
    pub fn convert_once(&mut self) -> Result<ConversionResult, AdcError> {
        debug_assert!(!self.is_converting(), "conversion already in progress");

        self.request(cr::ADSTART);
        self.wait_until(Barrier::EndOfConversion, |adc| adc.is_end_of_conversion())?;

        let raw = self.regs.read(AdcRegister::Dr);
        Ok(ConversionResult::from_raw(raw))
    }
}
