//! Simulated ADC register block for host tests
//!
//! Models the RM0360 side effects the controller depends on: `CR` bits are
//! write-one-to-set and cleared by hardware, `ISR` is write-one-to-clear,
//! reading `DR` clears `EOC`. Status changes are driven by polls instead of
//! time: each pending operation completes on the n-th read of the register
//! that reports it.
//!
//! Sequences the real hardware forbids panic, and so does polling past the
//! budget, so a driver bug fails the test instead of hanging it.

use potmeter_hal::adc::{cfgr1, cr, isr, smpr, AdcRegister, AdcRegisters};

/// Observable transitions, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    StopRequested,
    Stopped,
    DisableRequested,
    Disabled,
    DmaDisabled,
    CalibrationRequested,
    CalibrationComplete,
    ReadyCleared,
    EnableRequested,
    Ready,
    ChannelSelected(u32),
    SampleTimeSet(u32),
    ConversionStarted,
    ConversionComplete,
    DataRead(u32),
    EocClearedByWrite,
}

pub struct SimulatedAdc {
    cr: u32,
    isr: u32,
    cfgr1: u32,
    smpr: u32,
    chselr: u32,
    dr: u32,

    calibration_polls: u32,
    ready_polls: u32,
    eoc_polls: u32,
    disable_polls: u32,

    calibration_left: u32,
    ready_left: u32,
    eoc_left: u32,
    disable_left: u32,
    calibration_stuck: bool,

    results: Vec<u32>,
    next_result: usize,
    conversion_polls: u32,
    last_conversion_polls: u32,

    reads: u32,
    poll_budget: u32,
    events: Vec<SimEvent>,
}

impl SimulatedAdc {
    /// Converter straight out of reset; every barrier resolves on its first poll
    pub fn new() -> Self {
        Self {
            cr: 0,
            isr: 0,
            cfgr1: 0,
            smpr: 0,
            chselr: 0,
            dr: 0,
            calibration_polls: 1,
            ready_polls: 1,
            eoc_polls: 1,
            disable_polls: 1,
            calibration_left: 0,
            ready_left: 0,
            eoc_left: 0,
            disable_left: 0,
            calibration_stuck: false,
            results: vec![0],
            next_result: 0,
            conversion_polls: 0,
            last_conversion_polls: 0,
            reads: 0,
            poll_budget: 10_000,
            events: Vec::new(),
        }
    }

    pub fn with_calibration_polls(mut self, polls: u32) -> Self {
        self.calibration_polls = polls.max(1);
        self
    }

    pub fn with_ready_polls(mut self, polls: u32) -> Self {
        self.ready_polls = polls.max(1);
        self
    }

    pub fn with_eoc_polls(mut self, polls: u32) -> Self {
        self.eoc_polls = polls.max(1);
        self
    }

    pub fn with_disable_polls(mut self, polls: u32) -> Self {
        self.disable_polls = polls.max(1);
        self
    }

    /// Raw `DR` values handed out by successive conversions, repeating
    pub fn with_results(mut self, results: &[u16]) -> Self {
        assert!(!results.is_empty());
        self.results = results.iter().map(|r| u32::from(*r)).collect();
        self
    }

    /// Leftover channel selection from an earlier session
    pub fn with_channels(mut self, chselr: u32) -> Self {
        self.chselr = chselr;
        self
    }

    pub fn with_dma_enabled(mut self) -> Self {
        self.cfgr1 |= cfgr1::DMAEN;
        self
    }

    /// `ADRDY` left set with the converter disabled
    pub fn with_stale_ready(mut self) -> Self {
        self.isr |= isr::ADRDY;
        self
    }

    /// Enabled and ready, as left by a previous boot stage
    pub fn already_enabled(mut self) -> Self {
        self.cr |= cr::ADEN;
        self.isr |= isr::ADRDY;
        self
    }

    /// Enabled with a conversion in flight that will never finish by itself
    pub fn already_converting(mut self) -> Self {
        self = self.already_enabled();
        self.cr |= cr::ADSTART;
        self.eoc_left = u32::MAX;
        self
    }

    /// Calibration never finishes
    pub fn stuck_calibrating(mut self) -> Self {
        self.calibration_stuck = true;
        self
    }

    /// Total register reads allowed before the test is declared hung
    pub fn with_poll_budget(mut self, reads: u32) -> Self {
        self.poll_budget = reads;
        self
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// `CR` without side effects
    pub fn cr(&self) -> u32 {
        self.cr
    }

    /// `ISR` without side effects
    pub fn isr(&self) -> u32 {
        self.isr
    }

    /// `ISR` reads it took the last conversion to report `EOC`
    pub fn last_conversion_polls(&self) -> u32 {
        self.last_conversion_polls
    }

    fn count_read(&mut self) {
        self.reads += 1;
        assert!(
            self.reads <= self.poll_budget,
            "simulated ADC read {} times; driver is hung",
            self.reads
        );
    }

    fn poll_cr(&mut self) {
        if self.cr & cr::ADSTP != 0 {
            self.cr &= !(cr::ADSTP | cr::ADSTART);
            self.eoc_left = 0;
            self.events.push(SimEvent::Stopped);
        }

        if self.cr & cr::ADCAL != 0 && !self.calibration_stuck {
            self.calibration_left -= 1;
            if self.calibration_left == 0 {
                self.cr &= !cr::ADCAL;
                self.events.push(SimEvent::CalibrationComplete);
            }
        }

        if self.cr & cr::ADDIS != 0 {
            self.disable_left -= 1;
            if self.disable_left == 0 {
                self.cr &= !(cr::ADDIS | cr::ADEN);
                self.events.push(SimEvent::Disabled);
            }
        }
    }

    fn poll_isr(&mut self) {
        if self.cr & cr::ADEN != 0 && self.isr & isr::ADRDY == 0 && self.ready_left > 0 {
            self.ready_left -= 1;
            if self.ready_left == 0 {
                self.isr |= isr::ADRDY;
                self.events.push(SimEvent::Ready);
            }
        }

        if self.cr & cr::ADSTART != 0 && self.eoc_left > 0 {
            self.conversion_polls += 1;
            self.eoc_left -= 1;
            if self.eoc_left == 0 {
                self.dr = self.results[self.next_result % self.results.len()];
                self.next_result += 1;
                self.cr &= !cr::ADSTART;
                self.isr |= isr::EOC | isr::EOSEQ;
                self.last_conversion_polls = self.conversion_polls;
                self.events.push(SimEvent::ConversionComplete);
            }
        }
    }

    fn write_cr(&mut self, value: u32) {
        if value & cr::ADSTP != 0 && self.cr & cr::ADSTART != 0 {
            self.cr |= cr::ADSTP;
            self.events.push(SimEvent::StopRequested);
        }

        if value & cr::ADDIS != 0 {
            assert!(self.cr & cr::ADSTART == 0, "ADDIS while ADSTART = 1");
            if self.cr & cr::ADEN != 0 {
                self.cr |= cr::ADDIS;
                self.disable_left = self.disable_polls;
                self.events.push(SimEvent::DisableRequested);
            }
        }

        if value & cr::ADCAL != 0 {
            assert!(self.cr & cr::ADEN == 0, "ADCAL while ADEN = 1");
            self.cr |= cr::ADCAL;
            self.calibration_left = self.calibration_polls;
            self.events.push(SimEvent::CalibrationRequested);
        }

        if value & cr::ADEN != 0 {
            assert!(self.cr & cr::ADCAL == 0, "ADEN while ADCAL = 1");
            assert!(self.cr & cr::ADDIS == 0, "ADEN while ADDIS = 1");
            if self.cr & cr::ADEN == 0 {
                self.cr |= cr::ADEN;
                self.ready_left = self.ready_polls;
                self.events.push(SimEvent::EnableRequested);
            }
        }

        if value & cr::ADSTART != 0 {
            assert!(self.cr & cr::ADEN != 0, "ADSTART while disabled");
            assert!(self.cr & cr::ADDIS == 0, "ADSTART while ADDIS = 1");
            assert!(self.cr & cr::ADSTART == 0, "ADSTART while converting");
            self.cr |= cr::ADSTART;
            self.eoc_left = self.eoc_polls;
            self.conversion_polls = 0;
            self.events.push(SimEvent::ConversionStarted);
        }
    }

    fn write_isr(&mut self, value: u32) {
        if value & isr::ADRDY != 0 && self.isr & isr::ADRDY != 0 {
            self.events.push(SimEvent::ReadyCleared);
        }
        if value & isr::EOC != 0 {
            self.events.push(SimEvent::EocClearedByWrite);
        }
        self.isr &= !value;
    }
}

impl AdcRegisters for SimulatedAdc {
    fn read(&mut self, reg: AdcRegister) -> u32 {
        self.count_read();
        match reg {
            AdcRegister::Cr => {
                self.poll_cr();
                self.cr
            }
            AdcRegister::Isr => {
                self.poll_isr();
                self.isr
            }
            AdcRegister::Cfgr1 => self.cfgr1,
            AdcRegister::Smpr => self.smpr,
            AdcRegister::Chselr => self.chselr,
            AdcRegister::Dr => {
                self.isr &= !isr::EOC;
                self.events.push(SimEvent::DataRead(self.dr));
                self.dr
            }
        }
    }

    fn write(&mut self, reg: AdcRegister, value: u32) {
        match reg {
            AdcRegister::Cr => self.write_cr(value),
            AdcRegister::Isr => self.write_isr(value),
            AdcRegister::Cfgr1 => {
                if self.cfgr1 & cfgr1::DMAEN != 0 && value & cfgr1::DMAEN == 0 {
                    self.events.push(SimEvent::DmaDisabled);
                }
                self.cfgr1 = value;
            }
            AdcRegister::Smpr => {
                assert!(self.cr & cr::ADSTART == 0, "SMPR written while converting");
                self.smpr = value & smpr::SMP_MASK;
                self.events.push(SimEvent::SampleTimeSet(self.smpr));
            }
            AdcRegister::Chselr => {
                assert!(self.cr & cr::ADSTART == 0, "CHSELR written while converting");
                self.chselr = value;
                self.events.push(SimEvent::ChannelSelected(value));
            }
            // Read-only
            AdcRegister::Dr => {}
        }
    }
}
