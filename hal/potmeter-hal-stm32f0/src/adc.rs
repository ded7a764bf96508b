//! ADC1 register block for STM32F0
//!
//! Backs [`AdcRegisters`] with the PAC. Each trait call is one volatile
//! access to the named register; nothing is cached.

use embassy_stm32::pac;
use embassy_stm32::pac::adc::regs;
use embassy_stm32::peripherals::ADC1;
use embassy_stm32::Peri;
use potmeter_hal::adc::{AdcRegister, AdcRegisters};

/// Turn on the ADC interface clock
///
/// The converter itself runs from the dedicated 14 MHz HSI14 oscillator
/// (`CKMODE = 00`, the reset value), which the ADC switches on by itself.
pub fn enable_clock() {
    pac::RCC.apb2enr().modify(|w| w.set_adcen(true));
    // Dummy read so the clock is running before the first register access
    let _ = pac::RCC.apb2enr().read();
}

/// Exclusive handle on ADC1's registers
///
/// Holding the embassy singleton keeps any other driver off the block.
pub struct Adc1Registers<'d> {
    _adc: Peri<'d, ADC1>,
}

impl<'d> Adc1Registers<'d> {
    /// Claim ADC1
    ///
    /// Call [`enable_clock`] first.
    pub fn new(adc: Peri<'d, ADC1>) -> Self {
        Self { _adc: adc }
    }
}

impl AdcRegisters for Adc1Registers<'_> {
    fn read(&mut self, reg: AdcRegister) -> u32 {
        let adc = pac::ADC1;
        match reg {
            AdcRegister::Isr => adc.isr().read().0,
            AdcRegister::Cr => adc.cr().read().0,
            AdcRegister::Cfgr1 => adc.cfgr1().read().0,
            AdcRegister::Smpr => adc.smpr().read().0,
            AdcRegister::Chselr => adc.chselr().read().0,
            AdcRegister::Dr => adc.dr().read().0,
        }
    }

    fn write(&mut self, reg: AdcRegister, value: u32) {
        let adc = pac::ADC1;
        match reg {
            AdcRegister::Isr => adc.isr().write_value(regs::Isr(value)),
            AdcRegister::Cr => adc.cr().write_value(regs::Cr(value)),
            AdcRegister::Cfgr1 => adc.cfgr1().write_value(regs::Cfgr1(value)),
            AdcRegister::Smpr => adc.smpr().write_value(regs::Smpr(value)),
            AdcRegister::Chselr => adc.chselr().write_value(regs::Chselr(value)),
            // Read-only
            AdcRegister::Dr => {}
        }
    }
}
