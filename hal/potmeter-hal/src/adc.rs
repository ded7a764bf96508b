//! Raw ADC register access
//!
//! The converter is modelled as the register block of a single-ADC STM32F0
//! part (RM0360, section 13.11). Only the registers the polled
//! single-conversion protocol touches are exposed.
//!
//! Several bits have hardware side effects that a plain memory model would
//! not have:
//!
//! - `CR` control bits are set by software and cleared by hardware
//!   (`ADCAL` clears when calibration ends, `ADDIS` and `ADEN` clear when the
//!   disable completes, `ADSTART` clears when a single conversion ends).
//!   Writing zero to them has no effect, so a request is a plain write of
//!   the one bit.
//! - `ISR` flags are write-one-to-clear.
//! - Reading `DR` clears `ISR.EOC`.
//!
//! Implementations must perform each `read` and `write` as exactly one
//! access to the underlying register.

/// Registers of the ADC block used by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcRegister {
    /// Interrupt and status register
    Isr,
    /// Control register
    Cr,
    /// Configuration register 1
    Cfgr1,
    /// Sampling time register
    Smpr,
    /// Channel selection register
    Chselr,
    /// Data register
    Dr,
}

impl AdcRegister {
    /// Byte offset from the ADC base address
    pub const fn offset(self) -> usize {
        match self {
            AdcRegister::Isr => 0x00,
            AdcRegister::Cr => 0x08,
            AdcRegister::Cfgr1 => 0x0C,
            AdcRegister::Smpr => 0x14,
            AdcRegister::Chselr => 0x28,
            AdcRegister::Dr => 0x40,
        }
    }
}

/// `ISR` bits (write-one-to-clear)
pub mod isr {
    /// ADC ready
    pub const ADRDY: u32 = 1 << 0;
    /// End of sampling phase
    pub const EOSMP: u32 = 1 << 1;
    /// End of conversion
    pub const EOC: u32 = 1 << 2;
    /// End of sequence
    pub const EOSEQ: u32 = 1 << 3;
    /// Overrun
    pub const OVR: u32 = 1 << 4;
}

/// `CR` bits (software sets, hardware clears)
pub mod cr {
    /// Enable
    pub const ADEN: u32 = 1 << 0;
    /// Disable request
    pub const ADDIS: u32 = 1 << 1;
    /// Start conversion
    pub const ADSTART: u32 = 1 << 2;
    /// Stop conversion
    pub const ADSTP: u32 = 1 << 4;
    /// Calibration in progress
    pub const ADCAL: u32 = 1 << 31;
}

/// `CFGR1` bits
pub mod cfgr1 {
    /// DMA enable
    pub const DMAEN: u32 = 1 << 0;
    /// DMA circular mode
    pub const DMACFG: u32 = 1 << 1;
    /// Continuous conversion
    pub const CONT: u32 = 1 << 13;
}

/// `SMPR` fields
pub mod smpr {
    /// Sampling time selection, 3 bits
    pub const SMP_MASK: u32 = 0b111;
}

/// `CHSELR` fields
pub mod chselr {
    /// Highest selectable channel
    pub const MAX_CHANNEL: u8 = 18;
    /// All valid channel bits
    pub const MASK: u32 = (1 << (MAX_CHANNEL as u32 + 1)) - 1;
}

/// `DR` fields
pub mod dr {
    /// 12-bit right-aligned conversion data
    pub const DATA_MASK: u32 = 0x0FFF;
}

/// Raw access to an ADC register block
///
/// This is the only thing the ADC controller depends on. A chip HAL backs it
/// with volatile MMIO; tests back it with a simulated converter.
pub trait AdcRegisters {
    /// Read a register (one bus access)
    fn read(&mut self, reg: AdcRegister) -> u32;

    /// Write a register (one bus access)
    fn write(&mut self, reg: AdcRegister, value: u32);

    /// Read-modify-write a register
    fn modify<F>(&mut self, reg: AdcRegister, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// Set bits with a read-modify-write
    fn set_bits(&mut self, reg: AdcRegister, mask: u32) {
        self.modify(reg, |v| v | mask);
    }

    /// Clear bits with a read-modify-write
    fn clear_bits(&mut self, reg: AdcRegister, mask: u32) {
        self.modify(reg, |v| v & !mask);
    }

    /// True if any bit of `mask` reads back set
    fn bit_is_set(&mut self, reg: AdcRegister, mask: u32) -> bool {
        self.read(reg) & mask != 0
    }
}

impl<T: AdcRegisters + ?Sized> AdcRegisters for &mut T {
    fn read(&mut self, reg: AdcRegister) -> u32 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: AdcRegister, value: u32) {
        (**self).write(reg, value)
    }
}
