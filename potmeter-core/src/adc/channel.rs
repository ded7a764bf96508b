//! ADC channel and sampling time selection
//!
//! STM32F030x4/x6 has a single 12-bit ADC with up to 16 external inputs
//! plus two internal ones:
//! - IN0..IN7: PA0..PA7
//! - IN8, IN9: PB0, PB1
//! - IN10..IN15: PC0..PC5 (not bonded on every package)
//! - IN16: internal temperature sensor
//! - IN17: internal voltage reference

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcChannel {
    In0 = 0,
    In1 = 1,
    In2 = 2,
    In3 = 3,
    In4 = 4,
    In5 = 5,
    In6 = 6,
    In7 = 7,
    In8 = 8,
    In9 = 9,
    In10 = 10,
    In11 = 11,
    In12 = 12,
    In13 = 13,
    In14 = 14,
    In15 = 15,
    /// Internal temperature sensor
    TempSensor = 16,
    /// Internal voltage reference
    VrefInt = 17,
}

impl AdcChannel {
    const ALL: [AdcChannel; 18] = [
        AdcChannel::In0,
        AdcChannel::In1,
        AdcChannel::In2,
        AdcChannel::In3,
        AdcChannel::In4,
        AdcChannel::In5,
        AdcChannel::In6,
        AdcChannel::In7,
        AdcChannel::In8,
        AdcChannel::In9,
        AdcChannel::In10,
        AdcChannel::In11,
        AdcChannel::In12,
        AdcChannel::In13,
        AdcChannel::In14,
        AdcChannel::In15,
        AdcChannel::TempSensor,
        AdcChannel::VrefInt,
    ];

    /// Channel number as used by `CHSELR`
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The single `CHSELR` bit that selects this channel
    pub const fn mask(self) -> u32 {
        1 << self.index()
    }

    /// Look up a channel by number
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// True for channels wired to on-chip sources rather than a pin
    pub const fn is_internal(self) -> bool {
        matches!(self, AdcChannel::TempSensor | AdcChannel::VrefInt)
    }

    /// Get the GPIO port and pin for this channel
    pub fn pin(self) -> Option<(char, u8)> {
        let index = self.index();
        match index {
            0..=7 => Some(('A', index)),
            8..=9 => Some(('B', index - 8)),
            10..=15 => Some(('C', index - 10)),
            _ => None,
        }
    }

    /// Get ADC channel from GPIO port and pin
    pub fn from_pin(port: char, pin: u8) -> Option<Self> {
        let index = match (port, pin) {
            ('A', 0..=7) => pin,
            ('B', 0..=1) => pin + 8,
            ('C', 0..=5) => pin + 10,
            _ => return None,
        };
        Self::from_index(index)
    }
}

/// Sampling time, in ADC clock cycles
///
/// The full conversion takes the sampling time plus 12.5 cycles of
/// successive approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SampleTime {
    Cycles1_5 = 0b000,
    Cycles7_5 = 0b001,
    Cycles13_5 = 0b010,
    Cycles28_5 = 0b011,
    Cycles41_5 = 0b100,
    Cycles55_5 = 0b101,
    Cycles71_5 = 0b110,
    Cycles239_5 = 0b111,
}

/// Successive approximation time for 12-bit resolution, x10
const SAR_CYCLES_X10: u32 = 125;

impl SampleTime {
    /// Longest available sampling time, for high-impedance sources
    pub const LONGEST: SampleTime = SampleTime::Cycles239_5;

    /// All settings, shortest first
    pub const ALL: [SampleTime; 8] = [
        SampleTime::Cycles1_5,
        SampleTime::Cycles7_5,
        SampleTime::Cycles13_5,
        SampleTime::Cycles28_5,
        SampleTime::Cycles41_5,
        SampleTime::Cycles55_5,
        SampleTime::Cycles71_5,
        SampleTime::Cycles239_5,
    ];

    /// Value of the `SMP` field
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decode an `SMP` field value
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Sampling time in ADC clock cycles, x10
    pub const fn cycles_x10(self) -> u32 {
        match self {
            SampleTime::Cycles1_5 => 15,
            SampleTime::Cycles7_5 => 75,
            SampleTime::Cycles13_5 => 135,
            SampleTime::Cycles28_5 => 285,
            SampleTime::Cycles41_5 => 415,
            SampleTime::Cycles55_5 => 555,
            SampleTime::Cycles71_5 => 715,
            SampleTime::Cycles239_5 => 2395,
        }
    }

    /// Whole conversion time in ADC clock cycles, x10
    pub const fn conversion_cycles_x10(self) -> u32 {
        self.cycles_x10() + SAR_CYCLES_X10
    }
}
