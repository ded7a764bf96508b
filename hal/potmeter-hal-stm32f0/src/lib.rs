//! STM32F0-specific HAL for the Potmeter firmware
//!
//! This crate implements the `potmeter-hal` traits for STM32F030 parts:
//!
//! - STM32F030F4 (20-pin reference board)
//! - STM32F030K6
//!
//! # Features
//!
//! - `stm32f030f4` / `stm32f030k6` - Chip selection, pick one
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Pin and clock setup goes through embassy-stm32. The ADC is driven through
//! raw PAC register access because the sampler owns its own protocol.

#![no_std]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod uart;

pub use adc::Adc1Registers;
pub use delay::CycleSpin;
pub use gpio::LedPin;
pub use uart::SerialTx;
