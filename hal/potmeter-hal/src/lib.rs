//! Potmeter Hardware Abstraction Layer
//!
//! This crate defines the capabilities the sampler needs from a board.
//! Chip-specific HALs implement them against real registers; host tests
//! implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  potmeter-firmware                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  potmeter-core (controller, loop)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  potmeter-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ potmeter-hal- │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`uart::UartTx`] - Serial transmit
//! - [`delay::BusyWait`] - Spin-loop pacing
//! - [`adc::AdcRegisters`] - Raw ADC register block access

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::{AdcRegister, AdcRegisters};
pub use delay::BusyWait;
pub use gpio::OutputPin;
pub use uart::{UartConfig, UartTx};
