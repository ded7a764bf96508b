//! Potmeter - ADC sampler firmware
//!
//! Brings up ADC1 on an STM32F030F4, then samples a potentiometer forever:
//! each reading toggles the LED, goes out on USART1 as decimal text and sets
//! how long the core spins before the next one.
//!
//! Board wiring:
//!
//! | Signal    | Pin | Peripheral       |
//! |-----------|-----|------------------|
//! | Wiper     | PA4 | ADC_IN4 (analog) |
//! | Serial TX | PA2 | USART1_TX, 115200 8N1 |
//! | LED       | PA5 | push-pull output |

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_stm32::gpio::{Flex, Level, Output, Speed};
use embassy_stm32::usart;
use {defmt_rtt as _, panic_probe as _};

use potmeter_core::{AdcController, SamplerConfig, SamplingLoop};
use potmeter_hal::UartConfig;
use potmeter_hal_stm32f0::uart::usart_config;
use potmeter_hal_stm32f0::{adc, Adc1Registers, CycleSpin, LedPin, SerialTx};

mod fault;

/// Sampler settings, fixed at build time
const SAMPLER: SamplerConfig = SamplerConfig::new();

#[entry]
fn main() -> ! {
    info!("Potmeter firmware starting...");

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // Serial line first, so a later fault can still be reported
    let uart_config = UartConfig::default();
    let tx = unwrap!(usart::UartTx::new_blocking(
        p.USART1,
        p.PA2,
        usart_config(&uart_config)
    ));
    let mut output = SerialTx::new(tx);
    info!("USART1 up at {} baud", uart_config.baudrate);

    let mut led = LedPin::new(Output::new(p.PA5, Level::Low, Speed::Low));

    if let Err(e) = SAMPLER.validate() {
        error!("Invalid sampler configuration: {}", e);
        fault::halt(&mut output, &mut led);
    }

    // Wiper input; stays analog for the life of the firmware
    let mut wiper = Flex::new(p.PA4);
    wiper.set_as_analog();

    adc::enable_clock();
    let controller = AdcController::new(Adc1Registers::new(p.ADC1), SAMPLER.adc);
    let adc = match controller.initialize() {
        Ok(adc) => adc,
        Err(e) => {
            error!("ADC bring-up failed: {}", e);
            fault::halt(&mut output, &mut led);
        }
    };

    let mut sampler = SamplingLoop::new(adc, output, led, CycleSpin::default(), &SAMPLER);
    if let Err(e) = sampler.announce() {
        warn!("Banner not sent: {}", e);
    }

    info!("Sampling {}", SAMPLER.adc.channel);
    let e = sampler.run();
    error!("Sampling stopped: {}", e);

    let (_adc, mut output, mut led, _spin) = sampler.into_parts();
    fault::halt(&mut output, &mut led)
}
