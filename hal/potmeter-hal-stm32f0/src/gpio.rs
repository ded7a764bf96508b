//! GPIO output for STM32F0
//!
//! Wraps any embedded-hal push-pull output (embassy's `Output` in practice)
//! as a [`potmeter_hal::OutputPin`].

use core::convert::Infallible;

use potmeter_hal::OutputPin;

/// LED on a push-pull output
///
/// The logical level is tracked here, since reading it back through
/// embedded-hal needs `&mut` access.
pub struct LedPin<P> {
    pin: P,
    high: bool,
}

impl<P> LedPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Take the pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin, high: true };
        led.set_low();
        led
    }
}

impl<P> OutputPin for LedPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|never| match never {});
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|never| match never {});
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
