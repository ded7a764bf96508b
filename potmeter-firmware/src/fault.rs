//! Terminal fault state
//!
//! Entered when bring-up or the sampling loop fails. The converter is left
//! alone; only the LED and the serial line are touched.

use embassy_time::{block_for, Duration};
use potmeter_hal::{OutputPin, UartTx};

/// Half period of the fault blink
const FAULT_BLINK: Duration = Duration::from_millis(100);

const FAULT_MESSAGE: &str = "FAULT\r\n";

/// Report the fault and blink forever
pub fn halt<T: UartTx, L: OutputPin>(output: &mut T, led: &mut L) -> ! {
    // Best effort: the line may be what failed
    if output.write_str(FAULT_MESSAGE).is_err() {
        defmt::warn!("fault message not sent");
    }

    led.set_low();
    loop {
        led.toggle();
        block_for(FAULT_BLINK);
    }
}
