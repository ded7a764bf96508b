//! Cycle-counted spin loop

use potmeter_hal::BusyWait;

/// Spins the core with `cortex_m::asm::delay`
///
/// One iteration costs at least `cycles_per_iteration` core cycles. No timer
/// is involved, so the delay scales with the core clock.
#[derive(Debug, Clone, Copy)]
pub struct CycleSpin {
    cycles_per_iteration: u32,
}

impl CycleSpin {
    pub const fn new(cycles_per_iteration: u32) -> Self {
        Self {
            cycles_per_iteration,
        }
    }
}

impl Default for CycleSpin {
    /// Roughly one `for` loop round trip on a Cortex-M0
    fn default() -> Self {
        Self::new(4)
    }
}

impl BusyWait for CycleSpin {
    fn spin(&mut self, iterations: u32) {
        if iterations == 0 {
            return;
        }
        cortex_m::asm::delay(iterations.saturating_mul(self.cycles_per_iteration));
    }
}
