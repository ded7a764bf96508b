//! Busy-wait pacing

/// Something that can burn time without side effects.
///
/// There is no timer behind this: an implementation spins for a number of
/// iterations and returns. The wall-clock cost of one iteration is whatever
/// the target makes it.
pub trait BusyWait {
    /// Spin for `iterations` loop iterations. Zero returns immediately.
    fn spin(&mut self, iterations: u32);
}

impl<T: BusyWait + ?Sized> BusyWait for &mut T {
    fn spin(&mut self, iterations: u32) {
        (**self).spin(iterations)
    }
}
