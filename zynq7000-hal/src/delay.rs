//! Busy-wait delays.
//!
//! There is no calibration here. An iteration takes however long the
//! core needs for one volatile load, add and store at the current clock,
//! so iteration counts are tuning values and not time units.

use vcell::VolatileCell;

/// Something that can block the core for a number of iterations.
pub trait BusyWait {
    /// Spin for `iterations` iterations. Zero returns immediately.
    fn spin(&mut self, iterations: u32);
}

/// A counting spin loop.
///
/// The counter lives in a volatile cell, so every increment is a real
/// load and store and the loop cannot be optimized away.
pub struct Spin {
    counter: VolatileCell<u32>,
}

impl core::fmt::Debug for Spin {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Spin").field("count", &self.count()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Spin {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Spin {{ count: {} }}", self.count())
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new()
    }
}

impl Spin {
    pub const fn new() -> Self {
        Self {
            counter: VolatileCell::new(0),
        }
    }

    /// Iterations completed by the last [BusyWait::spin].
    #[inline(always)]
    pub fn count(&self) -> u32 {
        self.counter.get()
    }
}

impl BusyWait for Spin {
    #[inline(never)]
    fn spin(&mut self, iterations: u32) {
        self.counter.set(0);
        while self.counter.get() < iterations {
            self.counter.set(self.counter.get() + 1);
        }
    }
}

impl<T> BusyWait for &mut T
where
    T: BusyWait,
{
    #[inline(always)]
    fn spin(&mut self, iterations: u32) {
        (**self).spin(iterations)
    }
}
