//! Multiplexed I/O pin configuration.
//!
//! Each of the 54 MIO pads has a control register in the SLCR choosing
//! which peripheral drives it, and how the pad buffer behaves. A pad has
//! to be routed to GPIO before the GPIO controller can see or drive it.

use core::ops::Deref;

use crate::pac::slcr::{mio_pin, RegisterBlock, MIO_PINS};

/// Pad buffer type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoType {
    /// LVCMOS, 1.8 V.
    Lvcmos18 = 1,
    /// LVCMOS, 2.5 V.
    Lvcmos25 = 2,
    /// LVCMOS, 3.3 V.
    Lvcmos33 = 3,
    /// HSTL.
    Hstl = 4,
}

/// Output edge rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Slow,
    Fast,
}

/// Contents of one MIO pin control register, routed to GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MioConfig {
    io_type: IoType,
    speed: Speed,
    pullup: bool,
    tri_state: bool,
    receiver: bool,
}

impl Default for MioConfig {
    fn default() -> Self {
        Self::gpio()
    }
}

impl MioConfig {
    /// GPIO, LVCMOS 3.3 V, slow edges, no pull-up, receiver on.
    pub const fn gpio() -> Self {
        Self {
            io_type: IoType::Lvcmos33,
            speed: Speed::Slow,
            pullup: false,
            tri_state: false,
            receiver: true,
        }
    }

    /// Set the pad buffer type. This has to match the bank voltage.
    pub const fn io_type(mut self, io_type: IoType) -> Self {
        self.io_type = io_type;
        self
    }

    /// Set the output edge rate.
    pub const fn speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// Enable or disable the pull-up.
    pub const fn pullup(mut self, pullup: bool) -> Self {
        self.pullup = pullup;
        self
    }

    /// Force the output driver off, independent of the GPIO output enable.
    pub const fn tri_state(mut self, tri_state: bool) -> Self {
        self.tri_state = tri_state;
        self
    }

    /// Enable or disable the HSTL input buffer.
    pub const fn receiver(mut self, receiver: bool) -> Self {
        self.receiver = receiver;
        self
    }

    /// The raw register value. All mux selects are zero, which is GPIO.
    pub const fn bits(&self) -> u32 {
        let mut bits = (self.io_type as u32) << mio_pin::IO_TYPE_SHIFT;
        if matches!(self.speed, Speed::Fast) {
            bits |= mio_pin::SPEED;
        }
        if self.pullup {
            bits |= mio_pin::PULLUP;
        }
        if self.tri_state {
            bits |= mio_pin::TRI_ENABLE;
        }
        if !self.receiver {
            bits |= mio_pin::DISABLE_RCVR;
        }
        bits
    }
}

/// Is a raw MIO pin control value routed to GPIO?
#[inline(always)]
pub fn is_gpio(bits: u32) -> bool {
    bits & mio_pin::SEL_MASK == 0
}

/// The MIO pin controls, owning the SLCR.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mio<S> {
    slcr: S,
}

impl<S> Mio<S>
where
    S: Deref<Target = RegisterBlock>,
{
    /// Take control of the MIO pins.
    pub fn new(slcr: S) -> Self {
        Self { slcr }
    }

    /// Give back the SLCR.
    pub fn free(self) -> S {
        self.slcr
    }

    /// Route pin `N` to GPIO with the given pad settings.
    ///
    /// This unlocks the SLCR for the write if needed.
    #[inline]
    pub fn configure<const N: u8>(&mut self, config: MioConfig) {
        const { assert!((N as usize) < MIO_PINS) };
        crate::slcr::with_unlocked(&self.slcr, |slcr| {
            slcr.mio_pin[N as usize].write(config.bits())
        });
    }

    /// Read the raw control value of pin `N`.
    #[inline]
    pub fn read<const N: u8>(&self) -> u32 {
        const { assert!((N as usize) < MIO_PINS) };
        self.slcr.mio_pin[N as usize].read()
    }
}
