//! Peripheral access for the Zynq-7000 processing system.
//!
//! Register blocks are plain `#[repr(C)]` structs. The zero-sized
//! peripheral tokens dereference to the block at its fixed address, and
//! that dereference is the only place a raw register pointer is turned
//! into a reference.

#![cfg_attr(not(test), no_std)]

pub mod generic;
pub mod gpio;
pub mod slcr;
pub mod uart;

pub use generic::{Reg, RO, RW, WO};

macro_rules! peripheral {
    ($(#[$attr:meta])* $name:ident, $block:ty, $address:expr) => {
        $(#[$attr])*
        #[allow(clippy::upper_case_acronyms)]
        pub struct $name {
            _marker: core::marker::PhantomData<*const ()>,
        }

        impl $name {
            /// Pointer to the register block.
            pub const PTR: *const $block = $address as *const _;

            /// Pointer to the register block.
            #[inline(always)]
            pub const fn ptr() -> *const $block {
                Self::PTR
            }

            /// Steal an instance of this peripheral.
            ///
            /// # Safety
            ///
            /// Ensure that the new instance of the peripheral cannot be
            /// used in a way that may race with any existing instances.
            #[inline(always)]
            pub unsafe fn steal() -> Self {
                Self {
                    _marker: core::marker::PhantomData,
                }
            }
        }

        // safety: the token is only a capability, the registers it
        // points at are the same from every context
        unsafe impl Send for $name {}

        impl core::ops::Deref for $name {
            type Target = $block;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                // safety: the address is the documented base of this
                // block, which is mapped for the whole program lifetime
                unsafe { &*Self::PTR }
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.debug_struct(stringify!($name)).finish()
            }
        }

        #[cfg(feature = "defmt")]
        impl defmt::Format for $name {
            fn format(&self, f: defmt::Formatter) {
                defmt::write!(f, "{=str}", stringify!($name))
            }
        }
    };
}

peripheral!(
    /// System Level Control Registers.
    SLCR,
    slcr::RegisterBlock,
    0xf800_0000usize
);

peripheral!(
    /// GPIO controller.
    GPIO,
    gpio::RegisterBlock,
    0xe000_a000usize
);

peripheral!(
    /// UART 1, wired to the USB serial bridge on most boards.
    UART1,
    uart::RegisterBlock,
    0xe000_1000usize
);

// plain flag, only touched inside a critical section or by `steal`
static mut TAKEN: bool = false;

/// All the peripherals.
#[allow(non_snake_case)]
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Peripherals {
    pub SLCR: SLCR,
    pub GPIO: GPIO,
    pub UART1: UART1,
}

impl Peripherals {
    /// Returns all the peripherals *once*.
    #[cfg(feature = "critical-section")]
    #[inline]
    pub fn take() -> Option<Self> {
        critical_section::with(|_| {
            // safety: we are in a critical section
            if unsafe { TAKEN } {
                return None;
            }
            // safety: this is the first and only time we hand these out
            Some(unsafe { Self::steal() })
        })
    }

    /// Unchecked version of [Peripherals::take].
    ///
    /// # Safety
    ///
    /// Each of the returned peripherals must be used at most once.
    #[inline]
    pub unsafe fn steal() -> Self {
        TAKEN = true;
        Self {
            SLCR: SLCR::steal(),
            GPIO: GPIO::steal(),
            UART1: UART1::steal(),
        }
    }
}
