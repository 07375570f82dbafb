#![cfg_attr(not(test), no_std)]

pub mod prelude;

/// HAL crate, providing structured access to peripherals.
pub use zynq7000_hal as hal;

/// Peripheral access crate, providing raw, unconstrained access to peripherals.
pub use hal::pac;

pub mod blink;
pub mod led;
pub mod uart;

#[cfg(feature = "defmt-logger")]
mod defmt_logger;
