#![cfg_attr(not(test), no_std)]

pub mod prelude;

/// Peripheral access crate, providing raw, unconstrained access to
/// peripherals.
pub use zynq7000 as pac;

pub mod delay;
pub mod gpio;
pub mod mio;
pub mod slcr;
pub mod uart;
