// seal for PinMode trait
pub(super) trait PinModeSealed {
    /// GPIO direction, 0 is input, 1 is output.
    const DIR: bool;
    /// Output driver enabled.
    const OEN: bool;
}

/// A trait for pin mode type states.
#[allow(private_bounds)]
#[cfg(not(feature = "defmt"))]
pub trait PinMode: PinModeSealed + core::fmt::Debug + Default {}

/// A trait for pin mode type states.
#[allow(private_bounds)]
#[cfg(feature = "defmt")]
pub trait PinMode: PinModeSealed + core::fmt::Debug + defmt::Format + Default {}

/// Pin in whatever state reset or the boot loader left it, unusable
/// until changed. (type state)
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Unconfigured;

impl PinMode for Unconfigured {}

impl PinModeSealed for Unconfigured {
    const DIR: bool = false;
    const OEN: bool = false;
}

/// Driven output. (type state)
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Output;

impl PinMode for Output {}

impl PinModeSealed for Output {
    const DIR: bool = true;
    const OEN: bool = true;
}
