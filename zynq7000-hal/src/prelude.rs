//! Traits needed to use this crate, imported anonymously.

pub use crate::delay::BusyWait as _;
pub use embedded_hal_1::digital::OutputPin as _;
pub use embedded_hal_1::digital::StatefulOutputPin as _;
