use core::convert::Infallible;
use core::ops::Deref;

use embedded_hal_02::digital::v2 as hal02;

use crate::pac::gpio::RegisterBlock;

use super::{Output, Pin, PinState};

impl From<hal02::PinState> for PinState {
    #[inline(always)]
    fn from(value: hal02::PinState) -> Self {
        match value {
            hal02::PinState::Low => Self::Low,
            hal02::PinState::High => Self::High,
        }
    }
}

impl From<PinState> for hal02::PinState {
    #[inline(always)]
    fn from(value: PinState) -> Self {
        match value {
            PinState::Low => Self::Low,
            PinState::High => Self::High,
        }
    }
}

impl<G, const N: u8> hal02::OutputPin for Pin<G, N, Output>
where
    G: Deref<Target = RegisterBlock>,
{
    type Error = Infallible;

    #[inline(always)]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self);
        Ok(())
    }

    #[inline(always)]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self);
        Ok(())
    }

    #[inline(always)]
    fn set_state(&mut self, state: hal02::PinState) -> Result<(), Self::Error> {
        Pin::set_state(self, state.into());
        Ok(())
    }
}

impl<G, const N: u8> hal02::StatefulOutputPin for Pin<G, N, Output>
where
    G: Deref<Target = RegisterBlock>,
{
    #[inline(always)]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(Pin::is_set_high(self))
    }

    #[inline(always)]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(Pin::is_set_low(self))
    }
}

impl<G, const N: u8> hal02::ToggleableOutputPin for Pin<G, N, Output>
where
    G: Deref<Target = RegisterBlock>,
{
    type Error = Infallible;

    #[inline(always)]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self);
        Ok(())
    }
}
