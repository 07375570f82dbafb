use core::convert::Infallible;
use core::ops::Deref;

use embedded_hal_1::digital as hal1;

use crate::pac::gpio::RegisterBlock;

use super::{Output, Pin, PinMode, PinState};

impl From<hal1::PinState> for PinState {
    #[inline(always)]
    fn from(value: hal1::PinState) -> Self {
        match value {
            hal1::PinState::Low => Self::Low,
            hal1::PinState::High => Self::High,
        }
    }
}

impl From<PinState> for hal1::PinState {
    #[inline(always)]
    fn from(value: PinState) -> Self {
        match value {
            PinState::Low => Self::Low,
            PinState::High => Self::High,
        }
    }
}

impl<G, const N: u8, Mode> hal1::ErrorType for Pin<G, N, Mode>
where
    Mode: PinMode,
{
    type Error = Infallible;
}

impl<G, const N: u8> hal1::OutputPin for Pin<G, N, Output>
where
    G: Deref<Target = RegisterBlock>,
{
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
    fn set_state(&mut self, state: hal1::PinState) -> Result<(), Self::Error> {
        Pin::set_state(self, state.into());
        Ok(())
    }
}

impl<G, const N: u8> hal1::StatefulOutputPin for Pin<G, N, Output>
where
    G: Deref<Target = RegisterBlock>,
{
    #[inline(always)]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(Pin::is_set_high(self))
    }

    #[inline(always)]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(Pin::is_set_low(self))
    }

    #[inline(always)]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use embedded_hal_1::digital::{OutputPin, StatefulOutputPin};

    use crate::gpio::Pin;
    use crate::mio::{Mio, MioConfig};
    use crate::pac::{gpio, slcr};

    // generic code only sees the traits
    fn blink_twice<P: StatefulOutputPin>(pin: &mut P) -> Result<bool, P::Error> {
        pin.set_low()?;
        pin.toggle()?;
        let high = pin.is_set_high()?;
        pin.toggle()?;
        Ok(high && pin.is_set_low()?)
    }

    #[test]
    fn through_traits() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut mio = Mio::new(&slcr);
        let mut pin = Pin::<_, 7>::new(&regs).into_output(&mut mio, MioConfig::gpio());

        assert_eq!(blink_twice(&mut pin), Ok(true));
        assert_eq!(regs.data[0].read(), 0);
    }
}
