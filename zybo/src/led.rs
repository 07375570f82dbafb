//! The LD4 user LED, on MIO 7.

use core::convert::Infallible;
use core::ops::Deref;

use embedded_hal_1::digital as hal1;

use crate::hal::gpio::{Output, Pin, Unconfigured};
use crate::hal::mio::{IoType, Mio, MioConfig};
use crate::pac::{gpio, slcr};

/// MIO pin the LED is wired to.
pub const LED_MIO: u8 = 7;

/// Pad settings for the LED pin: GPIO, LVCMOS 1.8 V, pull-up, input
/// receiver off. This is `0x3200` in `MIO_PIN_07`.
pub const LED_CONFIG: MioConfig = MioConfig::gpio()
    .io_type(IoType::Lvcmos18)
    .pullup(true)
    .receiver(false);

/// The GPIO pin driving the LED.
pub type LedPin<G> = Pin<G, LED_MIO, Output>;

/// The LD4 LED, next to the user buttons.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Led<G> {
    pin: LedPin<G>,
}

/// Set up the LED for use.
///
/// Routes MIO 7 to GPIO, then makes it an output and enables its
/// driver, in that order. The driven level is whatever the data
/// register already held.
pub fn initialize<S, G>(mio: &mut Mio<S>, gpio: G) -> Led<G>
where
    S: Deref<Target = slcr::RegisterBlock>,
    G: Deref<Target = gpio::RegisterBlock>,
{
    let pin: Pin<G, LED_MIO, Unconfigured> = Pin::new(gpio);
    Led::new(pin.into_output(mio, LED_CONFIG))
}

impl<G> Led<G>
where
    G: Deref<Target = gpio::RegisterBlock>,
{
    /// Set up the LED for use.
    pub fn new(pin: LedPin<G>) -> Self {
        Self { pin }
    }

    /// Free the LED pin for use elsewhere.
    pub fn free(self) -> LedPin<G> {
        self.pin
    }

    /// Turn the LED on.
    pub fn on(&mut self) {
        self.pin.set_high();
    }

    /// Turn the LED off.
    pub fn off(&mut self) {
        self.pin.set_low();
    }

    /// Set the LED state.
    pub fn set(&mut self, on: bool) {
        self.pin.set_state(on.into());
    }

    /// Toggle the LED on or off.
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }

    /// Is the LED on?
    pub fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl<G> hal1::ErrorType for Led<G> {
    type Error = Infallible;
}

impl<G> hal1::OutputPin for Led<G>
where
    G: Deref<Target = gpio::RegisterBlock>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.off();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on();
        Ok(())
    }
}

impl<G> hal1::StatefulOutputPin for Led<G>
where
    G: Deref<Target = gpio::RegisterBlock>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_on())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_on())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Led::toggle(self);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn pad_setting() {
        assert_eq!(LED_CONFIG.bits(), 0x0000_3200);
    }

    #[test]
    fn initialize_from_reset() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut mio = Mio::new(&slcr);

        let led = initialize(&mut mio, &regs);

        assert_eq!(slcr.mio_pin[7].read(), 0x0000_3200);
        assert_eq!(regs.bank[0].dirm.read(), 0x80);
        assert_eq!(regs.bank[0].oen.read(), 0x80);
        assert_eq!(regs.data[0].read(), 0);
        assert!(!led.is_on());
    }

    #[quickcheck]
    fn initialize_touches_only_the_led(mux: u32, dirm: u32, oen: u32, data: u32) -> bool {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        slcr.mio_pin[7].write(mux);
        slcr.mio_pin[8].write(mux);
        regs.bank[0].dirm.write(dirm);
        regs.bank[0].oen.write(oen);
        regs.data[0].write(data);
        let mut mio = Mio::new(&slcr);

        let _led = initialize(&mut mio, &regs);

        slcr.mio_pin[7].read() == 0x0000_3200
            && slcr.mio_pin[8].read() == mux
            && regs.bank[0].dirm.read() == dirm | 0x80
            && regs.bank[0].oen.read() == oen | 0x80
            && regs.data[0].read() == data
            && regs.bank[1].dirm.read() == 0
    }

    #[test]
    fn on_off() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut led = initialize(&mut Mio::new(&slcr), &regs);

        led.on();
        assert!(led.is_on());
        assert_eq!(regs.data[0].read(), 0x80);

        led.set(false);
        assert!(!led.is_on());
        assert_eq!(regs.data[0].read(), 0);

        led.toggle();
        led.off();
        assert_eq!(led.free().get_state(), crate::hal::gpio::PinState::Low);
    }
}
