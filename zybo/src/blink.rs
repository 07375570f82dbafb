//! Blink an output forever.
//!
//! One [Blinker::step] is a toggle followed by a busy-wait, so the pin
//! carries a square wave with a half period of `half_period` spin
//! iterations. [Blinker::run_forever] is that step in an endless loop.

use core::convert::Infallible;

use embedded_hal_1::digital::StatefulOutputPin;

use crate::hal::delay::BusyWait;

/// Spin iterations between toggles.
///
/// Not a time unit: the wall-clock length depends on the CPU clock and
/// on how the loop was compiled.
pub const HALF_PERIOD: u32 = 1_000_000;

/// Toggles a pin and waits, forever.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blinker<P, D> {
    pin: P,
    delay: D,
    half_period: u32,
}

impl<P, D> Blinker<P, D>
where
    P: StatefulOutputPin,
    D: BusyWait,
{
    /// Blink `pin`, which must already be a configured output, waiting
    /// `half_period` iterations of `delay` between toggles.
    pub fn new(pin: P, delay: D, half_period: u32) -> Self {
        Self {
            pin,
            delay,
            half_period,
        }
    }

    /// Give back the pin and the delay.
    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// The pin being blinked.
    pub fn pin(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Spin iterations between toggles.
    pub fn half_period(&self) -> u32 {
        self.half_period
    }

    /// Invert the pin.
    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.pin.toggle()
    }

    /// Busy-wait for `iterations` spins.
    pub fn delay(&mut self, iterations: u32) {
        self.delay.spin(iterations)
    }

    /// Toggle once, then wait half a period.
    pub fn step(&mut self) -> Result<(), P::Error> {
        self.toggle()?;
        self.delay(self.half_period);
        Ok(())
    }
}

impl<P, D> Blinker<P, D>
where
    P: StatefulOutputPin<Error = Infallible>,
    D: BusyWait,
{
    /// Blink until reset.
    pub fn run_forever(mut self) -> ! {
        loop {
            match self.step() {
                Ok(()) => {}
                Err(e) => match e {},
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::hal::delay::Spin;
    use crate::hal::mio::Mio;
    use crate::led;
    use crate::pac::{gpio, slcr};

    use quickcheck_macros::quickcheck;

    // records every spin instead of spinning
    #[derive(Debug, Default)]
    struct Recorder {
        spins: Vec<u32>,
    }

    impl BusyWait for Recorder {
        fn spin(&mut self, iterations: u32) {
            self.spins.push(iterations);
        }
    }

    #[test]
    fn step_is_toggle_then_delay() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Recorder::default(), HALF_PERIOD);

        assert_eq!(blinker.step(), Ok(()));
        assert!(blinker.pin().is_on());
        assert_eq!(regs.data[0].read(), 0x80);

        assert_eq!(blinker.step(), Ok(()));
        assert!(!blinker.pin().is_on());

        let (_led, recorder) = blinker.free();
        assert_eq!(recorder.spins, [HALF_PERIOD, HALF_PERIOD]);
    }

    #[test]
    fn square_wave_from_reset() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Spin::new(), 16);

        blinker.toggle().unwrap();
        blinker.toggle().unwrap();

        assert_eq!(regs.data[0].read(), 0);
        assert_eq!(slcr.mio_pin[7].read(), 0x0000_3200);
        assert_eq!(regs.bank[0].dirm.read(), 0x80);
        assert_eq!(regs.bank[0].oen.read(), 0x80);
    }

    #[test]
    fn delay_spins_exactly() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Spin::new(), 16);

        blinker.delay(0);
        assert_eq!(blinker.free().1.count(), 0);

        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Spin::new(), 16);
        blinker.step().unwrap();
        assert_eq!(regs.data[0].read(), 0x80);
        assert_eq!(blinker.free().1.count(), 16);
    }

    #[test]
    fn zero_delay_does_not_toggle() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Recorder::default(), HALF_PERIOD);

        blinker.delay(0);

        assert_eq!(regs.data[0].read(), 0);
        assert_eq!(blinker.free().1.spins, [0]);
    }

    #[quickcheck]
    fn toggle_flips_only_the_led(data: u32) -> bool {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        regs.data[0].write(data);
        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Recorder::default(), HALF_PERIOD);

        blinker.toggle().unwrap();
        let once = regs.data[0].read();
        blinker.toggle().unwrap();

        once == data ^ 0x80 && regs.data[0].read() == data
    }

    #[quickcheck]
    fn steps_alternate(steps: u8) -> bool {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let led = led::initialize(&mut Mio::new(&slcr), &regs);
        let mut blinker = Blinker::new(led, Recorder::default(), 3);

        for _ in 0..steps {
            blinker.step().unwrap();
        }

        let (led, recorder) = blinker.free();
        led.is_on() == (steps % 2 == 1) && recorder.spins.len() == steps as usize
    }
}
