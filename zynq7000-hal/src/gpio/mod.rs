//! Interfaces for interacting with GPIO pins.
//!
//! Only the MIO pins (banks 0 and 1) are covered. A pin becomes usable
//! once its pad is routed to GPIO through [Mio](crate::mio::Mio), which
//! is why [Pin::into_output] needs one.

mod hal02;
mod hal1;

mod mode;
pub use mode::*;

mod pin;
pub use pin::*;

#[cfg(test)]
mod test {
    use super::*;

    use crate::mio::{is_gpio, IoType, Mio, MioConfig};
    use crate::pac::{gpio, slcr};

    use quickcheck_macros::quickcheck;

    const CONFIG: MioConfig = MioConfig::gpio()
        .io_type(IoType::Lvcmos18)
        .pullup(true)
        .receiver(false);

    #[test]
    fn output_from_reset() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut mio = Mio::new(&slcr);

        let pin = Pin::<_, 7>::new(&regs).into_output(&mut mio, CONFIG);

        assert_eq!(slcr.mio_pin[7].read(), 0x3200);
        assert_eq!(regs.bank[0].dirm.read(), 0x80);
        assert_eq!(regs.bank[0].oen.read(), 0x80);
        assert_eq!(regs.data[0].read(), 0);
        assert!(pin.is_set_low());
    }

    #[quickcheck]
    fn output_keeps_other_bits(dirm: u32, oen: u32, data: u32) -> bool {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        regs.bank[0].dirm.write(dirm);
        regs.bank[0].oen.write(oen);
        regs.data[0].write(data);
        let mut mio = Mio::new(&slcr);

        let _pin = Pin::<_, 7>::new(&regs).into_output(&mut mio, CONFIG);

        regs.bank[0].dirm.read() == dirm | 0x80
            && regs.bank[0].oen.read() == oen | 0x80
            && regs.data[0].read() == data
    }

    #[test]
    fn output_takes_pad_from_uart() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        // L3_SEL = 0b111, a UART pin
        slcr.mio_pin[7].poke(0x0000_12e0);
        let mut mio = Mio::new(&slcr);
        assert!(!is_gpio(mio.read::<7>()));

        let _pin = Pin::<_, 7>::new(&regs).into_output(&mut mio, CONFIG);

        assert!(is_gpio(mio.read::<7>()));
        assert_eq!(mio.read::<7>(), 0x3200);
    }

    #[test]
    fn bank_one_pins() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut mio = Mio::new(&slcr);

        let mut pin = Pin::<_, 50>::new(&regs).into_output(&mut mio, CONFIG);
        pin.set_high();

        assert_eq!(pin.bank(), 1);
        assert_eq!(pin.mask(), 1 << 18);
        assert_eq!(regs.bank[1].dirm.read(), 1 << 18);
        assert_eq!(regs.bank[0].dirm.read(), 0);
        assert_eq!(regs.data[1].read(), 1 << 18);
        assert_eq!(slcr.mio_pin[50].read(), 0x3200);
    }

    #[test]
    fn output_in_state() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut mio = Mio::new(&slcr);

        let pin = Pin::<_, 7>::new(&regs).into_output_in_state(&mut mio, CONFIG, PinState::High);

        assert!(pin.is_set_high());
        assert_eq!(regs.data[0].read(), 0x80);
    }

    #[test]
    fn set_and_release() {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        let mut mio = Mio::new(&slcr);

        let mut pin = Pin::<_, 7>::new(&regs).into_output(&mut mio, CONFIG);
        pin.set_high();
        assert_eq!(pin.get_state(), PinState::High);
        pin.set_state(!PinState::High);
        assert!(pin.is_set_low());

        let _pin = pin.into_unconfigured();
        assert_eq!(regs.bank[0].dirm.read(), 0);
        assert_eq!(regs.bank[0].oen.read(), 0);
    }

    #[quickcheck]
    fn toggle_flips_one_bit(data: u32) -> bool {
        let slcr = slcr::RegisterBlock::zeroed();
        let regs = gpio::RegisterBlock::zeroed();
        regs.data[0].write(data);
        let mut mio = Mio::new(&slcr);
        let mut pin = Pin::<_, 7>::new(&regs).into_output(&mut mio, CONFIG);

        pin.toggle();
        let once = regs.data[0].read();
        pin.toggle();
        let twice = regs.data[0].read();

        once == data ^ 0x80 && twice == data
    }
}
