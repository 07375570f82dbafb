#![no_std]
#![no_main]

use panic_halt as _;

use zybo::blink::{Blinker, HALF_PERIOD};
use zybo::hal;
use zybo::led;

mod boot;
mod single_core;

#[no_mangle]
pub extern "C" fn main() -> ! {
    // grab peripherals
    let p = hal::pac::Peripherals::take().unwrap();

    // send defmt output over the USB serial bridge
    let _uart = zybo::uart::install(zybo::uart::new(p.UART1));

    // route MIO 7 to GPIO and make it an output
    let mut mio = hal::mio::Mio::new(p.SLCR);
    let led = led::initialize(&mut mio, p.GPIO);

    defmt::info!(
        "blinking LD4 on MIO{=u8}, {=u32} spins per half period",
        led::LED_MIO,
        HALF_PERIOD
    );

    // it's blinkin' time
    Blinker::new(led, hal::delay::Spin::new(), HALF_PERIOD).run_forever()
}
