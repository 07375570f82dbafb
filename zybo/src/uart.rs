//! UART on the USB serial bridge.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::hal::uart;
use crate::pac::UART1;

/// The Tx half of the UART.
pub type Tx = uart::Tx<UART1>;

/// Take over transmitting on UART1, as configured by the boot loader.
pub fn new(uart: UART1) -> Tx {
    Tx::new(uart)
}

// the global UART
static TX: Mutex<RefCell<Option<Tx>>> = Mutex::new(RefCell::new(None));

/// Flush the global UART output.
///
/// See [install()] for how to install a global UART.
pub fn flush() {
    // best effort, ignore errors
    with_tx(|tx| {
        let _ = nb::block!(tx.flush());
    });
}

/// Run `f` with the global [Tx], if one is installed and not in use.
///
/// This never blocks waiting for the UART. `f` runs inside a critical
/// section.
pub fn with_tx<R>(f: impl FnOnce(&mut Tx) -> R) -> Option<R> {
    critical_section::with(|cs| {
        let mut tx = TX.borrow(cs).try_borrow_mut().ok()?;
        tx.as_mut().map(f)
    })
}

/// A token indicating the UART has been installed globally.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlobalUart {
    _priv: (),
}

/// Install the UART as the global handler.
///
/// This is where the defmt logger sends its output.
pub fn install(tx: Tx) -> GlobalUart {
    GlobalUart::install(tx)
}

impl GlobalUart {
    /// Install the UART as the global handler.
    ///
    /// Panics if called from inside [with_tx].
    pub fn install(tx: Tx) -> Self {
        critical_section::with(|cs| TX.borrow(cs).replace(Some(tx)));
        GlobalUart { _priv: () }
    }

    /// Try to install the UART as the global handler.
    ///
    /// This will fail, rather than panic, if the global UART is in use.
    pub fn try_install(tx: Tx) -> Result<Self, Tx> {
        critical_section::with(|cs| match TX.borrow(cs).try_borrow_mut() {
            Ok(mut global) => {
                *global = Some(tx);
                Ok(GlobalUart { _priv: () })
            }
            Err(_) => Err(tx),
        })
    }

    /// Uninstall the global handler, recovering the UART.
    pub fn uninstall(self) -> Tx {
        match critical_section::with(|cs| TX.borrow(cs).take()) {
            Some(tx) => tx,
            // owning this token means it was set
            None => unreachable!(),
        }
    }
}
