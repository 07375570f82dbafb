//! Polled UART transmitter.
//!
//! The UART is used as the boot loader left it: clocks, pins, baud rate
//! and frame format are expected to be configured already, as the first
//! stage boot loader does for the console UART.

use core::convert::Infallible;
use core::ops::Deref;

use crate::pac::uart::{sr, RegisterBlock};

/// The Tx half of a UART.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tx<U> {
    uart: U,
}

impl<U> Tx<U>
where
    U: Deref<Target = RegisterBlock>,
{
    /// Take over transmitting on an already configured UART.
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Give back the UART.
    pub fn free(self) -> U {
        self.uart
    }

    /// Is the FIFO full?
    pub fn is_full(&self) -> bool {
        self.uart.sr.read() & sr::TXFULL != 0
    }

    /// Is the FIFO empty?
    pub fn is_empty(&self) -> bool {
        self.uart.sr.read() & sr::TXEMPTY != 0
    }

    /// Write a single byte to the UART.
    pub fn write_one(&mut self, data: u8) -> nb::Result<(), Infallible> {
        if self.is_full() {
            Err(nb::Error::WouldBlock)
        } else {
            self.uart.fifo.write(data as u32);
            Ok(())
        }
    }

    /// Write all bytes to the UART, blocking as needed.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), Infallible> {
        for b in data {
            nb::block!(self.write_one(*b))?;
        }

        Ok(())
    }

    /// Wait for the Tx FIFO to drain.
    pub fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl<U> core::fmt::Write for Tx<U>
where
    U: Deref<Target = RegisterBlock>,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_all(s.as_bytes()).unwrap_or_else(|e| match e {});
        Ok(())
    }
}

impl<U> embedded_io::ErrorType for Tx<U>
where
    U: Deref<Target = RegisterBlock>,
{
    type Error = Infallible;
}

impl<U> embedded_io::Write for Tx<U>
where
    U: Deref<Target = RegisterBlock>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        // block for the first byte only
        let Some((first, rest)) = buf.split_first() else {
            return Ok(0);
        };
        nb::block!(self.write_one(*first))?;

        let mut written = 1;
        for b in rest {
            match self.write_one(*b) {
                Ok(()) => written += 1,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => match e {},
            }
        }

        Ok(written)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        nb::block!(Tx::flush(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use core::fmt::Write as _;

    #[test]
    fn writes_to_fifo() {
        let uart = RegisterBlock::zeroed();
        let mut tx = Tx::new(&uart);

        assert_eq!(tx.write_one(b'x'), Ok(()));
        assert_eq!(uart.fifo.read(), b'x' as u32);

        write!(tx, "ok").unwrap();
        assert_eq!(uart.fifo.read(), b'k' as u32);
    }

    #[test]
    fn full_fifo_would_block() {
        let uart = RegisterBlock::zeroed();
        uart.sr.poke(sr::TXFULL);
        let mut tx = Tx::new(&uart);

        assert_eq!(tx.write_one(b'x'), Err(nb::Error::WouldBlock));
        assert_eq!(uart.fifo.read(), 0);
    }

    #[test]
    fn flush_waits_for_empty() {
        let uart = RegisterBlock::zeroed();
        let mut tx = Tx::new(&uart);
        assert_eq!(tx.flush(), Err(nb::Error::WouldBlock));

        uart.sr.poke(sr::TXEMPTY);
        assert_eq!(tx.flush(), Ok(()));
        assert_eq!(embedded_io::Write::flush(&mut tx), Ok(()));
    }

    #[test]
    fn io_write_reports_length() {
        let uart = RegisterBlock::zeroed();
        let mut tx = Tx::new(&uart);

        assert_eq!(embedded_io::Write::write(&mut tx, b"abc"), Ok(3));
        assert_eq!(embedded_io::Write::write(&mut tx, b""), Ok(0));
        assert_eq!(uart.fifo.read(), b'c' as u32);
    }
}
