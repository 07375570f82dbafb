//! UART controllers.

use crate::generic::{Reg, RO, RW, WO};

/// Channel status fields.
pub mod sr {
    /// Receive FIFO empty.
    pub const RXEMPTY: u32 = 1 << 1;
    /// Receive FIFO full.
    pub const RXFULL: u32 = 1 << 2;
    /// Transmit FIFO empty.
    pub const TXEMPTY: u32 = 1 << 3;
    /// Transmit FIFO full.
    pub const TXFULL: u32 = 1 << 4;
}

/// UART register block, UART0 based at `0xE000_0000` and UART1 at
/// `0xE000_1000`.
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00: control.
    pub cr: Reg<RW>,
    /// 0x04: mode.
    pub mr: Reg<RW>,
    /// 0x08: interrupt enable.
    pub ier: Reg<WO>,
    /// 0x0c: interrupt disable.
    pub idr: Reg<WO>,
    /// 0x10: interrupt mask.
    pub imr: Reg<RO>,
    /// 0x14: channel interrupt status, write 1 to clear.
    pub isr: Reg<RW>,
    /// 0x18: baud rate generator.
    pub baudgen: Reg<RW>,
    /// 0x1c: receiver timeout.
    pub rxtout: Reg<RW>,
    /// 0x20: receiver FIFO trigger level.
    pub rxwm: Reg<RW>,
    /// 0x24: modem control.
    pub modemcr: Reg<RW>,
    /// 0x28: modem status.
    pub modemsr: Reg<RW>,
    /// 0x2c: channel status, see [sr].
    pub sr: Reg<RO>,
    /// 0x30: transmit and receive FIFO.
    pub fifo: Reg<RW>,
    /// 0x34: baud rate divider.
    pub bauddiv: Reg<RW>,
    /// 0x38: flow control delay.
    pub flowdel: Reg<RW>,
    _reserved0: [u32; 2],
    /// 0x44: transmitter FIFO trigger level.
    pub txwm: Reg<RW>,
}

impl RegisterBlock {
    /// A register block with every register reading zero, for
    /// simulating a UART in ordinary memory.
    pub const fn zeroed() -> Self {
        Self {
            cr: Reg::new(0),
            mr: Reg::new(0),
            ier: Reg::new(0),
            idr: Reg::new(0),
            imr: Reg::new(0),
            isr: Reg::new(0),
            baudgen: Reg::new(0),
            rxtout: Reg::new(0),
            rxwm: Reg::new(0),
            modemcr: Reg::new(0),
            modemsr: Reg::new(0),
            sr: Reg::new(0),
            fifo: Reg::new(0),
            bauddiv: Reg::new(0),
            flowdel: Reg::new(0),
            _reserved0: [0; 2],
            txwm: Reg::new(0),
        }
    }
}
