//! System Level Control Registers.
//!
//! Only the lock registers and the MIO pin controls are described here,
//! the rest of the block is reserved space.

use crate::generic::{Reg, RO, RW, WO};

/// Key written to [RegisterBlock::lock] to write-protect the SLCR.
pub const LOCK_KEY: u32 = 0x767b;

/// Key written to [RegisterBlock::unlock] to allow SLCR writes.
pub const UNLOCK_KEY: u32 = 0xdf0d;

/// [RegisterBlock::locksta] bit set while the SLCR is locked.
pub const LOCKSTA_LOCKED: u32 = 1 << 0;

/// Number of MIO pins.
pub const MIO_PINS: usize = 54;

/// MIO pin control fields.
pub mod mio_pin {
    /// Tri-state enable, output driver disabled when set.
    pub const TRI_ENABLE: u32 = 1 << 0;
    /// Level 0 mux select.
    pub const L0_SEL: u32 = 1 << 1;
    /// Level 1 mux select.
    pub const L1_SEL: u32 = 1 << 2;
    /// Level 2 mux select, 2 bits.
    pub const L2_SEL_SHIFT: u32 = 3;
    pub const L2_SEL_MASK: u32 = 0b11 << L2_SEL_SHIFT;
    /// Level 3 mux select, 3 bits.
    pub const L3_SEL_SHIFT: u32 = 5;
    pub const L3_SEL_MASK: u32 = 0b111 << L3_SEL_SHIFT;
    /// Fast CMOS edge when set.
    pub const SPEED: u32 = 1 << 8;
    /// IO buffer type, 3 bits.
    pub const IO_TYPE_SHIFT: u32 = 9;
    pub const IO_TYPE_MASK: u32 = 0b111 << IO_TYPE_SHIFT;
    /// Pull-up enable.
    pub const PULLUP: u32 = 1 << 12;
    /// Disable the HSTL input buffer.
    pub const DISABLE_RCVR: u32 = 1 << 13;

    /// All mux select fields together. Zero in all of them routes the
    /// pin to GPIO.
    pub const SEL_MASK: u32 = L0_SEL | L1_SEL | L2_SEL_MASK | L3_SEL_MASK;
}

/// SLCR register block, based at `0xF800_0000`.
#[repr(C)]
pub struct RegisterBlock {
    /// 0x000: secure configuration lock.
    pub scl: Reg<RW>,
    /// 0x004: write [LOCK_KEY] to lock.
    pub lock: Reg<WO>,
    /// 0x008: write [UNLOCK_KEY] to unlock.
    pub unlock: Reg<WO>,
    /// 0x00c: lock status.
    pub locksta: Reg<RO>,
    _reserved0: [u32; 444],
    /// 0x700: MIO_PIN_00 through MIO_PIN_53.
    pub mio_pin: [Reg<RW>; MIO_PINS],
}

impl RegisterBlock {
    /// A register block with every register reading zero, for
    /// simulating the SLCR in ordinary memory.
    pub const fn zeroed() -> Self {
        Self {
            scl: Reg::new(0),
            lock: Reg::new(0),
            unlock: Reg::new(0),
            locksta: Reg::new(0),
            _reserved0: [0; 444],
            mio_pin: [const { Reg::new(0) }; MIO_PINS],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn offset(block: &RegisterBlock, reg: *mut u32) -> usize {
        reg as usize - block as *const _ as usize
    }

    #[test]
    fn layout() {
        let slcr = RegisterBlock::zeroed();
        assert_eq!(offset(&slcr, slcr.lock.as_ptr()), 0x004);
        assert_eq!(offset(&slcr, slcr.unlock.as_ptr()), 0x008);
        assert_eq!(offset(&slcr, slcr.locksta.as_ptr()), 0x00c);
        assert_eq!(offset(&slcr, slcr.mio_pin[0].as_ptr()), 0x700);
        assert_eq!(offset(&slcr, slcr.mio_pin[7].as_ptr()), 0x71c);
        assert_eq!(offset(&slcr, slcr.mio_pin[53].as_ptr()), 0x7d4);
    }
}
