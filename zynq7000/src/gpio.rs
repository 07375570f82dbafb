//! GPIO controller.
//!
//! Bank 0 holds MIO 0 to 31, bank 1 holds MIO 32 to 53, banks 2 and 3
//! are the EMIO signals into the programmable logic.

use crate::generic::{Reg, RO, RW, WO};

/// Number of GPIO banks.
pub const BANKS: usize = 4;

/// Maskable data write for one bank.
///
/// The upper 16 bits of each register are a mask (set means the bit is
/// left alone), the lower 16 bits the data.
#[repr(C)]
pub struct MaskData {
    /// Bits 15:0 of the bank.
    pub lsw: Reg<RW>,
    /// Bits 31:16 of the bank.
    pub msw: Reg<RW>,
}

/// Direction, output enable and interrupt control for one bank.
#[repr(C)]
pub struct Bank {
    /// Direction mode, set for output.
    pub dirm: Reg<RW>,
    /// Output enable, set to drive the pin.
    pub oen: Reg<RW>,
    /// Interrupt mask status.
    pub int_mask: Reg<RO>,
    /// Interrupt enable, write 1 to unmask.
    pub int_en: Reg<WO>,
    /// Interrupt disable, write 1 to mask.
    pub int_dis: Reg<WO>,
    /// Interrupt status, write 1 to clear.
    pub int_stat: Reg<RW>,
    /// Interrupt type, set for edge sensitive.
    pub int_type: Reg<RW>,
    /// Interrupt polarity, set for rising edge or high level.
    pub int_polarity: Reg<RW>,
    /// Interrupt on any edge.
    pub int_any: Reg<RW>,
    _reserved: [u32; 7],
}

/// GPIO register block, based at `0xE000_A000`.
#[repr(C)]
pub struct RegisterBlock {
    /// 0x000: MASK_DATA_n_LSW and MASK_DATA_n_MSW.
    pub mask_data: [MaskData; BANKS],
    _reserved0: [u32; 8],
    /// 0x040: DATA_n, the output value of each bank.
    pub data: [Reg<RW>; BANKS],
    _reserved1: [u32; 4],
    /// 0x060: DATA_n_RO, the sampled pin value of each bank.
    pub data_ro: [Reg<RO>; BANKS],
    _reserved2: [u32; 101],
    /// 0x204: per bank control, 0x40 apart.
    pub bank: [Bank; BANKS],
}

impl Bank {
    const fn zeroed() -> Self {
        Self {
            dirm: Reg::new(0),
            oen: Reg::new(0),
            int_mask: Reg::new(0),
            int_en: Reg::new(0),
            int_dis: Reg::new(0),
            int_stat: Reg::new(0),
            int_type: Reg::new(0),
            int_polarity: Reg::new(0),
            int_any: Reg::new(0),
            _reserved: [0; 7],
        }
    }
}

impl RegisterBlock {
    /// A register block with every register reading zero, for
    /// simulating the GPIO controller in ordinary memory.
    pub const fn zeroed() -> Self {
        Self {
            mask_data: [const {
                MaskData {
                    lsw: Reg::new(0),
                    msw: Reg::new(0),
                }
            }; BANKS],
            _reserved0: [0; 8],
            data: [const { Reg::new(0) }; BANKS],
            _reserved1: [0; 4],
            data_ro: [const { Reg::new(0) }; BANKS],
            _reserved2: [0; 101],
            bank: [const { Bank::zeroed() }; BANKS],
        }
    }
}
