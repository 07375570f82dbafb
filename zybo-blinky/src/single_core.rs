//! Critical sections for a single Cortex-A9 core: mask IRQs.
//!
//! CPU 1 is parked in `_start`, so nothing else can run while CPU 0
//! has IRQs masked.

use core::arch::asm;

// CPSR.I, set when IRQs are masked
const CPSR_I: u32 = 1 << 7;

struct SingleCore;
critical_section::set_impl!(SingleCore);

unsafe impl critical_section::Impl for SingleCore {
    unsafe fn acquire() -> critical_section::RawRestoreState {
        let cpsr: u32;
        asm!("mrs {}, cpsr", "cpsid i", out(reg) cpsr, options(nostack, preserves_flags));
        // true if IRQs were on before
        cpsr & CPSR_I == 0
    }

    unsafe fn release(was_active: critical_section::RawRestoreState) {
        if was_active {
            asm!("cpsie i", options(nostack, preserves_flags));
        }
    }
}
