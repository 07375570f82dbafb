//! Write protection of the System Level Control Registers.

use crate::pac::slcr::{RegisterBlock, LOCKSTA_LOCKED, LOCK_KEY, UNLOCK_KEY};

/// Is the SLCR write-protected?
#[inline(always)]
pub fn is_locked(slcr: &RegisterBlock) -> bool {
    slcr.locksta.read() & LOCKSTA_LOCKED != 0
}

/// Run `f` with SLCR writes allowed.
///
/// If the SLCR was locked on entry (the first stage boot loader usually
/// leaves it that way) it is unlocked for `f` and locked again after.
/// Otherwise it is left as it was.
#[inline]
pub fn with_unlocked<R>(slcr: &RegisterBlock, f: impl FnOnce(&RegisterBlock) -> R) -> R {
    let relock = is_locked(slcr);
    if relock {
        slcr.unlock.write(UNLOCK_KEY);
    }

    let r = f(slcr);

    if relock {
        slcr.lock.write(LOCK_KEY);
    }

    r
}
