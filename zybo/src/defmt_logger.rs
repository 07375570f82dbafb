//! A [defmt] logger writing raw frames to the global UART.
//!
//! Decode on the host with `defmt-print -e <firmware elf>` fed from the
//! serial port.

// mostly copying defmt-semihosting here

use core::sync::atomic::{AtomicBool, Ordering};

#[defmt::global_logger]
struct Logger;

static TAKEN: AtomicBool = AtomicBool::new(false);
static mut CS_RESTORE: critical_section::RestoreState = critical_section::RestoreState::invalid();
static mut ENCODER: defmt::Encoder = defmt::Encoder::new();

// don't go too crazy here
const BUFFER_LEN: usize = 0x100;
static mut BUFFER: [u8; BUFFER_LEN] = [0; BUFFER_LEN];
static mut BUFFER_NEXT: usize = 0;

unsafe impl defmt::Logger for Logger {
    fn acquire() {
        // safety: released in release()
        let restore = unsafe { critical_section::acquire() };

        // interrupts are off, so plain loads and stores do
        if TAKEN.load(Ordering::Relaxed) {
            panic!("defmt logger acquired twice");
        }

        TAKEN.store(true, Ordering::Relaxed);

        // safety: we are in a critical section, and only we ever access these
        unsafe {
            CS_RESTORE = restore;
            (*core::ptr::addr_of_mut!(ENCODER)).start_frame(do_write)
        }
    }

    unsafe fn flush() {
        flush();
    }

    unsafe fn release() {
        // safety: we hold TAKEN, and only we ever access this
        (*core::ptr::addr_of_mut!(ENCODER)).end_frame(do_write);
        flush();

        TAKEN.store(false, Ordering::Relaxed);

        // safety: acquired in acquire()
        critical_section::release(CS_RESTORE);
    }

    unsafe fn write(bytes: &[u8]) {
        // safety: we hold TAKEN, and only we ever access this
        (*core::ptr::addr_of_mut!(ENCODER)).write(bytes, do_write);
    }
}

fn do_write(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        unsafe {
            // safety: we hold TAKEN and only we ever access these
            let buffer = &mut *core::ptr::addr_of_mut!(BUFFER);
            let amt = bytes.len().min(BUFFER_LEN - BUFFER_NEXT);
            buffer[BUFFER_NEXT..BUFFER_NEXT + amt].copy_from_slice(&bytes[..amt]);
            BUFFER_NEXT += amt;
            bytes = &bytes[amt..];

            if BUFFER_NEXT >= BUFFER_LEN {
                flush();
            }
        }
    }
}

unsafe fn flush() {
    // safety: we hold TAKEN and only we ever access these
    let data = &(*core::ptr::addr_of!(BUFFER))[..BUFFER_NEXT];
    if data.is_empty() {
        return;
    }

    // with no UART installed, keep buffering until full, then drop it all
    let sent = crate::uart::with_tx(|tx| tx.write_all(data).unwrap_or_else(|e| match e {}));
    if sent.is_some() || BUFFER_NEXT >= BUFFER_LEN {
        BUFFER_NEXT = 0;
    }
}
