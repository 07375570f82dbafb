//! Volatile register cells with typed access.

use core::marker::PhantomData;

use vcell::VolatileCell;

/// Read-write access. (type state)
#[derive(Debug)]
pub struct RW;

/// Read-only access. (type state)
#[derive(Debug)]
pub struct RO;

/// Write-only access. (type state)
#[derive(Debug)]
pub struct WO;

/// Access types that can be read.
pub trait Readable {}

/// Access types that can be written.
pub trait Writable {}

impl Readable for RW {}
impl Writable for RW {}
impl Readable for RO {}
impl Writable for WO {}

/// A single 32-bit memory-mapped register.
///
/// Every read and write goes through a volatile access, so none of them
/// can be merged or elided by the compiler.
#[repr(transparent)]
pub struct Reg<A = RW> {
    value: VolatileCell<u32>,
    _access: PhantomData<A>,
}

impl<A> Reg<A> {
    /// A register holding `value`, for building register files in memory.
    pub const fn new(value: u32) -> Self {
        Self {
            value: VolatileCell::new(value),
            _access: PhantomData,
        }
    }

    /// Address of this register.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut u32 {
        self.value.as_ptr()
    }

    /// Read the stored value regardless of access type.
    ///
    /// Meant for register files held in memory. On hardware, reading a
    /// write-only register returns whatever the bus returns.
    #[inline(always)]
    pub fn peek(&self) -> u32 {
        self.value.get()
    }

    /// Store a value regardless of access type.
    ///
    /// Meant for register files held in memory, to stand in for state
    /// the hardware would produce. On hardware, writes to read-only
    /// registers are ignored.
    #[inline(always)]
    pub fn poke(&self, value: u32) {
        self.value.set(value)
    }
}

impl<A: Readable> Reg<A> {
    /// Read the register.
    #[inline(always)]
    pub fn read(&self) -> u32 {
        self.value.get()
    }
}

impl<A: Writable> Reg<A> {
    /// Overwrite the register.
    #[inline(always)]
    pub fn write(&self, value: u32) {
        self.value.set(value)
    }
}

impl Reg<RW> {
    /// Read, transform, and write back the register.
    #[inline(always)]
    pub fn modify(&self, f: impl FnOnce(u32) -> u32) {
        self.write(f(self.read()))
    }

    /// Set every bit in `mask`, leaving the others alone.
    #[inline(always)]
    pub fn set_bits(&self, mask: u32) {
        self.modify(|r| r | mask)
    }

    /// Clear every bit in `mask`, leaving the others alone.
    #[inline(always)]
    pub fn clear_bits(&self, mask: u32) {
        self.modify(|r| r & !mask)
    }

    /// Invert every bit in `mask`, leaving the others alone.
    #[inline(always)]
    pub fn toggle_bits(&self, mask: u32) {
        self.modify(|r| r ^ mask)
    }
}

impl<A> core::fmt::Debug for Reg<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // write-only registers may not be read on hardware
        f.debug_tuple("Reg").field(&self.as_ptr()).finish()
    }
}

#[cfg(feature = "defmt")]
impl<A> defmt::Format for Reg<A> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Reg({=usize:#x})", self.as_ptr() as usize)
    }
}
