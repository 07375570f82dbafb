use core::ops::Deref;

use crate::mio::{Mio, MioConfig};
use crate::pac::gpio::{Bank, RegisterBlock};
use crate::pac::slcr;

use super::{Output, PinMode, Unconfigured};

/// Digital pin state.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    Low = 0,
    High = 1,
}

impl From<bool> for PinState {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl core::ops::Not for PinState {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl PinState {
    /// Is the pin high?
    #[inline(always)]
    pub fn is_high(&self) -> bool {
        *self == Self::High
    }

    /// Is the pin low?
    #[inline(always)]
    pub fn is_low(&self) -> bool {
        *self == Self::Low
    }
}

/// MIO pin `N` on the GPIO controller `G`, with type state indicating
/// mode.
///
/// The pin owns `G`. On hardware that is the [GPIO](crate::pac::GPIO)
/// token. Anything that dereferences to a GPIO register block works, so
/// a `&RegisterBlock` held in ordinary memory stands in for the hardware
/// in tests.
pub struct Pin<G, const N: u8, Mode = Unconfigured> {
    gpio: G,
    _marker: core::marker::PhantomData<Mode>,
}

impl<G, const N: u8, Mode> core::fmt::Debug for Pin<G, N, Mode>
where
    Mode: PinMode,
{
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Pin")
            .field(&N)
            .field(&Mode::default())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<G, const N: u8, Mode> defmt::Format for Pin<G, N, Mode>
where
    Mode: PinMode + defmt::Format,
{
    #[allow(clippy::missing_inline_in_public_items)]
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Pin(MIO{}, {})", N, Mode::default())
    }
}

impl<G, const N: u8> Pin<G, N, Unconfigured>
where
    G: Deref<Target = RegisterBlock>,
{
    /// Take MIO pin `N`, leaving the hardware untouched.
    #[inline(always)]
    pub fn new(gpio: G) -> Self {
        const { assert!((N as usize) < slcr::MIO_PINS) };
        Pin {
            gpio,
            _marker: Default::default(),
        }
    }
}

impl<G, const N: u8, Mode> Pin<G, N, Mode>
where
    G: Deref<Target = RegisterBlock>,
    Mode: PinMode,
{
    // MIO 0 to 31 are bank 0, 32 to 53 are bank 1
    const BANK: usize = N as usize / 32;
    const MASK: u32 = 1 << (N as u32 % 32);

    /// Get the MIO number of this pin.
    #[inline(always)]
    pub fn pin(&self) -> u8 {
        N
    }

    /// Get the GPIO bank of this pin.
    #[inline(always)]
    pub fn bank(&self) -> usize {
        Self::BANK
    }

    /// Get the bit of this pin within its bank.
    #[inline(always)]
    pub fn mask(&self) -> u32 {
        Self::MASK
    }

    /// Release the GPIO controller. The pin is left as it is.
    #[inline(always)]
    pub fn free(self) -> G {
        self.gpio
    }

    /// Route the pad to GPIO, then turn the pin into an output.
    ///
    /// The pad is configured first, then the direction, then the output
    /// enable. The output value is left as it was.
    #[inline]
    pub fn into_output<S>(self, mio: &mut Mio<S>, config: MioConfig) -> Pin<G, N, Output>
    where
        S: Deref<Target = slcr::RegisterBlock>,
    {
        mio.configure::<N>(config);
        debug_assert!(
            crate::mio::is_gpio(mio.read::<N>()),
            "MIO {} is not routed to GPIO",
            N
        );
        self.into_mode()
    }

    /// Route the pad to GPIO, then turn the pin into an output driving
    /// the given state from the first moment.
    #[inline]
    pub fn into_output_in_state<S>(
        mut self,
        mio: &mut Mio<S>,
        config: MioConfig,
        state: PinState,
    ) -> Pin<G, N, Output>
    where
        S: Deref<Target = slcr::RegisterBlock>,
    {
        self.write_data(state);
        self.into_output(mio, config)
    }

    /// Stop driving the pin, turning it back into an input.
    #[inline]
    pub fn into_unconfigured(self) -> Pin<G, N, Unconfigured> {
        self.into_mode()
    }

    // change direction and output enable to match M, consuming self
    #[inline(always)]
    fn into_mode<M>(self) -> Pin<G, N, M>
    where
        M: PinMode,
    {
        let bank = self.bank_regs();

        // turning on: direction first. turning off: driver first.
        if M::DIR {
            bank.dirm.set_bits(Self::MASK);
        }
        if M::OEN {
            bank.oen.set_bits(Self::MASK);
        } else {
            bank.oen.clear_bits(Self::MASK);
        }
        if !M::DIR {
            bank.dirm.clear_bits(Self::MASK);
        }

        Pin {
            gpio: self.gpio,
            _marker: Default::default(),
        }
    }

    #[inline(always)]
    fn bank_regs(&self) -> &Bank {
        &self.gpio.bank[Self::BANK]
    }

    // internal helper to read the data register
    #[inline(always)]
    fn read_data(&self) -> PinState {
        (self.gpio.data[Self::BANK].read() & Self::MASK != 0).into()
    }

    // internal helper to write the data register
    #[inline(always)]
    fn write_data(&mut self, state: PinState) {
        let data = &self.gpio.data[Self::BANK];
        if state.is_high() {
            data.set_bits(Self::MASK);
        } else {
            data.clear_bits(Self::MASK);
        }
    }
}

impl<G, const N: u8> Pin<G, N, Output>
where
    G: Deref<Target = RegisterBlock>,
{
    /// Drive the pin high.
    #[inline(always)]
    pub fn set_high(&mut self) {
        self.write_data(PinState::High)
    }

    /// Drive the pin low.
    #[inline(always)]
    pub fn set_low(&mut self) {
        self.write_data(PinState::Low)
    }

    /// Drive the pin to the given state.
    #[inline(always)]
    pub fn set_state(&mut self, state: PinState) {
        self.write_data(state)
    }

    /// The state the pin is being driven to.
    #[inline(always)]
    pub fn get_state(&self) -> PinState {
        self.read_data()
    }

    /// Is the pin being driven high?
    #[inline(always)]
    pub fn is_set_high(&self) -> bool {
        self.get_state().is_high()
    }

    /// Is the pin being driven low?
    #[inline(always)]
    pub fn is_set_low(&self) -> bool {
        self.get_state().is_low()
    }

    /// Invert the driven state. Only this pin's bit of the data
    /// register changes.
    #[inline(always)]
    pub fn toggle(&mut self) {
        self.gpio.data[Self::BANK].toggle_bits(Self::MASK)
    }
}
