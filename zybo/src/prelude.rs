//! Traits needed to use this crate, imported anonymously.

pub use crate::hal::prelude::*;
