//! Register level drivers for the ATmega2560 family.
//!
//! The chip is picked with a Cargo feature; everything above this module only
//! sees `embedded-hal` traits.

#[cfg(feature = "atmega2560")]
pub use avr_device::atmega2560 as pac;
#[cfg(all(feature = "atmega1280", not(feature = "atmega2560")))]
pub use avr_device::atmega1280 as pac;

pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Output, Pin};
pub use timer::Delay;
pub use uart::Usart0;
