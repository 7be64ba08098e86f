//! Application layer: the blink loop and the serial echo loop.
//!
//! Both are generic over `embedded-hal` traits so the same logic drives the
//! real peripherals on the board and mocks on the host.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::{Read, Write};

use crate::config::{BANNER, LINE_BUFFER_LEN};
use crate::drivers::{Console, LineBuffer};
use crate::numfmt::format_decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Toggles one output pin with a fixed hold time per level
pub struct Blinker<P, D> {
    pin: P,
    delay: D,
    half_period_ms: u16,
    level: Level,
}

impl<P, D> Blinker<P, D>
where
    P: OutputPin,
    D: DelayMs<u16>,
{
    /// `pin` must already be configured as an output; it is driven low here.
    pub fn new(mut pin: P, delay: D, half_period_ms: u16) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self {
            pin,
            delay,
            half_period_ms,
            level: Level::Low,
        })
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// One full period: low, hold, high, hold
    pub fn step(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.level = Level::Low;
        self.delay.delay_ms(self.half_period_ms);

        self.pin.set_high()?;
        self.level = Level::High;
        self.delay.delay_ms(self.half_period_ms);
        Ok(())
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> Blinker<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayMs<u16>,
{
    pub fn run(mut self) -> ! {
        loop {
            if let Err(e) = self.step() {
                match e {}
            }
        }
    }
}

/// Counter prompt and line echo over a serial console
pub struct EchoSession {
    loop_count: u32,
}

impl EchoSession {
    pub const fn new() -> Self {
        Self { loop_count: 0 }
    }

    /// Iterations started so far
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    pub fn setup<S, E>(&self, console: &mut Console<S>) -> Result<(), E>
    where
        S: Read<u8, Error = E> + Write<u8, Error = E>,
    {
        console.print_str(BANNER)
    }

    /// Print the counter and a prompt, read one line, echo it back.
    ///
    /// Returns the length reported by the line read, which equals the buffer
    /// capacity when the input was truncated.
    pub fn iterate<S, E>(&mut self, console: &mut Console<S>) -> Result<usize, E>
    where
        S: Read<u8, Error = E> + Write<u8, Error = E>,
    {
        let mut line = LineBuffer::<LINE_BUFFER_LEN>::new();

        self.loop_count = self.loop_count.wrapping_add(1);

        format_decimal(line.as_mut_slice(), u64::from(self.loop_count));
        console.print(line.text())?;
        console.print_str(" awaiting input: ")?;

        let len = console.read_line(line.as_mut_slice())?;

        console.print_str("\nreceived: '")?;
        console.print(line.text())?;
        console.print_str("'\n")?;

        Ok(len)
    }
}

impl Default for EchoSession {
    fn default() -> Self {
        Self::new()
    }
}
