use embedded_hal::blocking::delay::DelayMs;

use super::pac::TC0;
use crate::config::CPU_FREQ_HZ;

// Timer0 at clk/64 counts 250 ticks per millisecond at 16 MHz
const PRESCALER: u32 = 64;
const TICKS_PER_MS: u8 = (CPU_FREQ_HZ / PRESCALER / 1000) as u8;
const _: () = assert!(
    CPU_FREQ_HZ / PRESCALER / 1000 <= u8::MAX as u32,
    "Timer0 cannot count one millisecond at this clock"
);

/// Busy-wait millisecond delay on Timer0 in normal mode
pub struct Delay {
    tc0: TC0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        tc0.tccr0a.reset();
        tc0.tccr0b.reset();
        Self { tc0 }
    }

    fn restart_count(&mut self) {
        self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.restart_count();
        self.tc0.tccr0b.write(|w| w.cs0().prescale_64());

        for _ in 0..ms {
            while self.tc0.tcnt0.read().bits() < TICKS_PER_MS {}
            self.restart_count();
        }

        // Stop the clock
        self.tc0.tccr0b.reset();
    }
}
