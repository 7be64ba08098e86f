use core::convert::Infallible;

use embedded_hal::serial::{Read, Write};

use super::pac::USART0;
use crate::config::{baud_divisor, CPU_FREQ_HZ};

/// Polled USART0, 8 data bits, no parity, 1 stop bit
pub struct Usart0 {
    usart: USART0,
}

impl Usart0 {
    pub fn new(usart: USART0, baud: u32) -> Self {
        let mut uart = Self { usart };
        uart.configure(baud);
        uart
    }

    /// Program the divisor and U2X for `baud` and enable both directions
    pub fn configure(&mut self, baud: u32) {
        let divisor = baud_divisor(CPU_FREQ_HZ, baud);

        self.usart.ubrr0.write(|w| unsafe { w.bits(divisor.ubrr) });
        self.usart.ucsr0a.write(|w| w.u2x0().bit(divisor.use_2x));
        self.usart
            .ucsr0b
            .write(|w| w.txen0().set_bit().rxen0().set_bit());
        self.usart.ucsr0c.write(|w| {
            w.umsel0()
                .usart_async()
                .ucsz0()
                .chr8()
                .usbs0()
                .stop1()
                .upm0()
                .disabled()
        });
    }
}

impl Read<u8> for Usart0 {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        if self.usart.ucsr0a.read().rxc0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.usart.udr0.read().bits())
    }
}

impl Write<u8> for Usart0 {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().udre0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().udre0().bit_is_clear() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}
