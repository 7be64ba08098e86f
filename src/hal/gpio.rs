use core::convert::Infallible;
use core::marker::PhantomData;

use embedded_hal::digital::v2::OutputPin;

use super::pac::PORTB;
use crate::bits::{self, ByteRegister};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

macro_rules! impl_byte_register {
    ($($reg:ty),* $(,)?) => {
        $(
            impl ByteRegister for $reg {
                #[inline]
                fn get(&self) -> u8 {
                    self.read().bits()
                }

                #[inline]
                fn set(&self, bits: u8) {
                    self.write(|w| unsafe { w.bits(bits) });
                }
            }
        )*
    };
}

impl_byte_register!(
    super::pac::portb::DDRB,
    super::pac::portb::PORTB,
);

#[derive(Debug)]
pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<const P: u8> Pin<PORTB, P, Input> {
    /// Borrowing the port proves the peripherals were taken
    pub fn new(_port: &PORTB) -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<const P: u8, MODE: PinMode> Pin<PORTB, P, MODE> {
    #[inline]
    fn regs(&self) -> &'static super::pac::portb::RegisterBlock {
        unsafe { &*PORTB::ptr() }
    }

    pub fn into_output(self) -> Pin<PORTB, P, Output> {
        // Set DDRx bit
        avr_device::interrupt::free(|_| bits::write_bit(&self.regs().ddrb, P, true));
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

impl<const P: u8> Pin<PORTB, P, Output> {
    #[inline]
    fn write(&mut self, high: bool) {
        avr_device::interrupt::free(|_| bits::write_bit(&self.regs().portb, P, high));
    }
}

impl<const P: u8> OutputPin for Pin<PORTB, P, Output> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.write(true);
        Ok(())
    }
}

// Arduino Mega2560 board pins
pub mod board {
    use super::*;

    /// LED_BUILTIN, digital pin 13
    pub type LedBuiltin = Pin<PORTB, 7, Output>;

    pub fn led_builtin(portb: &PORTB) -> LedBuiltin {
        Pin::<PORTB, 7, Input>::new(portb).into_output()
    }
}
