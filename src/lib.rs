//! Bare-metal demo firmware for the Arduino Mega2560: an LED blink loop and
//! a polled UART echo.
//!
//! Everything except [`hal`] is target independent and is unit tested on the
//! host against `embedded-hal-mock`.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod bits;
pub mod config;
pub mod drivers;
pub mod numfmt;

#[cfg(target_arch = "avr")]
pub mod hal;
