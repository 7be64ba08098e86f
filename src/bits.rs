//! Single-bit read-modify-write on byte-wide registers

use core::cell::Cell;

/// A byte-wide register that can be read and written as a whole.
pub trait ByteRegister {
    fn get(&self) -> u8;
    fn set(&self, bits: u8);
}

/// Returns `bits` with bit `index` set to `value`, all other bits unchanged.
#[inline]
pub const fn with_bit(bits: u8, index: u8, value: bool) -> u8 {
    let mask = 1u8 << index;
    if value {
        bits | mask
    } else {
        bits & !mask
    }
}

/// Set or clear bit `index` (0..=7) of `reg` without touching the other bits.
///
/// Not atomic on its own; the AVR callers wrap this in a critical section.
#[inline]
pub fn write_bit<R: ByteRegister + ?Sized>(reg: &R, index: u8, value: bool) {
    debug_assert!(index < 8, "bit index out of range");
    reg.set(with_bit(reg.get(), index, value));
}

impl ByteRegister for Cell<u8> {
    #[inline]
    fn get(&self) -> u8 {
        Cell::get(self)
    }

    #[inline]
    fn set(&self, bits: u8) {
        Cell::set(self, bits)
    }
}
