//! Blocking, line oriented text I/O over any `embedded-hal` serial port.
//!
//! Outgoing text is CRLF-normalized and stops at the first NUL. Incoming
//! lines end at CR or LF and are stored NUL-terminated.

use embedded_hal::serial::{Read, Write};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Transmit `bytes` up to the first NUL (or the end of the slice), sending a
/// CR before every LF.
pub fn print_bytes<W: Write<u8>>(serial: &mut W, bytes: &[u8]) -> Result<(), W::Error> {
    for &byte in bytes.iter().take_while(|&&b| b != 0) {
        if byte == LF {
            nb::block!(serial.write(CR))?;
        }
        nb::block!(serial.write(byte))?;
    }
    Ok(())
}

/// Receive one line into `buf`, keeping it NUL-terminated.
///
/// Returns the number of bytes stored once a CR or LF arrives; the
/// terminator is not stored. If `buf.len()` bytes are received without a
/// terminator, the last one is dropped, `buf` holds `buf.len() - 1` bytes
/// plus the NUL, and `buf.len()` is returned.
pub fn read_line<R: Read<u8>>(serial: &mut R, buf: &mut [u8]) -> Result<usize, R::Error> {
    let capacity = buf.len();
    if capacity == 0 {
        return Ok(0);
    }

    buf[0] = 0;
    let mut i = 0;
    while i < capacity {
        let byte = nb::block!(serial.read())?;
        match byte {
            CR | LF => return Ok(i),
            _ => {
                if i + 1 < capacity {
                    buf[i] = byte;
                    buf[i + 1] = 0;
                }
                i += 1;
            }
        }
    }

    buf[capacity - 1] = 0;
    Ok(capacity)
}

/// Serial console on top of a byte-wise UART
pub struct Console<S> {
    serial: S,
}

impl<S> Console<S> {
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Give back the underlying serial port
    pub fn release(self) -> S {
        self.serial
    }
}

impl<S, E> Console<S>
where
    S: Read<u8, Error = E> + Write<u8, Error = E>,
{
    /// Blocks until the transmit buffer is free, then sends `byte`
    pub fn send(&mut self, byte: u8) -> Result<(), E> {
        nb::block!(self.serial.write(byte))
    }

    /// Blocks until a byte has been received
    pub fn receive(&mut self) -> Result<u8, E> {
        nb::block!(self.serial.read())
    }

    /// Returns a received byte if one is waiting
    pub fn try_receive(&mut self) -> Result<Option<u8>, E> {
        match self.serial.read() {
            Ok(byte) => Ok(Some(byte)),
            Err(nb::Error::WouldBlock) => Ok(None),
            Err(nb::Error::Other(e)) => Err(e),
        }
    }

    pub fn print(&mut self, bytes: &[u8]) -> Result<(), E> {
        print_bytes(&mut self.serial, bytes)
    }

    pub fn print_str(&mut self, s: &str) -> Result<(), E> {
        self.print(s.as_bytes())
    }

    pub fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, E> {
        read_line(&mut self.serial, buf)
    }

    pub fn write_hex(&mut self, val: u8) -> Result<(), E> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.send(HEX_CHARS[(val >> 4) as usize])?;
        self.send(HEX_CHARS[(val & 0xF) as usize])
    }

    /// Print a diagnostic line, `[DBG] msg: 0xVVVV`
    pub fn debug(&mut self, msg: &str, val: u16) -> Result<(), E> {
        ufmt::uwrite!(self, "[DBG] {}: 0x", msg)?;
        let [hi, lo] = val.to_be_bytes();
        self.write_hex(hi)?;
        self.write_hex(lo)?;
        self.print_str("\n")
    }
}

impl<S, E> ufmt::uWrite for Console<S>
where
    S: Read<u8, Error = E> + Write<u8, Error = E>,
{
    type Error = E;

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        self.print_str(s)
    }
}
