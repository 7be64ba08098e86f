//! Configuration constants for the Mega2560 demo firmware

/// Clock of the Mega2560 board, used when the build does not set `MCU_FREQ_HZ`
const DEFAULT_CPU_FREQ_HZ: u32 = 16_000_000;

/// CPU frequency in Hz, from `MCU_FREQ_HZ` (set by `build.rs` for AVR targets)
pub const CPU_FREQ_HZ: u32 = match option_env!("MCU_FREQ_HZ") {
    Some(hz) => parse_hz(hz),
    None => DEFAULT_CPU_FREQ_HZ,
};

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Time the LED spends in each level, in milliseconds
pub const BLINK_DELAY_MS: u16 = 500;

/// Capacity of the serial line buffer, including the NUL
pub const LINE_BUFFER_LEN: usize = 256;

/// Printed once by the serial echo program after the UART is up
pub const BANNER: &str = "\n\n\n\nhello, world\n";

/// Accepted baud rate error, in percent
const BAUD_TOLERANCE_PCT: u64 = 2;

/// Parse a decimal frequency at compile time; anything but digits fails the build.
const fn parse_hz(text: &str) -> u32 {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "MCU_FREQ_HZ is empty");

    let mut hz: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "MCU_FREQ_HZ must be decimal digits");
        hz = match hz.checked_mul(10) {
            Some(v) => match v.checked_add((digit - b'0') as u32) {
                Some(v) => v,
                None => panic!("MCU_FREQ_HZ overflows u32"),
            },
            None => panic!("MCU_FREQ_HZ overflows u32"),
        };
        i += 1;
    }
    hz
}

/// Divisor register settings for a given clock and baud rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaudDivisor {
    /// Value for the 12-bit UBRR register
    pub ubrr: u16,
    /// Whether the U2X double speed bit must be set
    pub use_2x: bool,
}

/// Compute the UBRR value for `baud` at `clock_hz`, preferring normal speed
/// and falling back to double speed when the error exceeds the tolerance.
pub const fn baud_divisor(clock_hz: u32, baud: u32) -> BaudDivisor {
    let f = clock_hz as u64;
    let b = baud as u64;

    let ubrr = (f + 8 * b) / (16 * b) - 1;
    let actual = 16 * (ubrr + 1);
    let too_slow = 100 * f > actual * (100 * b + b * BAUD_TOLERANCE_PCT);
    let too_fast = 100 * f < actual * (100 * b - b * BAUD_TOLERANCE_PCT);

    if too_slow || too_fast {
        BaudDivisor {
            ubrr: ((f + 4 * b) / (8 * b) - 1) as u16,
            use_2x: true,
        }
    } else {
        BaudDivisor {
            ubrr: ubrr as u16,
            use_2x: false,
        }
    }
}

/// Divisor for the firmware's fixed clock and baud rate
pub const UART_DIVISOR: BaudDivisor = baud_divisor(CPU_FREQ_HZ, UART_BAUD);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_defaults_to_board_frequency() {
        assert_eq!(CPU_FREQ_HZ, DEFAULT_CPU_FREQ_HZ);
    }

    #[test]
    fn parses_frequency_text() {
        assert_eq!(parse_hz("16000000"), 16_000_000);
        assert_eq!(parse_hz("8000000"), 8_000_000);
        assert_eq!(parse_hz("0"), 0);
    }

    #[test]
    #[should_panic]
    fn rejects_non_digit_frequency() {
        parse_hz("16MHz");
    }

    #[test]
    fn mega2560_9600_is_normal_speed() {
        assert_eq!(
            UART_DIVISOR,
            BaudDivisor {
                ubrr: 103,
                use_2x: false
            }
        );
    }

    #[test]
    fn high_rate_needs_double_speed() {
        // 115200 at 16 MHz is 3.5% off in normal mode
        assert_eq!(
            baud_divisor(16_000_000, 115_200),
            BaudDivisor {
                ubrr: 16,
                use_2x: true
            }
        );
    }

    #[test]
    fn slow_clock() {
        assert_eq!(
            baud_divisor(4_000_000, 9600),
            BaudDivisor {
                ubrr: 25,
                use_2x: false
            }
        );
    }
}
