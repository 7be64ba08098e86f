#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use mega2560_basics::application::Blinker;
    use mega2560_basics::config::BLINK_DELAY_MS;
    use mega2560_basics::hal::{board, pac::Peripherals, Delay};

    let dp = Peripherals::take().unwrap();

    let led = board::led_builtin(&dp.PORTB);
    let delay = Delay::new(dp.TC0);

    match Blinker::new(led, delay, BLINK_DELAY_MS) {
        Ok(blinker) => blinker.run(),
        Err(never) => match never {},
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("blink only runs on an AVR target");
}
