#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
use mega2560_basics::{drivers::Console, hal::Usart0};

#[cfg(target_arch = "avr")]
fn run(console: &mut Console<Usart0>) -> Result<core::convert::Infallible, core::convert::Infallible> {
    let mut session = mega2560_basics::application::EchoSession::new();
    session.setup(console)?;

    loop {
        let _len = session.iterate(console)?;

        #[cfg(feature = "debug")]
        if _len >= mega2560_basics::config::LINE_BUFFER_LEN {
            console.debug("line truncated", _len as u16)?;
        }
    }
}

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use mega2560_basics::config::UART_BAUD;
    use mega2560_basics::hal::pac::Peripherals;

    let dp = Peripherals::take().unwrap();
    let mut console = Console::new(Usart0::new(dp.USART0, UART_BAUD));

    match run(&mut console) {
        Ok(never) | Err(never) => match never {},
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("hello_serial only runs on an AVR target");
}
