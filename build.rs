use std::env;

fn main() {
    let target = env::var("TARGET").unwrap_or_default();

    // Host builds only compile the library for unit tests
    if !target.contains("avr") {
        return;
    }

    let mcu = if env::var("CARGO_FEATURE_ATMEGA1280").is_ok() {
        "atmega1280"
    } else {
        "atmega2560"
    };
    println!("cargo:rustc-link-arg=-mmcu={}", mcu);

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    println!("cargo:rerun-if-changed=build.rs");
}
