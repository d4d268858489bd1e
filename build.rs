use std::env;

fn main() {
    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    // Ensure target is correct
    let target = env::var("TARGET").unwrap();
    if !target.contains("avr") {
        panic!("This crate only supports AVR targets!");
    }
}
