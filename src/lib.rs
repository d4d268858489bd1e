//! Panel-rig firmware library for the ATmega128.
//!
//! The core is the cooperative timing and event subsystem in [`clock`]:
//! a timer-interrupt millisecond counter, the busy-wait pacing primitive
//! built on it, and the per-tick input latch the button decoder consumes.
//! Everything else (port glue, LCD, output stages) sits on top of it.

#![no_std]
#![feature(abi_avr_interrupt)]

pub mod application;
pub mod clock;
pub mod config;
pub mod drivers;
pub mod hal;
pub mod testing;
