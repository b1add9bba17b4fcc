#![no_std]

// Private mods
mod bank;
mod bench;
mod config;
mod device;
mod error;
mod pins;
mod pipeline;
mod ram;
mod region;
mod reset;

pub mod default;

// Public exports
pub use bench::{Monitor, TestBench};
pub use config::{BankMode, Config};
pub use device::BankedMemory;
pub use error::Error;
pub use pins::{BusCycle, Pins, PinsOut};
pub use region::{
    ADDR_WIDTH, BANK_COUNT, BASE_BANK, DEFAULT_RESET_HOLD_CYCLES, MEM_SIZE,
    OVERLAY_REGION_END, OVERLAY_REGION_START, SETTLE_LATENCY,
};
