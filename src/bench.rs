use crate::config::Config;
use crate::device::BankedMemory;
use crate::error::Error;
use crate::pins::{Pins, PinsOut};
use crate::region::SETTLE_LATENCY;

/// Observes the device after every rising edge
pub trait Monitor {
    fn sample(&mut self, cycle: u64, pins: &Pins, out: &PinsOut);
}

/// Drives a device the way a simulator harness would:
/// pins are held between calls and the clock advances in whole cycles
pub struct TestBench<M: Monitor> {
    /// Device under test
    dut: BankedMemory,
    /// Pins applied on the next edges
    pins: Pins,
    /// Trace sink
    monitor: M,
    /// Rising edges so far
    cycles: u64,
}

impl<M: Monitor> TestBench<M> {
    pub fn new(config: &Config, monitor: M) -> Self {
        Self {
            dut: BankedMemory::new(config),
            pins: Pins::new(),
            monitor,
            cycles: 0,
        }
    }

    pub fn dut(&self) -> &BankedMemory {
        &self.dut
    }

    pub fn pins(&self) -> &Pins {
        &self.pins
    }

    /// Drive pins directly, applied from the next edge on
    pub fn pins_mut(&mut self) -> &mut Pins {
        &mut self.pins
    }

    pub fn monitor(&mut self) -> &mut M {
        &mut self.monitor
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn uio_oe(&self) -> u8 {
        self.dut.uio_oe()
    }

    /// Advance `n` rising edges with the current pins
    pub fn clock_cycles(&mut self, n: u32) -> Result<(), Error> {
        for _ in 0..n {
            // The edge is taken even when the pins break the contract
            let result = self.dut.step(&self.pins);
            self.cycles += 1;
            self.monitor.sample(self.cycles, &self.pins, &self.dut.outputs());
            result?;
        }
        Ok(())
    }

    /// Hold rst_n low for `hold_cycles` edges, release and let the output settle
    /// ```
    /// # use colossal_mem_core::*;
    /// # use colossal_mem_core::default::NoMonitor;
    /// let mut tb = TestBench::new(&Config::new(), NoMonitor);
    /// tb.reset(DEFAULT_RESET_HOLD_CYCLES).unwrap();
    /// assert_eq!(tb.uio_oe(), 0);
    /// ```
    pub fn reset(&mut self, hold_cycles: u32) -> Result<(), Error> {
        self.pins.ena = true;
        self.pins.uio_in = 0;
        self.pins.we = false;
        self.pins.bank_sel = false;

        self.pins.rst_n = false;
        self.clock_cycles(hold_cycles)?;

        self.pins.rst_n = true;
        self.clock_cycles(SETTLE_LATENCY as u32)
    }

    /// Store `data` at `address` in the currently effective bank
    pub fn write(&mut self, address: u8, data: u8) -> Result<(), Error> {
        self.pins.bank_sel = false;
        self.pins.addr = address;
        self.pins.uio_in = data;
        self.pins.we = true;
        let result = self.clock_cycles(1);
        self.pins.we = false;
        result
    }

    /// Capture `value` into the bank-select latch
    pub fn latch_bank_select(&mut self, value: u8) -> Result<(), Error> {
        self.pins.we = false;
        self.pins.uio_in = value;
        self.pins.bank_sel = true;
        let result = self.clock_cycles(1);
        self.pins.bank_sel = false;
        result
    }

    /// Drive `address` and return uo_out once settled.
    /// bank_sel and the shared bus are left as they are.
    pub fn read(&mut self, address: u8) -> Result<u8, Error> {
        self.pins.we = false;
        self.pins.addr = address;
        self.clock_cycles(SETTLE_LATENCY as u32)?;
        self.dut.settled_out()
    }
}
