use log::{debug, trace};

use crate::bank::BankSelect;
use crate::config::Config;
use crate::error::Error;
use crate::pins::{BusCycle, Pins, PinsOut};
use crate::pipeline::OutputStage;
use crate::ram::BaseRam;
use crate::region::*;
use crate::reset::{ResetEdge, ResetLine};

/// Clocked, bank-switched byte memory
pub struct BankedMemory {
    /// Bank 0 array
    ram: BaseRam,
    /// Bank latch and overlay storage
    banks: BankSelect,
    /// Registered uo_out
    output: OutputStage,
    /// rst_n sampling
    reset_line: ResetLine,
}

impl BankedMemory {
    pub fn new(config: &Config) -> Self {
        Self {
            ram: BaseRam::new(),
            banks: BankSelect::new(config.bank_mode()),
            output: OutputStage::new(),
            reset_line: ResetLine::new(config.min_reset_cycles()),
        }
    }

    /// Clear storage, latch and output register
    pub fn reset(&mut self) {
        self.ram.clear();
        self.banks.reset();
        self.output.hold();
    }

    /// Single rising edge with the given pins.
    /// On a contract violation nothing is committed, the output keeps its value
    /// but is no longer settled.
    /// ```
    /// # use colossal_mem_core::*;
    /// let mut dut = BankedMemory::new(&Config::new());
    /// dut.step(&Pins { addr: 8, uio_in: 0x55, we: true, ..Pins::new() }).unwrap();
    /// dut.step(&Pins { addr: 8, ..Pins::new() }).unwrap();
    /// dut.step(&Pins { addr: 8, ..Pins::new() }).unwrap();
    /// assert_eq!(dut.settled_out(), Ok(0x55));
    /// ```
    pub fn step(&mut self, pins: &Pins) -> Result<(), Error> {
        match self.reset_line.sample(pins.rst_n) {
            ResetEdge::Held => {
                self.output.hold();
                return Ok(());
            },
            ResetEdge::Cleared => {
                debug!("reset: clearing device state");
                self.reset();
                return Ok(());
            },
            ResetEdge::Running | ResetEdge::Released | ResetEdge::Aborted => {},
        }

        let cycle = match pins.cycle() {
            Ok(cycle) => cycle,
            Err(err) => {
                self.output.invalidate();
                return Err(err);
            },
        };

        // Output is computed from the state before this edge commits
        let next = self.read(pins.addr);

        let committed = match cycle {
            BusCycle::Idle => false,
            BusCycle::Write { address, data } => {
                trace!("write 0x{:02X} @ 0x{:02X} (bank {})",
                       data, address, self.banks.effective_bank(address));
                self.write(address, data);
                true
            },
            BusCycle::LatchBank(value) => self.banks.set_latch(value),
        };

        self.output.load(pins.addr, next, committed);

        Ok(())
    }

    /// Output pins after the last edge
    pub fn outputs(&self) -> PinsOut {
        PinsOut::new(self.output.value())
    }

    /// Raw uo_out, may be transitional
    pub fn data_out(&self) -> u8 {
        self.output.value()
    }

    /// uo_out, only once the settle latency has elapsed
    pub fn settled_out(&self) -> Result<u8, Error> {
        self.output.settled()
    }

    pub fn is_settled(&self) -> bool {
        self.output.is_settled()
    }

    /// Bidirectional port direction, always input
    pub fn uio_oe(&self) -> u8 {
        UIO_OE_ALL_INPUTS
    }

    pub fn in_reset(&self) -> bool {
        self.reset_line.in_reset()
    }

    /// Current bank-select latch value
    pub fn bank_latch(&self) -> u8 {
        self.banks.latch()
    }

    /// Bank backing `address` under the current latch
    pub fn effective_bank(&self, address: u8) -> u8 {
        self.banks.effective_bank(address)
    }

    /// Read storage directly, bypassing pins and latency.
    /// `bank` only matters for overlay addresses.
    pub fn peek(&self, address: u8, bank: u8) -> u8 {
        match overlay_slot(address) {
            Some(slot) if bank != BASE_BANK => self.banks.read(slot, bank),
            _ => self.ram.read(address),
        }
    }
}

impl MemoryRegion for BankedMemory {
    fn read(&self, address: u8) -> u8 {
        match self.banks.resolve(address) {
            Some(slot) => self.banks.read(slot, self.banks.latch()),
            None => self.ram.read(address),
        }
    }

    fn write(&mut self, address: u8, value: u8) {
        match self.banks.resolve(address) {
            Some(slot) => self.banks.write(slot, value),
            None => self.ram.write(address, value),
        }
    }
}
