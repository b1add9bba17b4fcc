use enum_dispatch::enum_dispatch;
use log::trace;

use crate::config::BankMode;
use crate::region::*;

/// Storage for the non-zero banks of the overlay window
#[enum_dispatch]
pub trait OverlayController {
    /// `bank` is never the base bank
    fn read(&self, slot: usize, bank: u8) -> u8;
    fn write(&mut self, slot: usize, bank: u8, value: u8);
    fn clear(&mut self);
}

#[enum_dispatch(OverlayController)]
pub enum Overlay {
    MultiBank,
    SingleOverlay,
}

impl From<BankMode> for Overlay {
    fn from(mode: BankMode) -> Self {
        match mode {
            BankMode::MultiBank => Overlay::from(MultiBank::new()),
            BankMode::SingleOverlay => Overlay::from(SingleOverlay::new()),
        }
    }
}

/// Each latch value owns its own overlay slots
pub struct MultiBank {
    slots: [[u8; OVERLAY_REGION_SIZE]; BANK_COUNT],
}

impl MultiBank {
    pub fn new() -> Self {
        Self { slots: [[0u8; OVERLAY_REGION_SIZE]; BANK_COUNT] }
    }
}

impl OverlayController for MultiBank {
    fn read(&self, slot: usize, bank: u8) -> u8 {
        self.slots[bank as usize][slot]
    }

    fn write(&mut self, slot: usize, bank: u8, value: u8) {
        self.slots[bank as usize][slot] = value;
    }

    fn clear(&mut self) {
        self.slots = [[0u8; OVERLAY_REGION_SIZE]; BANK_COUNT];
    }
}

/// Any non-zero latch value selects the same overlay
pub struct SingleOverlay {
    slots: [u8; OVERLAY_REGION_SIZE],
}

impl SingleOverlay {
    pub fn new() -> Self {
        Self { slots: [0u8; OVERLAY_REGION_SIZE] }
    }
}

impl OverlayController for SingleOverlay {
    fn read(&self, slot: usize, _bank: u8) -> u8 {
        self.slots[slot]
    }

    fn write(&mut self, slot: usize, _bank: u8, value: u8) {
        self.slots[slot] = value;
    }

    fn clear(&mut self) {
        self.slots = [0u8; OVERLAY_REGION_SIZE];
    }
}

/// Bank-select latch and the overlay it steers
pub struct BankSelect {
    /// Last value captured from the shared bus while bank_sel was high
    latch: u8,
    overlay: Overlay,
}

impl BankSelect {
    pub fn new(mode: BankMode) -> Self {
        Self {
            latch: BASE_BANK,
            overlay: Overlay::from(mode),
        }
    }

    /// Reset the latch and the overlay storage
    pub fn reset(&mut self) {
        self.latch = BASE_BANK;
        self.overlay.clear();
    }

    pub fn latch(&self) -> u8 {
        self.latch
    }

    /// Capture a new latch value, returns whether it differs from the old one
    pub fn set_latch(&mut self, value: u8) -> bool {
        let changed = self.latch != value;
        if changed {
            trace!("bank latch 0x{:02X} -> 0x{:02X}", self.latch, value);
        }
        self.latch = value;
        changed
    }

    /// Bank that backs `address` under the current latch
    pub fn effective_bank(&self, address: u8) -> u8 {
        match overlay_slot(address) {
            Some(_) => self.latch,
            None => BASE_BANK,
        }
    }

    /// Overlay slot backing `address`, `None` if the base array does
    pub fn resolve(&self, address: u8) -> Option<usize> {
        match overlay_slot(address) {
            Some(slot) if self.latch != BASE_BANK => Some(slot),
            _ => None,
        }
    }

    pub fn read(&self, slot: usize, bank: u8) -> u8 {
        self.overlay.read(slot, bank)
    }

    pub fn write(&mut self, slot: usize, value: u8) {
        self.overlay.write(slot, self.latch, value);
    }
}
