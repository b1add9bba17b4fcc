use crate::region::*;

/// Bank 0 storage, one byte per address
pub struct BaseRam {
    bytes: [u8; RAM_REGION_SIZE]
}

impl BaseRam {
    pub fn new() -> Self {
        Self { bytes: [0u8; RAM_REGION_SIZE] }
    }

    pub fn clear(&mut self) {
        self.bytes = [0u8; RAM_REGION_SIZE];
    }
}

impl MemoryRegion for BaseRam {
    fn read(&self, address: u8) -> u8 {
        self.bytes[(address - RAM_REGION_START) as usize]
    }

    fn write(&mut self, address: u8, value: u8) {
        self.bytes[(address - RAM_REGION_START) as usize] = value;
    }
}
