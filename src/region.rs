//
// Address decode
//

// Implemented address bits, wider addresses cannot be expressed on the pins
pub const ADDR_WIDTH: u32               = 8;
pub const MEM_SIZE: usize               = 1 << ADDR_WIDTH;

//
// Memory Map of regions
//
// 0x00 - Base array: 256B (bank 0)
pub const RAM_REGION_START: u8          = 0x00;
pub const RAM_REGION_END: u8            = 0xFF;
pub const RAM_REGION_SIZE: usize        = (RAM_REGION_END - RAM_REGION_START) as usize + 1;
// 0x0A - Overlay window: 2B (shadowed when a non-zero bank is latched)
pub const OVERLAY_REGION_START: u8      = 0x0A;
pub const OVERLAY_REGION_END: u8        = 0x0B;
pub const OVERLAY_REGION_SIZE: usize    = (OVERLAY_REGION_END - OVERLAY_REGION_START + 1) as usize;
// ---------------------------------------------

// Every value the latch can hold is a bank
pub const BANK_COUNT: usize             = 256;
pub const BASE_BANK: u8                 = 0x00;

//
// Timing
//

// Edges from an address / bank change to a valid output
pub const SETTLE_LATENCY: u8            = 2;
// Reset hold used by the test bench
pub const DEFAULT_RESET_HOLD_CYCLES: u32 = 10;

// uio_oe: every bidirectional line is an input
pub const UIO_OE_ALL_INPUTS: u8         = 0x00;

/// All storage blocks of the device implement this trait
pub trait MemoryRegion {
    fn read(&self, address: u8) -> u8;
    fn write(&mut self, address: u8, value: u8);
}

/// Index of an address inside the overlay window, if eligible
pub fn overlay_slot(address: u8) -> Option<usize> {
    match address {
        OVERLAY_REGION_START..=OVERLAY_REGION_END => {
            Some((address - OVERLAY_REGION_START) as usize)
        },
        _ => None,
    }
}
