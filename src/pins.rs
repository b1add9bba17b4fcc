use crate::error::{contract_violation, Error};
use crate::region::UIO_OE_ALL_INPUTS;

/// Input pins sampled on a rising edge
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pins {
    /// Active low reset
    pub rst_n: bool,
    /// Device enable
    pub ena: bool,
    /// Target byte address
    pub addr: u8,
    /// Shared bus: write data or bank-select value
    pub uio_in: u8,
    /// Write enable
    pub we: bool,
    /// Bank-select capture
    pub bank_sel: bool,
}

impl Pins {
    /// Idle pins: out of reset, enabled, nothing driven
    pub fn new() -> Self {
        Self {
            rst_n: true,
            ena: true,
            addr: 0,
            uio_in: 0,
            we: false,
            bank_sel: false,
        }
    }

    /// Resolve the shared bus into at most one operation for this edge
    pub fn cycle(&self) -> Result<BusCycle, Error> {
        let cycle = match (self.we, self.bank_sel) {
            (false, false) => BusCycle::Idle,
            (true, false) => BusCycle::Write { address: self.addr, data: self.uio_in },
            (false, true) => BusCycle::LatchBank(self.uio_in),
            (true, true) => {
                let err = Error::BusContention { address: self.addr, data: self.uio_in };
                return Err(contract_violation(self.addr, err));
            },
        };

        if !self.ena && cycle != BusCycle::Idle {
            return Err(contract_violation(self.addr, Error::NotEnabled));
        }

        Ok(cycle)
    }
}

impl Default for Pins {
    fn default() -> Self {
        Self::new()
    }
}

/// What the shared bus carries on one edge
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BusCycle {
    Idle,
    Write { address: u8, data: u8 },
    LatchBank(u8),
}

/// Output pins after a rising edge
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PinsOut {
    /// Byte at (address, effective bank)
    pub uo_out: u8,
    /// Bidirectional lines, never driven
    pub uio_out: u8,
    /// Bidirectional direction, 0 = input
    pub uio_oe: u8,
}

impl PinsOut {
    pub fn new(uo_out: u8) -> Self {
        Self {
            uo_out,
            uio_out: 0x00,
            uio_oe: UIO_OE_ALL_INPUTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_an_idle_cycle() {
        let pins = Pins { uio_in: 0x42, ..Pins::new() };

        assert_eq!(pins.cycle(), Ok(BusCycle::Idle));
    }

    #[test]
    fn it_decodes_a_write_cycle() {
        let pins = Pins { addr: 8, uio_in: 0x55, we: true, ..Pins::new() };

        assert_eq!(pins.cycle(), Ok(BusCycle::Write { address: 8, data: 0x55 }));
    }

    #[test]
    fn it_decodes_a_latch_cycle() {
        let pins = Pins { addr: 8, uio_in: 3, bank_sel: true, ..Pins::new() };

        assert_eq!(pins.cycle(), Ok(BusCycle::LatchBank(3)));
    }

    #[test]
    fn it_rejects_write_and_latch_together() {
        let pins = Pins { addr: 10, uio_in: 3, we: true, bank_sel: true, ..Pins::new() };

        assert_eq!(pins.cycle(), Err(Error::BusContention { address: 10, data: 3 }));
    }

    #[test]
    fn it_rejects_cycles_while_disabled() {
        let pins = Pins { ena: false, we: true, ..Pins::new() };

        assert_eq!(pins.cycle(), Err(Error::NotEnabled));
    }

    #[test]
    fn it_allows_idle_while_disabled() {
        let pins = Pins { ena: false, ..Pins::new() };

        assert_eq!(pins.cycle(), Ok(BusCycle::Idle));
    }

    #[test]
    fn it_never_drives_the_bidirectional_port() {
        let out = PinsOut::new(0xAA);

        assert_eq!(out.uio_oe, 0x00);
        assert_eq!(out.uio_out, 0x00);
    }
}
