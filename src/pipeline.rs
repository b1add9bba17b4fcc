use crate::error::Error;
use crate::region::SETTLE_LATENCY;

/// Output register driving uo_out
pub struct OutputStage {
    /// Registered output byte
    value: u8,
    /// Address the register was loaded from, None while in reset
    address: Option<u8>,
    /// Edges since the last address change or state commit
    elapsed: u8,
}

impl OutputStage {
    pub fn new() -> Self {
        Self {
            value: 0,
            address: None,
            elapsed: 0,
        }
    }

    /// Drive 0 and forget the address while reset is held
    pub fn hold(&mut self) {
        self.value = 0;
        self.address = None;
        self.elapsed = 0;
    }

    /// Keep the driven value but require a full settle window again
    pub fn invalidate(&mut self) {
        self.address = None;
        self.elapsed = 0;
    }

    /// Register `value`, read for `address` from the state before this edge.
    /// `committed` tells the edge also changed that state.
    pub fn load(&mut self, address: u8, value: u8, committed: bool) {
        if committed || self.address != Some(address) {
            self.elapsed = 1;
        } else {
            self.elapsed = self.elapsed.saturating_add(1);
        }
        self.address = Some(address);
        self.value = value;
    }

    /// Raw output, may still be transitional
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= SETTLE_LATENCY
    }

    pub fn settled(&self) -> Result<u8, Error> {
        if self.is_settled() {
            Ok(self.value)
        } else {
            Err(Error::NotSettled { elapsed: self.elapsed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_is_not_settled_after_power_on() {
        let stage = OutputStage::new();

        assert_eq!(stage.settled(), Err(Error::NotSettled { elapsed: 0 }));
    }

    #[test]
    fn it_settles_after_two_stable_edges() {
        let mut stage = OutputStage::new();

        stage.load(8, 0x55, false);
        assert!(!stage.is_settled());
        stage.load(8, 0x55, false);
        assert_eq!(stage.settled(), Ok(0x55));
    }

    #[test]
    fn it_restarts_on_address_change() {
        let mut stage = OutputStage::new();

        stage.load(8, 0x55, false);
        stage.load(8, 0x55, false);
        stage.load(9, 0x66, false);
        assert_eq!(stage.settled(), Err(Error::NotSettled { elapsed: 1 }));
        assert_eq!(stage.value(), 0x66);
    }

    #[test]
    fn it_restarts_on_commit() {
        let mut stage = OutputStage::new();

        stage.load(10, 0x77, false);
        stage.load(10, 0x77, false);
        stage.load(10, 0x77, true);
        assert!(!stage.is_settled());
        stage.load(10, 0xAA, false);
        assert_eq!(stage.settled(), Ok(0xAA));
    }

    #[test]
    fn it_unsettles_on_invalidate() {
        let mut stage = OutputStage::new();

        stage.load(8, 0x55, false);
        stage.load(8, 0x55, false);
        stage.invalidate();
        assert_eq!(stage.value(), 0x55);
        assert_eq!(stage.settled(), Err(Error::NotSettled { elapsed: 0 }));
        stage.load(8, 0x55, false);
        assert!(!stage.is_settled());
        stage.load(8, 0x55, false);
        assert_eq!(stage.settled(), Ok(0x55));
    }

    #[test]
    fn it_drives_zero_while_held() {
        let mut stage = OutputStage::new();

        stage.load(8, 0x55, false);
        stage.load(8, 0x55, false);
        stage.hold();
        assert_eq!(stage.value(), 0);
        assert!(!stage.is_settled());
        // Release edge counts as a change even on the same address
        stage.load(8, 0x00, false);
        assert!(!stage.is_settled());
    }
}
