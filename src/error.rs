use core::fmt;

use log::warn;

/// Caller contract violations detected by the device
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// we and bank_sel asserted on the same edge
    BusContention { address: u8, data: u8 },
    /// we or bank_sel asserted while ena is low
    NotEnabled,
    /// Output sampled before the settle latency elapsed
    NotSettled { elapsed: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BusContention { address, data } => {
                write!(f, "we and bank_sel both asserted (addr 0x{:02X}, bus 0x{:02X})", address, data)
            },
            Error::NotEnabled => write!(f, "bus cycle while the device is not enabled"),
            Error::NotSettled { elapsed } => {
                write!(f, "output sampled {} edge(s) after a change", elapsed)
            },
        }
    }
}

macro_rules! contract_error {
    ($addr: expr, $err: expr) => {
        warn!("Contract violation @ 0x{:02X}: {}", $addr, $err)
    }
}

/// Log a violation and hand it back for propagation
pub fn contract_violation(address: u8, err: Error) -> Error {
    contract_error!(address, err);
    err
}
