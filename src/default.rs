use log::trace;

use crate::{Monitor, Pins, PinsOut};

pub struct NoMonitor;

impl Monitor for NoMonitor {
    fn sample(&mut self, _cycle: u64, _pins: &Pins, _out: &PinsOut) {
    }
}

/// Forward every edge to the `log` facade
pub struct LogMonitor;

impl Monitor for LogMonitor {
    fn sample(&mut self, cycle: u64, pins: &Pins, out: &PinsOut) {
        trace!("#{} rst_n={} addr=0x{:02X} uio_in=0x{:02X} we={} bank_sel={} -> uo_out=0x{:02X}",
               cycle, pins.rst_n as u8, pins.addr, pins.uio_in,
               pins.we as u8, pins.bank_sel as u8, out.uo_out);
    }
}
