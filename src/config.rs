/// How a non-zero bank latch maps onto overlay storage
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BankMode {
    /// Every latch value is its own bank
    MultiBank,
    /// Every non-zero latch value selects one shared overlay
    SingleOverlay,
}

const DEFAULT_BANK_MODE: BankMode   = BankMode::MultiBank;
const DEFAULT_MIN_RESET_CYCLES: u8  = 1;

/// Power-on configuration of a device
#[derive(Clone, Copy, Debug)]
pub struct Config {
    bank_mode: BankMode,
    /// Consecutive low edges on rst_n before the state is cleared
    min_reset_cycles: u8,
}

impl Config {
    pub fn new() -> Self {
        Self {
            bank_mode: DEFAULT_BANK_MODE,
            min_reset_cycles: DEFAULT_MIN_RESET_CYCLES,
        }
    }

    pub fn bank_mode(&self) -> BankMode {
        self.bank_mode
    }

    pub fn min_reset_cycles(&self) -> u8 {
        self.min_reset_cycles
    }

    /// Select the overlay decode policy (default = MultiBank)
    pub fn set_bank_mode(&mut self, mode: BankMode) -> &mut Self {
        self.bank_mode = mode;
        self
    }

    /// Sets the reset hold requirement (default = 1), 0 is ignored
    /// ```
    /// # use colossal_mem_core::*;
    /// let mut config = Config::new();
    /// config.set_min_reset_cycles(0);
    /// assert_eq!(config.min_reset_cycles(), 1);
    /// config.set_min_reset_cycles(10);
    /// assert_eq!(config.min_reset_cycles(), 10);
    /// ```
    pub fn set_min_reset_cycles(&mut self, cycles: u8) -> &mut Self {
        if cycles > 0 {
            self.min_reset_cycles = cycles;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
