use crate::ADDR_LATEST_DATA_SHORT;

/// Controls whether the trailing CRC-16 of a response frame is verified.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CrcMode {
    /// Accept responses without checking the trailing CRC. This matches the
    /// sensor's documented usage, where the length and address checks alone
    /// gate a frame.
    Lenient,
    /// Require a trailing CRC-16 and reject frames where it does not match.
    Strict,
}

/// Configuration settings for the 2JCIE-BU sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// The register address polled by read requests.
    pub address: u16,
    /// Whether response frames must carry a valid trailing CRC.
    pub crc_mode: CrcMode,
}

impl Config {
    /// Creates a new `Config` instance.
    ///
    /// # Arguments
    ///
    /// * `address` - The register address to poll.
    /// * `crc_mode` - The `CrcMode` applied to received frames.
    ///
    /// # Returns
    ///
    /// A new `Config` instance with the specified address and CRC mode.
    pub fn new(address: u16, crc_mode: CrcMode) -> Config {
        Config { address, crc_mode }
    }

    /// Sets the register address for the configuration.
    ///
    /// # Arguments
    ///
    /// * `address` - The register address to poll.
    ///
    /// # Returns
    ///
    /// The updated `Config` instance.
    pub fn address(mut self, address: u16) -> Self {
        self.address = address;
        self
    }

    /// Sets the CRC mode for the configuration.
    ///
    /// # Arguments
    ///
    /// * `crc_mode` - The `CrcMode` to apply to received frames.
    ///
    /// # Returns
    ///
    /// The updated `Config` instance.
    pub fn crc_mode(mut self, crc_mode: CrcMode) -> Self {
        self.crc_mode = crc_mode;
        self
    }
}

/// Provides default configuration values for the 2JCIE-BU sensor.
impl Default for Config {
    /// Returns the default configuration.
    ///
    /// The default configuration polls the latest-data-short register
    /// (`0x5022`) and does not verify response checksums.
    fn default() -> Config {
        Config {
            address: ADDR_LATEST_DATA_SHORT,
            crc_mode: CrcMode::Lenient,
        }
    }
}
