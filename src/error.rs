#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The frame did not start with the expected `0x52 0x42` magic.
    MalformedHeader { found: [u8; 2] },
    /// The declared length field disagrees with the number of bytes received.
    LengthMismatch { declared: u16, actual: usize },
    /// The frame addresses a register this crate does not decode.
    UnknownAddress { address: u16 },
    /// The frame ended before all measurement fields.
    Truncated { actual: usize },
    /// The trailing CRC-16 did not match (strict mode only).
    BadChecksum { expected: u16, found: u16 },
    WriteFailure,
    ReadFailure,
}
