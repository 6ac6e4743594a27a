use crate::{CRC_INIT, CRC_POLY};

/// Computes the CRC-16/Modbus checksum of a byte sequence.
///
/// The register starts at `0xFFFF`; each input byte is XORed into its low
/// eight bits and followed by eight shift rounds against the reflected
/// polynomial `0xA001`. This is the exact variant the sensor implements, so
/// an unreflected or left-shifting CRC-16 will not interoperate.
pub fn crc16(data: &[u8]) -> u16 {
    let mut reg = CRC_INIT;
    for &byte in data {
        reg ^= u16::from(byte);
        for _ in 0..8 {
            let lsb = reg & 1;
            reg >>= 1;
            if lsb != 0 {
                reg ^= CRC_POLY;
            }
        }
    }
    reg
}
