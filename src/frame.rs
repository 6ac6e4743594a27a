use log::debug;

use crate::{
    crc16, Config, CrcMode, DiscomfortLevel, Error, HeatStrokeRisk, CMD_READ, HEADER, REQUEST_LEN,
    REQUEST_PAYLOAD_LEN, RESPONSE_MIN_LEN,
};

/// One decoded measurement set from the latest-data-short register.
///
/// All values are already scaled to their physical units; raw integer fields
/// (light, eTVOC, eCO2) are kept as integers. The struct is plain data: it
/// holds no reference to the frame it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Rolling sequence number assigned by the sensor.
    pub sequence_number: u8,
    /// Temperature in degC.
    pub temperature: f32,
    /// Relative humidity in %RH.
    pub humidity: f32,
    /// Ambient light in lx.
    pub ambient_light: i16,
    /// Barometric pressure in hPa.
    pub pressure: f32,
    /// Sound noise in dB.
    pub noise: f32,
    /// Equivalent total volatile organic compounds in ppb.
    pub etvoc: i16,
    /// Equivalent CO2 in ppm.
    pub eco2: i16,
    /// Discomfort index, dimensionless.
    pub discomfort_index: f32,
    /// Heat-stroke (WBGT-like) index in degC.
    pub heat_stroke_index: f32,
}

impl Measurement {
    /// Returns the comfort bracket for this measurement's discomfort index.
    pub fn discomfort_level(&self) -> DiscomfortLevel {
        DiscomfortLevel::from_index(self.discomfort_index)
    }

    /// Returns the heat-stress bracket for this measurement's heat-stroke
    /// index.
    pub fn heat_stroke_risk(&self) -> HeatStrokeRisk {
        HeatStrokeRisk::from_wbgt(self.heat_stroke_index)
    }
}

/// Serializes a read request for a single register.
///
/// The frame is always nine bytes:
/// `52 42 | len(u16 LE) | 0x01 | address(u16 LE) | crc(u16 LE)`, with the
/// CRC computed over the seven bytes preceding it exactly as emitted.
pub fn build_read_request(address: u16) -> [u8; REQUEST_LEN] {
    let mut frame = [0u8; REQUEST_LEN];
    frame[0..2].copy_from_slice(&HEADER);
    frame[2..4].copy_from_slice(&REQUEST_PAYLOAD_LEN.to_le_bytes());
    frame[4] = CMD_READ;
    frame[5..7].copy_from_slice(&address.to_le_bytes());
    let crc = crc16(&frame[..7]);
    frame[7..9].copy_from_slice(&crc.to_le_bytes());
    frame
}

/// Validates a response frame and decodes it into a [`Measurement`].
///
/// Checks run in order and short-circuit: header magic, declared length
/// against the received byte count, minimum decodable size, register
/// address, and (in [`CrcMode::Strict`] only) the trailing CRC-16. Each
/// rejection returns a typed [`Error`] carrying the offending raw values; a
/// bad frame never panics or poisons later calls.
pub fn parse_response(data: &[u8], config: &Config) -> Result<Measurement, Error> {
    if data.len() < 4 {
        return Err(Error::Truncated { actual: data.len() });
    }
    if data[0..2] != HEADER {
        return Err(Error::MalformedHeader {
            found: [data[0], data[1]],
        });
    }

    let declared = u16::from_le_bytes([data[2], data[3]]);
    if usize::from(declared) != data.len() - 4 {
        return Err(Error::LengthMismatch {
            declared,
            actual: data.len(),
        });
    }
    if data.len() < RESPONSE_MIN_LEN {
        return Err(Error::Truncated { actual: data.len() });
    }

    // Byte 4 is the command echo; the sensor does not guarantee its value on
    // error responses, so it is not validated here.
    let address = u16::from_le_bytes([data[5], data[6]]);
    if address != config.address {
        return Err(Error::UnknownAddress { address });
    }

    if config.crc_mode == CrcMode::Strict {
        if data.len() < RESPONSE_MIN_LEN + 2 {
            return Err(Error::Truncated { actual: data.len() });
        }
        let (body, tail) = data.split_at(data.len() - 2);
        let expected = crc16(body);
        let found = u16::from_le_bytes([tail[0], tail[1]]);
        if expected != found {
            return Err(Error::BadChecksum { expected, found });
        }
    }

    let measurement = Measurement {
        sequence_number: data[7],
        temperature: f32::from(read_i16(data, 8)) / 100.0,
        humidity: f32::from(read_i16(data, 10)) / 100.0,
        ambient_light: read_i16(data, 12),
        pressure: read_i32(data, 14) as f32 / 1000.0,
        noise: f32::from(read_i16(data, 18)) / 100.0,
        etvoc: read_i16(data, 20),
        eco2: read_i16(data, 22),
        discomfort_index: f32::from(read_i16(data, 24)) / 100.0,
        heat_stroke_index: f32::from(read_i16(data, 26)) / 100.0,
    };
    debug!("Decoded measurement: {:?}", measurement);
    Ok(measurement)
}

// Little-endian field readers. Callers have already checked that `offset`
// lies within the minimum frame length.
fn read_i16(data: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
