#![cfg_attr(not(test), no_std)]

use embedded_io_async::{Read, Write};
use log::debug;

mod classify;
pub use classify::*;

mod config;
pub use config::*;

mod constants;
pub use constants::*;

mod crc;
pub use crc::*;

mod error;
pub use error::*;

mod frame;
pub use frame::*;

/// Represents an OMRON 2JCIE-BU environmental sensor.
///
/// This struct drives the sensor's length-prefixed serial protocol: it sends
/// a read request for the configured register and decodes the response into
/// a [`Measurement`]. The protocol is strictly request/response, so callers
/// should keep one request outstanding per physical channel and own the
/// polling cadence themselves.
///
/// # Type Parameters
///
/// * `Serial`: The type of the serial interface used to communicate with the
///   sensor. It must implement `embedded_io_async::Read` and
///   `embedded_io_async::Write`.
pub struct EnvSensor<Serial> {
    serial: Serial,
    config: Config,
}

impl<S> EnvSensor<S>
where
    S: Read + Write,
{
    /// Creates a new `EnvSensor` instance.
    ///
    /// # Arguments
    ///
    /// * `serial`: The serial interface for communication with the sensor.
    /// * `config`: The register address and CRC mode to use.
    ///
    /// # Returns
    ///
    /// A new `EnvSensor` instance.
    pub fn new(serial: S, config: Config) -> Self {
        Self { serial, config }
    }

    /// Reads the latest measurement set from the sensor.
    ///
    /// This sends a read request for the configured register, receives one
    /// complete length-prefixed response frame, and decodes it.
    ///
    /// # Returns
    ///
    /// * `Ok(Measurement)` with the decoded values.
    /// * `Err(Error)` if the serial transfer failed or the response frame
    ///   was rejected. A rejected frame is discarded and reported; the
    ///   sensor stays usable, so a caller's polling loop can simply retry.
    pub async fn read_latest(&mut self) -> Result<Measurement, Error> {
        let request = build_read_request(self.config.address);
        self.write(&request).await?;

        let mut buffer = [0u8; RESPONSE_BUFFER_LEN];
        let frame_len = self.read_frame(&mut buffer).await?;

        parse_response(&buffer[..frame_len], &self.config).map_err(|e| {
            log::error!(
                "Discarding response frame {:02X?}: {:?}",
                &buffer[..frame_len],
                e
            );
            e
        })
    }

    // Writes a fully serialized request, flushing around it so the
    // request/response cycle starts from a clean line.
    async fn write(&mut self, request: &[u8]) -> Result<(), Error> {
        debug!("Sending request: {:02X?}", request);
        self.serial.flush().await.map_err(|_| Error::WriteFailure)?;
        self.serial
            .write_all(request)
            .await
            .map_err(|_| Error::WriteFailure)?;
        self.serial.flush().await.map_err(|_| Error::WriteFailure)?;
        Ok(())
    }

    // Reads one length-prefixed frame into `buffer` and returns its total
    // size: 4 header/length bytes plus the declared remainder. The declared
    // length is trusted only as far as the buffer allows.
    async fn read_frame(&mut self, buffer: &mut [u8; RESPONSE_BUFFER_LEN]) -> Result<usize, Error> {
        let mut filled = 0;
        let mut attempts = 0;
        const MAX_ATTEMPTS: usize = 8;

        while filled < 4 {
            attempts += 1;
            if attempts > MAX_ATTEMPTS {
                log::error!("No frame header after {} reads", MAX_ATTEMPTS);
                return Err(Error::ReadFailure);
            }
            let n = self
                .serial
                .read(&mut buffer[filled..])
                .await
                .map_err(|_| Error::ReadFailure)?;
            if n == 0 {
                log::error!("Serial stream ended before a frame header");
                return Err(Error::ReadFailure);
            }
            filled += n;
        }

        let declared = usize::from(u16::from_le_bytes([buffer[2], buffer[3]]));
        let total = declared + 4;
        if total > buffer.len() {
            log::error!("Declared frame length {} exceeds receive buffer", declared);
            return Err(Error::ReadFailure);
        }

        while filled < total {
            attempts += 1;
            if attempts > MAX_ATTEMPTS {
                log::error!(
                    "Frame still incomplete ({}/{} bytes) after {} reads",
                    filled,
                    total,
                    MAX_ATTEMPTS
                );
                return Err(Error::ReadFailure);
            }
            let n = self
                .serial
                .read(&mut buffer[filled..total])
                .await
                .map_err(|_| Error::ReadFailure)?;
            if n == 0 {
                log::error!("Serial stream ended mid-frame ({}/{} bytes)", filled, total);
                return Err(Error::ReadFailure);
            }
            filled += n;
        }

        debug!("Received frame: {:02X?}", &buffer[..total]);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io_async::ErrorType;

    // In-memory serial endpoint: records written bytes and replays a canned
    // response in `chunk`-sized pieces.
    struct MockSerial {
        response: Vec<u8>,
        cursor: usize,
        chunk: usize,
        written: Vec<u8>,
    }

    impl MockSerial {
        fn new(response: Vec<u8>, chunk: usize) -> Self {
            Self {
                response,
                cursor: 0,
                chunk,
                written: Vec::new(),
            }
        }
    }

    impl ErrorType for MockSerial {
        type Error = core::convert::Infallible;
    }

    impl Read for MockSerial {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let remaining = &self.response[self.cursor..];
            let n = remaining.len().min(buf.len()).min(self.chunk);
            buf[..n].copy_from_slice(&remaining[..n]);
            self.cursor += n;
            Ok(n)
        }
    }

    impl Write for MockSerial {
        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    // A valid latest-data-short response: temperature 21.05 degC,
    // discomfort index 66.00, heat stroke index 18.00.
    fn canned_response() -> Vec<u8> {
        let mut body = vec![CMD_READ];
        body.extend_from_slice(&ADDR_LATEST_DATA_SHORT.to_le_bytes());
        body.push(0x10); // sequence number
        body.extend_from_slice(&2105i16.to_le_bytes());
        body.extend_from_slice(&4300i16.to_le_bytes());
        body.extend_from_slice(&550i16.to_le_bytes());
        body.extend_from_slice(&999870i32.to_le_bytes());
        body.extend_from_slice(&3350i16.to_le_bytes());
        body.extend_from_slice(&15i16.to_le_bytes());
        body.extend_from_slice(&410i16.to_le_bytes());
        body.extend_from_slice(&6600i16.to_le_bytes());
        body.extend_from_slice(&1800i16.to_le_bytes());

        let declared = body.len() as u16 + 2;
        let mut frame = HEADER.to_vec();
        frame.extend_from_slice(&declared.to_le_bytes());
        frame.extend_from_slice(&body);
        let crc = crc16(&frame);
        frame.extend_from_slice(&crc.to_le_bytes());
        frame
    }

    #[tokio::test]
    async fn read_latest_round_trip() {
        let mut sensor = EnvSensor::new(
            MockSerial::new(canned_response(), usize::MAX),
            Config::default(),
        );
        let m = sensor.read_latest().await.unwrap();

        assert_eq!(m.sequence_number, 0x10);
        assert_eq!(m.temperature, 21.05);
        assert_eq!(m.discomfort_level(), DiscomfortLevel::Comfortable);
        assert_eq!(m.heat_stroke_risk(), HeatStrokeRisk::Caution);
        assert_eq!(
            sensor.serial.written,
            build_read_request(ADDR_LATEST_DATA_SHORT).to_vec()
        );
    }

    #[tokio::test]
    async fn read_latest_reassembles_split_reads() {
        let mut sensor = EnvSensor::new(
            MockSerial::new(canned_response(), 7),
            Config::default().crc_mode(CrcMode::Strict),
        );
        let m = sensor.read_latest().await.unwrap();
        assert_eq!(m.pressure, 999.87);
    }

    #[tokio::test]
    async fn read_latest_fails_on_closed_stream() {
        let mut sensor = EnvSensor::new(MockSerial::new(Vec::new(), usize::MAX), Config::default());
        assert_eq!(sensor.read_latest().await, Err(Error::ReadFailure));
    }

    #[tokio::test]
    async fn read_latest_rejects_response_for_other_register() {
        let mut response = canned_response();
        response[5..7].copy_from_slice(&0x5021u16.to_le_bytes());
        let mut sensor = EnvSensor::new(MockSerial::new(response, usize::MAX), Config::default());
        assert_eq!(
            sensor.read_latest().await,
            Err(Error::UnknownAddress { address: 0x5021 })
        );
    }
}
