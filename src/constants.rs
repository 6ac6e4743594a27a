// HEADER is the fixed two-byte magic that opens every frame, request or
// response.
pub const HEADER: [u8; 2] = [0x52, 0x42];

// CMD_READ is the command byte for reading a single register. The protocol
// also defines a write command (0x02) which this crate does not support.
pub const CMD_READ: u8 = 0x01;

// ADDR_LATEST_DATA_SHORT is the register address of the "latest data, short
// form" measurement set, the only address this crate knows how to decode.
pub const ADDR_LATEST_DATA_SHORT: u16 = 0x5022;

// REQUEST_PAYLOAD_LEN is the value of the length field of a read request:
// 1 command byte + 2 address bytes + 2 CRC bytes.
pub const REQUEST_PAYLOAD_LEN: u16 = 5;

// REQUEST_LEN is the total size of a serialized read request.
pub const REQUEST_LEN: usize = 9;

// RESPONSE_MIN_LEN is the smallest response that still carries all ten
// measurement fields (bytes 0 through 27). The trailing CRC, when present,
// sits beyond this.
pub const RESPONSE_MIN_LEN: usize = 28;

// RESPONSE_BUFFER_LEN bounds the receive buffer. A full latest-data-short
// response is 30 bytes including its CRC.
pub const RESPONSE_BUFFER_LEN: usize = 64;

// CRC_INIT and CRC_POLY define the CRC-16/Modbus variant the protocol uses:
// initial register 0xFFFF, reflected polynomial 0xA001.
pub const CRC_INIT: u16 = 0xFFFF;
pub const CRC_POLY: u16 = 0xA001;
