//! ICMPv4 Echo header.
//!
//! ```text
//!  0               1               2               3
//! +---------------+---------------+-------------------------------+
//! |     Type      |     Code      |           Checksum            |
//! +---------------+---------------+-------------------------------+
//! |          Identifier           |        Sequence Number        |
//! +-------------------------------+-------------------------------+
//! ```
//!
//! All multi-byte fields are big-endian.

use crate::checksum::checksum;

pub const HEADER_LEN: usize = 8;

pub const ECHO_REPLY: u8 = 0;
pub const ECHO_REQUEST: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence: u16,
}

impl EchoHeader {
    /// Echo Request with a zero checksum field.
    pub fn request(identifier: u16, sequence: u16) -> Self {
        EchoHeader {
            icmp_type: ECHO_REQUEST,
            code: 0,
            checksum: 0,
            identifier,
            sequence,
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0] = self.icmp_type;
        buf[1] = self.code;
        buf[2..4].copy_from_slice(&self.checksum.to_be_bytes());
        buf[4..6].copy_from_slice(&self.identifier.to_be_bytes());
        buf[6..8].copy_from_slice(&self.sequence.to_be_bytes());
        buf
    }

    /// Parses the first [`HEADER_LEN`] bytes of `buf`; trailing bytes are ignored.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let hdr: &[u8; HEADER_LEN] = buf.get(..HEADER_LEN)?.try_into().ok()?;
        Some(EchoHeader {
            icmp_type: hdr[0],
            code: hdr[1],
            checksum: u16::from_be_bytes([hdr[2], hdr[3]]),
            identifier: u16::from_be_bytes([hdr[4], hdr[5]]),
            sequence: u16::from_be_bytes([hdr[6], hdr[7]]),
        })
    }

    /// Computes the checksum over the header with the field zeroed and
    /// stores it.
    pub fn fill_checksum(&mut self) {
        self.checksum = 0;
        self.checksum = checksum(&self.encode());
    }

    pub fn is_echo_reply(&self) -> bool {
        self.icmp_type == ECHO_REPLY && self.code == 0
    }
}

/// Builds the wire bytes of an Echo Request with a valid checksum.
pub fn build_echo_request(identifier: u16, sequence: u16) -> [u8; HEADER_LEN] {
    let mut hdr = EchoHeader::request(identifier, sequence);
    hdr.fill_checksum();
    hdr.encode()
}
