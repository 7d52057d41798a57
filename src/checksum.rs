//! Internet checksum (RFC 1071).

/// Computes the 16-bit one's-complement checksum of `data`.
///
/// Bytes are summed as big-endian words; a trailing odd byte is the high
/// byte of a final word whose low byte is zero.
pub fn checksum(mut data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    while data.len() >= 2 {
        sum = sum.wrapping_add(u16::from_be_bytes([data[0], data[1]]) as u32);
        data = &data[2..];
    }
    if let [last] = data {
        sum = sum.wrapping_add((*last as u32) << 8);
    }
    while (sum >> 16) != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// Returns true when `message`, checksum field included, sums to zero.
pub fn verify(message: &[u8]) -> bool {
    checksum(message) == 0
}
