/// Encode an i32, little-endian, two's complement.
pub fn bytes_of_i32(value: i32) -> [u8; 4] {
    let as_u32 = value as u32;
    [
        (as_u32 & 0xFF) as u8,
        ((as_u32 >> 8) & 0xFF) as u8,
        ((as_u32 >> 16) & 0xFF) as u8,
        ((as_u32 >> 24) & 0xFF) as u8,
    ]
}

/// Decode an i32, little-endian, two's complement.
pub fn i32_of_bytes(buf: &[u8; 4]) -> i32 {
    let as_u32 = (buf[0] as u32)
        | (buf[1] as u32) << 8
        | (buf[2] as u32) << 16
        | (buf[3] as u32) << 24;
    as_u32 as i32
}

/// Encode an i64, little-endian, two's complement.
pub fn bytes_of_i64(value: i64) -> [u8; 8] {
    let mut as_u64 = value as u64;
    let mut buf: [u8; 8] = [0; 8];
    for byte in buf.iter_mut() {
        *byte = (as_u64 & 0xFF) as u8;
        as_u64 >>= 8;
    }
    buf
}

/// Decode an i64, little-endian, two's complement.
pub fn i64_of_bytes(buf: &[u8; 8]) -> i64 {
    let mut as_u64: u64 = 0;
    for (i, byte) in buf.iter().enumerate() {
        as_u64 |= (*byte as u64) << (8 * i);
    }
    as_u64 as i64
}

#[test]
fn test_i32_byte_order() {
    assert_eq!(bytes_of_i32(5), [5, 0, 0, 0]);
    assert_eq!(bytes_of_i32(0x0102_0304), [4, 3, 2, 1]);
    assert_eq!(bytes_of_i32(-1), [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(bytes_of_i32(std::i32::MIN), [0, 0, 0, 0x80]);
}

#[test]
fn test_ints() {
    for x in &[0, 1, -1, 255, 256, -256, 65_535, std::i32::MIN, std::i32::MAX] {
        assert_eq!(i32_of_bytes(&bytes_of_i32(*x)), *x);
    }
    for x in &[0, -1, 1 << 40, -(1 << 40), std::i64::MIN, std::i64::MAX] {
        assert_eq!(i64_of_bytes(&bytes_of_i64(*x)), *x);
    }
    assert_eq!(bytes_of_i64(0x0102_0304_0506_0708), [8, 7, 6, 5, 4, 3, 2, 1]);
}
