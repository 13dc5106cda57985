/// Encode a f64, little-endian.
pub fn bytes_of_float(value: f64) -> [u8; 8] {
    let mut as_u64 = value.to_bits();
    let mut buf: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 0];
    for byte in buf.iter_mut() {
        *byte = (as_u64 & 0xFF) as u8;
        as_u64 >>= 8;
    }
    buf
}

/// Decode a f64, little-endian.
pub fn float_of_bytes(buf: &[u8; 8]) -> f64 {
    let as_u64 = ((buf[0] as u64) << 0)
        | ((buf[1] as u64) << 8)
        | ((buf[2] as u64) << 16)
        | ((buf[3] as u64) << 24)
        | ((buf[4] as u64) << 32)
        | ((buf[5] as u64) << 40)
        | ((buf[6] as u64) << 48)
        | ((buf[7] as u64) << 56);
    f64::from_bits(as_u64)
}

#[test]
fn test_floats() {
    use std::f64::*;
    for x in &[0., -0., 100., 10., 1000., 0.1, MIN, MAX, MIN_POSITIVE, INFINITY, NEG_INFINITY] {
        let encoded = bytes_of_float(*x);
        let decoded = float_of_bytes(&encoded);
        println!("Encoded {:?} as {:?}, decoded as {:?}", x, encoded, decoded);
        assert_eq!(decoded.to_bits(), x.to_bits());
    }
}

#[test]
fn test_float_byte_order() {
    // 1.0 is 0x3FF0_0000_0000_0000.
    assert_eq!(bytes_of_float(1.0), [0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
}
