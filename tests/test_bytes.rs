//! Tests for byte-buffer fills and their draw accounting

use xorshift_rng_rs::Xorshift;

#[test]
fn test_eight_bytes_reconstruct_next_long() {
    let bytes = Xorshift::from_seed(7);
    let longs = Xorshift::from_seed(7);

    let mut buf = [0u8; 8];
    bytes.next_bytes(&mut buf);

    // Index 7 holds the draw's lowest byte, index 0 its highest.
    assert_eq!(i64::from_be_bytes(buf), longs.next_long());
}

#[test]
fn test_sixteen_bytes_use_two_draws_back_to_front() {
    let bytes = Xorshift::from_seed(2024);
    let longs = Xorshift::from_seed(2024);

    let mut buf = [0u8; 16];
    bytes.next_bytes(&mut buf);

    let first = longs.next_long();
    let second = longs.next_long();
    let mut expected = [0u8; 16];
    expected[8..].copy_from_slice(&first.to_be_bytes());
    expected[..8].copy_from_slice(&second.to_be_bytes());
    assert_eq!(buf, expected);
}

#[test]
fn test_partial_group_consumes_one_full_draw() {
    let bytes = Xorshift::from_seed(555);
    let longs = Xorshift::from_seed(555);

    let mut buf = [0u8; 3];
    bytes.next_bytes(&mut buf);

    // The 3-byte fill took the low 3 bytes of one whole draw.
    let draw = longs.next_long() as u64;
    assert_eq!(buf[2], draw as u8);
    assert_eq!(buf[1], (draw >> 8) as u8);
    assert_eq!(buf[0], (draw >> 16) as u8);

    // The rest of the draw is discarded, not carried into later calls.
    assert_eq!(bytes.next_long(), longs.next_long());
}

#[test]
fn test_unaligned_buffer_group_layout() {
    let bytes = Xorshift::from_seed(90210);
    let longs = Xorshift::from_seed(90210);

    let mut buf = [0u8; 11];
    bytes.next_bytes(&mut buf);

    // First draw fills the trailing 8 bytes, second the leading 3.
    let first = longs.next_long();
    let second = longs.next_long() as u64;
    assert_eq!(&buf[3..], &first.to_be_bytes());
    assert_eq!(buf[2], second as u8);
    assert_eq!(buf[1], (second >> 8) as u8);
    assert_eq!(buf[0], (second >> 16) as u8);
}

#[test]
fn test_empty_buffer_consumes_nothing() {
    let bytes = Xorshift::from_seed(64);
    let longs = Xorshift::from_seed(64);

    bytes.next_bytes(&mut []);
    assert_eq!(bytes.next_long(), longs.next_long());
}
