use super::*;

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect()
}

#[test]
fn unswizzle_512x256_32bpp_round_trips() {
    // Reference scenario: 512x256 at 32 bpp, unswizzled then
    // re-swizzled byte for byte.
    let geo = ImageGeometry::new(512, 256, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = PspRemapper::new();

    let data = fixture(512 * 256 * 4);
    let linear = remapper.unswizzle(&data, &geo, &block).unwrap();
    assert_ne!(linear, data);
    let back = remapper.swizzle(&linear, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn first_block_is_sixteen_byte_rows() {
    // A 32x8 8 bpp image is two blocks; the swizzled stream must start
    // with the left block's eight 16-byte rows.
    let geo = ImageGeometry::new(32, 8, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = PspRemapper::new();

    let data: Vec<u8> = (0..32 * 8).map(|i| i as u8).collect();
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();

    for row in 0..8 {
        assert_eq!(
            &swizzled[row * 16..row * 16 + 16],
            &data[row * 32..row * 32 + 16],
            "row {} of the first block",
            row
        );
    }
}

#[test]
fn indexed_8bpp_round_trips() {
    let geo = ImageGeometry::new(128, 64, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = PspRemapper::new();

    let data = fixture(128 * 64);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn wrong_buffer_length_is_rejected() {
    let geo = ImageGeometry::new(64, 64, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = PspRemapper::new();
    assert!(remapper.swizzle(&[0u8; 16], &geo, &block).is_err());
}
