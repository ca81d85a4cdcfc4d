use super::*;

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect()
}

#[test]
fn bc1_1024x1024_round_trips() {
    // Reference scenario: 1024x1024 BC1 is 256x256 blocks of 8 bytes,
    // already aligned to the 32-block macro grid.
    let geo = ImageGeometry::new(1024, 1024, 4).unwrap();
    let block = BlockShape::compressed(4, 4, 8);
    let remapper = Xbox360Remapper::new();

    let data = fixture(256 * 256 * 8);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_ne!(tiled, data);
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn aligned_remap_is_a_permutation() {
    let geo = ImageGeometry::new(512, 512, 8).unwrap();
    let block = BlockShape::compressed(4, 4, 16);
    let remapper = Xbox360Remapper::without_byte_swap();

    let data = fixture(128 * 128 * 16);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();

    let mut a = data.clone();
    let mut b = tiled.clone();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn unaligned_block_grid_round_trips() {
    // 400x144 BC1 is 100x36 blocks, well off the 32-block macro grid;
    // ranked slots must keep every edge block.
    let geo = ImageGeometry::new(400, 144, 4).unwrap();
    let block = BlockShape::compressed(4, 4, 8);
    let remapper = Xbox360Remapper::new();

    let data = fixture(100 * 36 * 8);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);

    let mut a = data.clone();
    let mut b = tiled;
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "edge blocks must land in compacted slots, not fall off");
}

#[test]
fn rgba32_round_trips_with_byte_swap() {
    let geo = ImageGeometry::new(128, 128, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = Xbox360Remapper::new();

    let data = fixture(128 * 128 * 4);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn byte_swap_swaps_sixteen_bit_words() {
    let mut data = vec![0x11, 0x22, 0x33, 0x44, 0x55];
    swap_byte_order(&mut data);
    assert_eq!(data, vec![0x22, 0x11, 0x44, 0x33, 0x55]);
    swap_byte_order(&mut data);
    assert_eq!(data, vec![0x11, 0x22, 0x33, 0x44, 0x55]);
}

#[test]
fn byte_swap_changes_the_tiled_stream() {
    let geo = ImageGeometry::new(512, 512, 4).unwrap();
    let block = BlockShape::compressed(4, 4, 8);
    let data = fixture(128 * 128 * 8);

    let swapped = Xbox360Remapper::new().swizzle(&data, &geo, &block).unwrap();
    let plain = Xbox360Remapper::without_byte_swap()
        .swizzle(&data, &geo, &block)
        .unwrap();
    assert_ne!(swapped, plain);
}

#[test]
fn wrong_buffer_length_is_rejected() {
    let geo = ImageGeometry::new(256, 256, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = Xbox360Remapper::new();
    let err = remapper.unswizzle(&[0u8; 100], &geo, &block).unwrap_err();
    assert!(matches!(
        err,
        RemapError::BufferSizeMismatch {
            expected: 262144,
            actual: 100
        }
    ));
}
