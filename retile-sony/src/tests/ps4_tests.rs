use super::*;

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect()
}

#[test]
fn rgba32_round_trips() {
    let geo = ImageGeometry::new(64, 64, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = Ps4Remapper::new();

    let data = fixture(64 * 64 * 4);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_ne!(swizzled, data);
    let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn bc1_blocks_round_trip() {
    // 512x512 BC1: 128x128 blocks of 8 bytes, tiled 8x8 with Morton
    // order inside each tile.
    let geo = ImageGeometry::new(512, 512, 4).unwrap();
    let block = BlockShape::compressed(4, 4, 8);
    let remapper = Ps4Remapper::new();

    let data = fixture(128 * 128 * 8);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn aligned_remap_is_a_permutation() {
    let geo = ImageGeometry::new(32, 16, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = Ps4Remapper::new();

    let data = fixture(32 * 16);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();

    let mut a = data.clone();
    let mut b = swizzled.clone();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn unaligned_dimensions_round_trip() {
    // 20x10 single-byte units against 8x8 tiles: partial edge tiles on
    // both axes must keep all their in-image units.
    let geo = ImageGeometry::new(20, 10, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = Ps4Remapper::new();

    let data = fixture(20 * 10);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn second_tile_starts_after_64_units() {
    // With 16x8 single-byte units the second 8x8 tile begins at stream
    // offset 64 and its first unit is linear (x=8, y=0).
    let geo = ImageGeometry::new(16, 8, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = Ps4Remapper::new();

    let data: Vec<u8> = (0..16 * 8).map(|i| i as u8).collect();
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_eq!(swizzled[0], 0);
    assert_eq!(swizzled[64], 8);
}
