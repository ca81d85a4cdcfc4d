use super::*;

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect()
}

#[test]
fn rgba32_round_trips_with_auto_block_height() {
    let geo = ImageGeometry::new(256, 256, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = SwitchRemapper::new();

    let data = fixture(256 * 256 * 4);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_ne!(tiled, data);
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn bc7_blocks_round_trip() {
    // 512x512 BC7 is 128x128 blocks of 16 bytes, 32 GOBs wide.
    let geo = ImageGeometry::new(512, 512, 8).unwrap();
    let block = BlockShape::compressed(4, 4, 16);
    let remapper = SwitchRemapper::with_block_height(16);

    let data = fixture(128 * 128 * 16);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn gob_interior_interleaves_row_pairs() {
    // One GOB wide (16 RGBA32 pixels): the tiled stream opens with the
    // first 16 bytes of row 0 and then the first 16 bytes of row 1.
    let geo = ImageGeometry::new(16, 8, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = SwitchRemapper::new();

    let data = fixture(16 * 8 * 4);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_eq!(&tiled[0..16], &data[0..16]);
    assert_eq!(&tiled[16..32], &data[64..80]);
}

#[test]
fn block_height_changes_the_layout() {
    let geo = ImageGeometry::new(32, 16, 32).unwrap();
    let block = BlockShape::pixels(4);
    let data = fixture(32 * 16 * 4);

    let one = SwitchRemapper::with_block_height(1)
        .swizzle(&data, &geo, &block)
        .unwrap();
    let two = SwitchRemapper::with_block_height(2)
        .swizzle(&data, &geo, &block)
        .unwrap();
    assert_ne!(one, two);
}

#[test]
fn auto_block_height_follows_the_height_table() {
    assert_eq!(auto_block_height(8), 1);
    assert_eq!(auto_block_height(16), 2);
    assert_eq!(auto_block_height(32), 4);
    assert_eq!(auto_block_height(96), 8);
    assert_eq!(auto_block_height(512), 16);
}

#[test]
fn non_power_of_two_block_height_is_rejected() {
    let geo = ImageGeometry::new(64, 64, 32).unwrap();
    let block = BlockShape::pixels(4);
    let remapper = SwitchRemapper::with_block_height(3);
    assert!(matches!(
        remapper.swizzle(&[0u8; 64 * 64 * 4], &geo, &block),
        Err(RemapError::UnsupportedParameter(_))
    ));
}
