use super::*;

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect()
}

#[test]
fn rgb565_round_trips() {
    let geo = ImageGeometry::new(64, 64, 16).unwrap();
    let block = BlockShape::pixels(2);
    let remapper = GameCubeRemapper::new();

    let data = fixture(64 * 64 * 2);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_ne!(tiled, data);
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn i4_round_trips() {
    // 4 bpp tiles move byte pairs: 8x8 pixels is 4 bytes x 8 rows.
    let geo = ImageGeometry::new(64, 32, 4).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = GameCubeRemapper::new();

    let data = fixture(64 * 32 / 2);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn cmpr_blocks_round_trip() {
    // CMPR groups 2x2 DXT1 blocks per cache line.
    let geo = ImageGeometry::new(128, 128, 4).unwrap();
    let block = BlockShape::compressed(4, 4, 8);
    let remapper = GameCubeRemapper::new();

    let data = fixture(32 * 32 * 8);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn first_i8_tile_is_four_rows_of_eight() {
    let geo = ImageGeometry::new(16, 4, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = GameCubeRemapper::new();

    let data: Vec<u8> = (0..16 * 4).map(|i| i as u8).collect();
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    for row in 0..4 {
        assert_eq!(
            &tiled[row * 8..row * 8 + 8],
            &data[row * 16..row * 16 + 8],
            "row {} of the first tile",
            row
        );
    }
}

#[test]
fn unaligned_dimensions_round_trip() {
    // 20x10 at 8 bpp leaves partial 8x4 tiles on the right and bottom
    // edges; their in-image texels must all survive the round trip.
    let geo = ImageGeometry::new(20, 10, 8).unwrap();
    let block = BlockShape::pixels(1);
    let remapper = GameCubeRemapper::new();

    let data = fixture(20 * 10);
    let tiled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&tiled, &geo, &block).unwrap();
    assert_eq!(back, data);

    let mut a = data.clone();
    let mut b = tiled;
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn unsupported_depth_is_rejected() {
    let geo = ImageGeometry::new(16, 16, 24).unwrap();
    let block = BlockShape::pixels(3);
    let remapper = GameCubeRemapper::new();
    assert!(matches!(
        remapper.swizzle(&[0u8; 768], &geo, &block),
        Err(RemapError::UnsupportedParameter(_))
    ));
}
