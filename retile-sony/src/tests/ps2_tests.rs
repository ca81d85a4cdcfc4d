use super::*;

fn fixture(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect()
}

fn geometry(w: u32, h: u32, bpp: u32) -> ImageGeometry {
    ImageGeometry::new(w, h, bpp).unwrap()
}

#[test]
fn swizzle_8bit_256x128_round_trips() {
    // Reference scenario: 256x128 indexed image through the standard
    // PSMT8 layout and back.
    let geo = geometry(256, 128, 8);
    let block = BlockShape::pixels(1);
    let remapper = Ps2Remapper::default();

    let data = fixture(256 * 128);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    assert_ne!(swizzled, data);
    let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn swizzle_8bit_is_a_permutation() {
    let geo = geometry(64, 32, 8);
    let block = BlockShape::pixels(1);
    let remapper = Ps2Remapper::default();

    let data = fixture(64 * 32);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();

    let mut a = data.clone();
    let mut b = swizzled.clone();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn unswizzle_then_swizzle_8bit_recovers_data() {
    let geo = geometry(128, 64, 8);
    let block = BlockShape::pixels(1);
    let remapper = Ps2Remapper::default();

    let data = fixture(128 * 64);
    let linear = remapper.unswizzle(&data, &geo, &block).unwrap();
    let back = remapper.swizzle(&linear, &geo, &block).unwrap();
    assert_eq!(back, data);
}

#[test]
fn unaligned_8bit_round_trips() {
    // 200x100 is not a 16x16 block multiple in either dimension; the
    // compacted stream must still keep every texel.
    let geo = geometry(200, 100, 8);
    let block = BlockShape::pixels(1);
    let remapper = Ps2Remapper::default();

    let data = fixture(200 * 100);
    let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
    let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
    assert_eq!(back, data);

    let mut a = data.clone();
    let mut b = swizzled;
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn unaligned_4bit_variants_round_trip() {
    // 100x60 sits inside a single partial 128x128 page for the paged
    // layouts and off the 32x16 grid for the standard one.
    let geo = geometry(100, 60, 4);
    let block = BlockShape::pixels(1);
    let data = fixture(100 * 60 / 2);

    for variant in [
        Ps2SwizzleVariant::Standard,
        Ps2SwizzleVariant::EaType3,
        Ps2SwizzleVariant::Suba,
    ] {
        let remapper = Ps2Remapper::new(variant);
        let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
        let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
        assert_eq!(back, data, "round trip failed for {:?}", variant);
    }
}

#[test]
fn every_4bit_variant_round_trips() {
    let geo = geometry(256, 128, 4);
    let block = BlockShape::pixels(1);
    let data = fixture(256 * 128 / 2);

    for variant in [
        Ps2SwizzleVariant::Standard,
        Ps2SwizzleVariant::EaType3,
        Ps2SwizzleVariant::Suba,
    ] {
        let remapper = Ps2Remapper::new(variant);
        let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
        let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
        assert_eq!(back, data, "round trip failed for {:?}", variant);
    }
}

#[test]
fn the_4bit_variants_diverge_from_each_other() {
    // The three 4-bit layouts are distinct algorithms; on a full page
    // they must produce three different orderings of the same nibbles.
    let geo = geometry(128, 128, 4);
    let block = BlockShape::pixels(1);
    let data = fixture(128 * 128 / 2);

    let standard = Ps2Remapper::new(Ps2SwizzleVariant::Standard)
        .swizzle(&data, &geo, &block)
        .unwrap();
    let ea = Ps2Remapper::new(Ps2SwizzleVariant::EaType3)
        .swizzle(&data, &geo, &block)
        .unwrap();
    let suba = Ps2Remapper::new(Ps2SwizzleVariant::Suba)
        .swizzle(&data, &geo, &block)
        .unwrap();

    assert_ne!(standard, ea);
    assert_ne!(standard, suba);
    assert_ne!(ea, suba);
}

#[test]
fn variant_selector_round_trips() {
    for selector in 1..=3 {
        let variant = Ps2SwizzleVariant::from_selector(selector).unwrap();
        assert_eq!(variant.selector(), selector);
    }
    assert!(Ps2SwizzleVariant::from_selector(0).is_err());
    assert!(Ps2SwizzleVariant::from_selector(4).is_err());
}

#[test]
fn palette_swizzle_is_an_involution() {
    // 64 RGBA32 entries: two full groups.
    let data = fixture(64 * 4);
    let once = swizzle_palette(&data, 4).unwrap();
    assert_ne!(once, data);
    let twice = swizzle_palette(&once, 4).unwrap();
    assert_eq!(twice, data);
}

#[test]
fn palette_swizzle_crosses_the_middle_runs() {
    // One group of 32 single-byte-tagged entries: 0..8 and 24..32 stay,
    // 8..16 and 16..24 trade places.
    let data: Vec<u8> = (0..32u8).collect();
    let out = swizzle_palette(&data, 1).unwrap();
    let expected: Vec<u8> = (0..8).chain(16..24).chain(8..16).chain(24..32).collect();
    assert_eq!(out, expected);
}

#[test]
fn palette_partial_group_is_untouched() {
    let data = fixture(20 * 4);
    let out = swizzle_palette(&data, 4).unwrap();
    assert_eq!(out, data);
}

#[test]
fn wrong_buffer_length_is_rejected() {
    let geo = geometry(64, 64, 8);
    let block = BlockShape::pixels(1);
    let remapper = Ps2Remapper::default();

    let err = remapper.swizzle(&[0u8; 100], &geo, &block).unwrap_err();
    assert!(matches!(
        err,
        RemapError::BufferSizeMismatch {
            expected: 4096,
            actual: 100
        }
    ));
}

#[test]
fn unsupported_bpp_is_rejected() {
    let geo = geometry(64, 64, 32);
    let block = BlockShape::pixels(1);
    let remapper = Ps2Remapper::default();
    let data = vec![0u8; 64 * 64];

    let err = remapper.swizzle(&data, &geo, &block).unwrap_err();
    assert!(matches!(err, RemapError::UnsupportedParameter(_)));
}
