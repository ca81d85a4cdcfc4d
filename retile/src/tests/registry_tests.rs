use super::*;

#[test]
fn every_platform_has_a_remapper() {
    for &platform in Platform::all() {
        let remapper = remapper_for(platform);
        assert_eq!(remapper.platform(), platform, "{}", platform);
    }
}

#[test]
fn registry_remappers_round_trip() {
    // A geometry aligned for every layout: 256x256 at 32 bpp.
    let geo = ImageGeometry::new(256, 256, 32).unwrap();
    let block = BlockShape::pixels(4);
    let data: Vec<u8> = (0..256 * 256 * 4).map(|i| ((i * 13 + 7) & 0xFF) as u8).collect();

    for platform in [
        Platform::GameCube,
        Platform::Wii,
        Platform::N3ds,
        Platform::WiiU,
        Platform::Switch,
        Platform::Psp,
        Platform::Vita,
        Platform::Ps3,
        Platform::Ps4,
        Platform::Ps5,
        Platform::Dreamcast,
        Platform::Xbox360,
    ] {
        let remapper = remapper_for(platform);
        let swizzled = remapper.swizzle(&data, &geo, &block).unwrap();
        let back = remapper.unswizzle(&swizzled, &geo, &block).unwrap();
        assert_eq!(back, data, "{}", platform);
    }
}

#[test]
fn parsed_names_reach_the_registry() {
    let platform: Platform = "ps2".parse().unwrap();
    let remapper = remapper_for(platform);
    assert_eq!(remapper.platform_name(), "Sony PlayStation 2");
}
