use super::*;

#[test]
fn all_has_14_variants() {
    assert_eq!(Platform::all().len(), 14);
}

#[test]
fn canonical_names_round_trip() {
    for &platform in Platform::all() {
        let parsed: Platform = platform.short_name().parse().unwrap();
        assert_eq!(parsed, platform, "round-trip failed for {:?}", platform);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("gc", Platform::GameCube),
        ("nx", Platform::Switch),
        ("gx2", Platform::WiiU),
        ("ctr", Platform::N3ds),
        ("dc", Platform::Dreamcast),
        ("x360", Platform::Xbox360),
        ("psvita", Platform::Vita),
        ("playstation 5", Platform::Ps5),
    ];
    for (input, expected) in cases {
        let parsed: Platform = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn case_insensitive_parsing() {
    let parsed: Platform = "GameCube".parse().unwrap();
    assert_eq!(parsed, Platform::GameCube);
    let parsed: Platform = "SWITCH".parse().unwrap();
    assert_eq!(parsed, Platform::Switch);
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<Platform, _> = "neogeo".parse();
    assert!(result.is_err());
}

#[test]
fn short_name_is_first_alias() {
    for &platform in Platform::all() {
        assert_eq!(
            platform.short_name(),
            platform.aliases()[0],
            "short_name should be first alias for {:?}",
            platform,
        );
    }
}

#[test]
fn every_platform_describes_its_layout() {
    for &platform in Platform::all() {
        assert!(!platform.native_layout().is_empty());
    }
}
