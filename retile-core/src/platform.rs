use serde::{Deserialize, Serialize};

/// Platform/console identifiers for all supported texture layouts.
///
/// This enum centralizes console identity — short names, display names,
/// manufacturer, and the native memory layout — in one place, so callers
/// select a remapper by platform value instead of ad-hoc string
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    // Nintendo
    N64,
    GameCube,
    Wii,
    N3ds,
    WiiU,
    Switch,

    // Sony
    Ps2,
    Psp,
    Vita,
    Ps3,
    Ps4,
    Ps5,

    // Sega
    Dreamcast,

    // Microsoft
    Xbox360,
}

/// All platform variants in registration order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::N64,
    Platform::GameCube,
    Platform::Wii,
    Platform::N3ds,
    Platform::WiiU,
    Platform::Switch,
    Platform::Ps2,
    Platform::Psp,
    Platform::Vita,
    Platform::Ps3,
    Platform::Ps4,
    Platform::Ps5,
    Platform::Dreamcast,
    Platform::Xbox360,
];

impl Platform {
    /// Canonical short name used for CLI arguments and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::N64 => "n64",
            Self::GameCube => "gamecube",
            Self::Wii => "wii",
            Self::N3ds => "3ds",
            Self::WiiU => "wiiu",
            Self::Switch => "switch",
            Self::Ps2 => "ps2",
            Self::Psp => "psp",
            Self::Vita => "vita",
            Self::Ps3 => "ps3",
            Self::Ps4 => "ps4",
            Self::Ps5 => "ps5",
            Self::Dreamcast => "dreamcast",
            Self::Xbox360 => "xbox360",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::N64 => "Nintendo 64",
            Self::GameCube => "Nintendo GameCube",
            Self::Wii => "Nintendo Wii",
            Self::N3ds => "Nintendo 3DS",
            Self::WiiU => "Nintendo Wii U",
            Self::Switch => "Nintendo Switch",
            Self::Ps2 => "Sony PlayStation 2",
            Self::Psp => "Sony PlayStation Portable",
            Self::Vita => "Sony PlayStation Vita",
            Self::Ps3 => "Sony PlayStation 3",
            Self::Ps4 => "Sony PlayStation 4",
            Self::Ps5 => "Sony PlayStation 5",
            Self::Dreamcast => "Sega Dreamcast",
            Self::Xbox360 => "Microsoft Xbox 360",
        }
    }

    /// Console manufacturer.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::N64
            | Self::GameCube
            | Self::Wii
            | Self::N3ds
            | Self::WiiU
            | Self::Switch => "Nintendo",

            Self::Ps2 | Self::Psp | Self::Vita | Self::Ps3 | Self::Ps4 | Self::Ps5 => "Sony",

            Self::Dreamcast => "Sega",

            Self::Xbox360 => "Microsoft",
        }
    }

    /// One-line description of the platform's native texture layout.
    pub fn native_layout(&self) -> &'static str {
        match self {
            Self::N64 => "row interleave (odd rows word-swapped in TMEM)",
            Self::GameCube | Self::Wii => "block tiling (tile size derived from bpp)",
            Self::N3ds => "8x8 tiles, Morton order within each tile",
            Self::WiiU => "GX2 bank/pipe macro/micro tiling",
            Self::Switch => "block-linear GOB tiling (512-byte GOBs)",
            Self::Ps2 => "GS page/block/column addressing",
            Self::Psp => "16-byte x 8-row block tiling",
            Self::Vita => "rotated Morton (Z-order) tiling",
            Self::Ps3 => "Morton (Z-order) tiling",
            Self::Ps4 => "Morton order within 8x8 sub-tiles",
            Self::Ps5 => "Morton sub-tiles grouped into super-tiles",
            Self::Dreamcast => "rotated Morton (\"twiddled\") tiling",
            Self::Xbox360 => "X-tiled macro/micro addressing, big-endian",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::N64 => &["n64", "nintendo 64", "nintendo64"],
            Self::GameCube => &["gamecube", "gcn", "gc", "ngc"],
            Self::Wii => &["wii"],
            Self::N3ds => &["3ds", "nintendo 3ds", "n3ds", "ctr"],
            Self::WiiU => &["wiiu", "wii u", "gx2"],
            Self::Switch => &["switch", "nx", "tegra"],
            Self::Ps2 => &["ps2", "playstation2", "playstation 2"],
            Self::Psp => &["psp", "playstation portable"],
            Self::Vita => &["vita", "psvita", "ps vita", "playstation vita"],
            Self::Ps3 => &["ps3", "playstation3", "playstation 3"],
            Self::Ps4 => &["ps4", "playstation4", "playstation 4"],
            Self::Ps5 => &["ps5", "playstation5", "playstation 5"],
            Self::Dreamcast => &["dreamcast", "dc"],
            Self::Xbox360 => &["xbox360", "xbox 360", "x360"],
        }
    }

    /// All 14 platform variants.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &platform in ALL_PLATFORMS {
            if platform.short_name() == lower {
                return Ok(platform);
            }
            for alias in platform.aliases() {
                if *alias == lower {
                    return Ok(platform);
                }
            }
        }
        Err(PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
