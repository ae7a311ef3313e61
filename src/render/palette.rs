//! Style palette
//!
//! Twelve colours, one per style level. A host registers the style definitions
//! once and applies each run's annotation groups against them.

use super::annotation::PALETTE_SIZE;
use serde::Serialize;
use std::fmt;

const COLOURS: [&str; PALETTE_SIZE] = [
    "#ffaac4", "#ffafa2", "#ffb475", "#f1c000", "#b7d800", "#49e97d", "#00e6ca", "#00dffa",
    "#8ccfff", "#b1c5ff", "#d0b8ff", "#ff9ff7",
];

/// Share of the level colour in a connector, the rest being background.
pub const CONNECTOR_MIX: f32 = 0.4;

/// Background assumed when the host does not report its own.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x1e, 0x1e, 0x1e);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Blend `ratio` of `self` with `1 - ratio` of `other`.
    pub fn mix(self, other: Rgb, ratio: f32) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| (a as f32 * ratio + b as f32 * (1.0 - ratio)).round() as u8;
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rendering properties of one style level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDefinition {
    pub level: usize,
    /// Foreground of highlighted tokens.
    pub arm: Rgb,
    /// Colour of the vertical connector.
    pub connector: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    definitions: Vec<StyleDefinition>,
}

impl Palette {
    /// The standard palette over [`DEFAULT_BACKGROUND`].
    pub fn standard() -> Self {
        Self::for_background(DEFAULT_BACKGROUND)
    }

    pub fn for_background(background: Rgb) -> Self {
        let definitions = COLOURS
            .iter()
            .enumerate()
            .filter_map(|(level, hex)| {
                let arm = Rgb::parse_hex(hex)?;
                Some(StyleDefinition {
                    level,
                    arm,
                    connector: arm.mix(background, CONNECTOR_MIX),
                })
            })
            .collect();
        Palette { definitions }
    }

    /// Definition for `level`, wrapping levels past the palette size.
    pub fn style(&self, level: usize) -> &StyleDefinition {
        &self.definitions[level % self.definitions.len()]
    }

    pub fn definitions(&self) -> &[StyleDefinition] {
        &self.definitions
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
