//! Color palettes for the animation catalog.
//!
//! A palette is an ordered, never-empty color list. Animations either walk it
//! by index or sample it fractionally; fractional sampling wraps around, so a
//! palette behaves like a color circle.

use libm::truncf;

use super::{Rgb, blend_colors, rgb_from_u32, unit_to_byte};

/// Longest preset table; also bounds per-palette particle state.
pub const MAX_PALETTE: usize = 16;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
const RGB_TABLE: [Rgb; 3] = hex_palette![0xFF0000, 0x00FF00, 0x0000FF];

#[allow(clippy::unreadable_literal)]
const RAINBOW_TABLE: [Rgb; 8] = hex_palette![
    0xFF0000, // Red
    0xAB5500, // Orange
    0xABAB00, // Yellow
    0x00FF00, // Green
    0x00AB55, // Aqua
    0x0000FF, // Blue
    0x5500AB, // Purple
    0xAB0055  // Pink
];

// Rainbow hues separated by black, for the barber-pole look.
#[allow(clippy::unreadable_literal)]
const RAINBOW_STRIPE_TABLE: [Rgb; 16] = hex_palette![
    0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000, 0x00AB55,
    0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000
];

#[allow(clippy::unreadable_literal)]
const PARTY_TABLE: [Rgb; 16] = hex_palette![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00, 0xAB5500,
    0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9
];

#[allow(clippy::unreadable_literal)]
const HEAT_TABLE: [Rgb; 4] = hex_palette![0x000000, 0xFF0000, 0xFFFF00, 0xFFFFCC];

// Black-body ramp used by the fire simulation.
#[allow(clippy::unreadable_literal)]
const FIRE_TABLE: [Rgb; 6] =
    hex_palette![0x000000, 0x220000, 0x880000, 0xFF0000, 0xFF6600, 0xFFCC00];

#[allow(clippy::unreadable_literal)]
const COOL_TABLE: [Rgb; 4] = hex_palette![0x000428, 0x004E92, 0x00C8FF, 0xB4F0FF];

#[allow(clippy::unreadable_literal)]
const WHITE_TABLE: [Rgb; 1] = hex_palette![0xFFFFFF];
#[allow(clippy::unreadable_literal)]
const RED_TABLE: [Rgb; 1] = hex_palette![0xFF0000];
#[allow(clippy::unreadable_literal)]
const GREEN_TABLE: [Rgb; 1] = hex_palette![0x00FF00];
#[allow(clippy::unreadable_literal)]
const BLUE_TABLE: [Rgb; 1] = hex_palette![0x0000FF];

const PAL_ID_RGB: u8 = 64;
const PAL_ID_RAINBOW: u8 = 65;
const PAL_ID_RAINBOW_STRIPE: u8 = 66;
const PAL_ID_PARTY: u8 = 67;
const PAL_ID_HEAT: u8 = 68;
const PAL_ID_FIRE: u8 = 69;
const PAL_ID_COOL: u8 = 70;
const PAL_ID_WHITE: u8 = 71;
const PAL_ID_RED: u8 = 80;
const PAL_ID_GREEN: u8 = 82;
const PAL_ID_BLUE: u8 = 84;

/// Named preset palettes addressable from the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaletteId {
    Rgb = PAL_ID_RGB,
    Rainbow = PAL_ID_RAINBOW,
    RainbowStripe = PAL_ID_RAINBOW_STRIPE,
    Party = PAL_ID_PARTY,
    Heat = PAL_ID_HEAT,
    Fire = PAL_ID_FIRE,
    Cool = PAL_ID_COOL,
    White = PAL_ID_WHITE,
    Red = PAL_ID_RED,
    Green = PAL_ID_GREEN,
    Blue = PAL_ID_BLUE,
}

impl PaletteId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PAL_ID_RGB => Self::Rgb,
            PAL_ID_RAINBOW => Self::Rainbow,
            PAL_ID_RAINBOW_STRIPE => Self::RainbowStripe,
            PAL_ID_PARTY => Self::Party,
            PAL_ID_HEAT => Self::Heat,
            PAL_ID_FIRE => Self::Fire,
            PAL_ID_COOL => Self::Cool,
            PAL_ID_WHITE => Self::White,
            PAL_ID_RED => Self::Red,
            PAL_ID_GREEN => Self::Green,
            PAL_ID_BLUE => Self::Blue,
            _ => return None,
        })
    }

    pub const fn colors(self) -> &'static [Rgb] {
        match self {
            Self::Rgb => &RGB_TABLE,
            Self::Rainbow => &RAINBOW_TABLE,
            Self::RainbowStripe => &RAINBOW_STRIPE_TABLE,
            Self::Party => &PARTY_TABLE,
            Self::Heat => &HEAT_TABLE,
            Self::Fire => &FIRE_TABLE,
            Self::Cool => &COOL_TABLE,
            Self::White => &WHITE_TABLE,
            Self::Red => &RED_TABLE,
            Self::Green => &GREEN_TABLE,
            Self::Blue => &BLUE_TABLE,
        }
    }
}

/// An ordered, never-empty color list.
///
/// `Solid` is what a raw-RGB animate request turns into: a synthesized
/// one-color palette, which keeps the non-empty invariant without storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Preset(PaletteId),
    Solid(Rgb),
}

impl Default for Palette {
    fn default() -> Self {
        Self::Preset(PaletteId::Rgb)
    }
}

impl Palette {
    /// Number of colors, always at least 1.
    pub const fn color_count(&self) -> usize {
        match self {
            Self::Preset(id) => id.colors().len(),
            Self::Solid(_) => 1,
        }
    }

    /// Indexed access, wrapping modulo the palette length.
    pub fn color(&self, index: usize) -> Rgb {
        match self {
            Self::Preset(id) => {
                let table = id.colors();
                table[index % table.len()]
            }
            Self::Solid(c) => *c,
        }
    }

    /// Cyclic fractional sampling.
    ///
    /// The integer part of `pos` picks a color (wrapping), the fractional
    /// part blends toward the next one (also wrapping). Negative positions
    /// clamp to 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&self, pos: f32) -> Rgb {
        if self.color_count() == 1 {
            return self.color(0);
        }
        let pos = pos.max(0.0);
        let whole = truncf(pos);
        let index = whole as usize;
        self.interpolated(index, pos - whole)
    }

    fn interpolated(&self, index: usize, frac: f32) -> Rgb {
        blend_colors(
            self.color(index),
            self.color(index + 1),
            unit_to_byte(frac),
        )
    }
}
