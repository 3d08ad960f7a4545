mod palette;

pub use palette::{MAX_PALETTE, Palette, PaletteId};
use smart_leds::RGB8;

use crate::math8::{blend8, scale8};

pub type Rgb = RGB8;

/// All channels off.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full output.
pub const WHITE: Rgb = Rgb {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

/// Scale each channel by an 8-bit fraction (255 = identity, 0 = black).
#[inline]
pub const fn scale_color(c: Rgb, k: u8) -> Rgb {
    Rgb {
        r: scale8(c.r, k),
        g: scale8(c.g, k),
        b: scale8(c.b, k),
    }
}

/// Channel-wise scale of one color by another.
///
/// This is how the brightness ceiling is applied during composition: each
/// component of `ceiling` caps the matching component of `c`.
#[inline]
pub const fn scale_channels(c: Rgb, ceiling: Rgb) -> Rgb {
    Rgb {
        r: scale8(c.r, ceiling.r),
        g: scale8(c.g, ceiling.g),
        b: scale8(c.b, ceiling.b),
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub const fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Per-channel saturating add.
#[inline]
pub const fn sum_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Clamp a unit-interval float into an 8-bit fraction.
///
/// The bridge between float animation math and integer color math.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_byte(k: f32) -> u8 {
    (k.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
