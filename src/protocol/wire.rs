//! Byte-exact message formats.
//!
//! Every frame is `02 AA command length payload...` with little-endian
//! multi-byte fields. Commands with bit 7 set expect a reply frame that
//! echoes the request command code.

use crate::color::{Palette, PaletteId, rgb_from_u32};
use crate::effect::EffectId;
use crate::strip::Animation;

/// First preamble byte.
pub const SYNC1: u8 = 0x02;
/// Second preamble byte.
pub const SYNC2: u8 = 0xAA;

/// Bit 7 of a command code marks it as expecting a reply.
pub const REPLY_EXPECTED: u8 = 0x80;

/// Run an animation on a set of strips.
pub const CMD_ANIMATE: u8 = 0x00;
/// Set the global brightness ceiling.
pub const CMD_BRIGHTNESS: u8 = 0x01;
/// Return every strip to the idle animation.
pub const CMD_IDLE: u8 = 0x02;
/// Report the firmware version.
pub const CMD_VERSION: u8 = 0x80;
/// Report engine health.
pub const CMD_STATUS: u8 = 0x81;
/// Clear all channels and strips.
pub const CMD_RESET: u8 = 0x82;
/// Define one physical output channel.
pub const CMD_SET_CHANNEL: u8 = 0x83;
/// Define one logical strip as a list of segments.
pub const CMD_SET_STRIP: u8 = 0x84;
/// Load the compiled layout and start idling.
pub const CMD_INIT: u8 = 0x85;

pub const STATUS_OK: u32 = 0;
pub const STATUS_BAD_LENGTH: u32 = 1;
pub const STATUS_UNKNOWN_COMMAND: u32 = 2;
pub const STATUS_BAD_CHANNEL: u32 = 3;
pub const STATUS_NO_CAPACITY: u32 = 4;
pub const STATUS_BAD_STRIP: u32 = 5;
pub const STATUS_BAD_SEGMENTS: u32 = 6;

pub const VERSION_PROTOCOL: u8 = 1;
pub const VERSION_MAJOR: u8 = 1;
pub const VERSION_MINOR: u8 = 0;
pub const VERSION_ECO: u8 = 0;

pub(crate) fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

pub(crate) fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Payload size of an ANIMATE request.
pub const ANIMATE_LEN: usize = 26;

/// Top bit of the animation word selects reversed rendering.
pub const ANIMATE_REVERSE: u16 = 0x8000;

/// Set in the color word when its low 24 bits carry a direct RGB color
/// instead of a palette id.
pub const COLOR_DIRECT: u32 = 0x0100_0000;

/// Which logical strips a request addresses, one bit per strip index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripMask(pub [u32; 4]);

impl StripMask {
    /// Mask addressing every strip.
    pub const ALL: Self = Self([u32::MAX; 4]);

    #[must_use]
    pub fn contains(&self, strip: usize) -> bool {
        self.0
            .get(strip / 32)
            .is_some_and(|word| word & (1 << (strip % 32)) != 0)
    }
}

/// Decoded ANIMATE request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimateParams {
    pub animation: Animation,
    pub strips: StripMask,
}

impl AnimateParams {
    /// Decodes the 26-byte payload: animation and speed words, option word,
    /// color word, then the 128-bit strip mask.
    ///
    /// Unknown effect ids fall back to [`EffectId::Off`] and unknown
    /// palette ids to the RGB preset, so a newer host cannot wedge older
    /// firmware.
    #[must_use]
    pub fn decode(payload: &[u8]) -> Option<Self> {
        if payload.len() != ANIMATE_LEN {
            return None;
        }
        let anim = read_u16(payload, 0);
        let speed = read_u16(payload, 2);
        let option = read_u16(payload, 4);
        let color = read_u32(payload, 6);
        let strips = StripMask([
            read_u32(payload, 10),
            read_u32(payload, 14),
            read_u32(payload, 18),
            read_u32(payload, 22),
        ]);

        let effect = EffectId::from_raw(anim & !ANIMATE_REVERSE).unwrap_or(EffectId::Off);
        let palette = if color & COLOR_DIRECT == 0 {
            let id = u8::try_from(color).ok().and_then(PaletteId::from_raw);
            Palette::Preset(id.unwrap_or(PaletteId::Rgb))
        } else {
            Palette::Solid(rgb_from_u32(color & 0x00FF_FFFF))
        };

        Some(Self {
            animation: Animation {
                effect,
                speed,
                direction: anim & ANIMATE_REVERSE != 0,
                option,
                palette,
            },
            strips,
        })
    }
}

/// Physical-channel definition word.
///
/// Layout `0TTT PPPP 0000 0000 0000 LLLL LLLL LLLL`: channel kind in bits
/// 28-30, channel number in bits 24-27, pixel count in the low 12 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelWord {
    pub channel: u8,
    pub kind: u8,
    pub len: u16,
}

impl ChannelWord {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn decode(word: u32) -> Self {
        Self {
            channel: ((word >> 24) & 0xF) as u8,
            kind: ((word >> 28) & 0x7) as u8,
            len: (word & 0xFFF) as u16,
        }
    }

    #[must_use]
    pub const fn encode(channel: u8, kind: u8, len: u16) -> u32 {
        ((kind as u32) << 28) | ((channel as u32) << 24) | (len as u32 & 0xFFF)
    }
}

/// Segment flag: walk the covered pixels back to front.
pub const SEGMENT_REVERSE: u8 = 0x01;
/// Segment flag: last entry of the table, remaining words are ignored.
pub const SEGMENT_END: u8 = 0x04;

/// One segment of a logical strip definition.
///
/// Layout `0FFF PPPP SSSS SSSS SSSS CCCC CCCC CCCC`: flags in bits 28-30,
/// channel number in bits 24-27, first pixel in bits 12-23, pixel count in
/// the low 12 bits. A zero count claims the rest of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentWord {
    pub flags: u8,
    pub channel: u8,
    pub start: u16,
    pub len: u16,
}

impl SegmentWord {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn decode(word: u32) -> Self {
        Self {
            flags: ((word >> 28) & 0xF) as u8,
            channel: ((word >> 24) & 0xF) as u8,
            start: ((word >> 12) & 0xFFF) as u16,
            len: (word & 0xFFF) as u16,
        }
    }

    #[must_use]
    pub const fn encode(channel: u8, start: u16, len: u16, flags: u8) -> u32 {
        ((flags as u32) << 28)
            | ((channel as u32) << 24)
            | ((start as u32 & 0xFFF) << 12)
            | (len as u32 & 0xFFF)
    }

    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.flags & SEGMENT_REVERSE != 0
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.flags & SEGMENT_END != 0
    }
}

/// Longest segment table a SET_STRIP request can carry.
pub const STRIP_TABLE_WORDS: usize = 8;

/// Decoded SET_STRIP request: a strip index and its segment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripTableParams {
    pub index: u16,
    pub count: u16,
    words: [u32; STRIP_TABLE_WORDS],
}

impl StripTableParams {
    /// Decodes the strip index, segment count and `count` segment words.
    ///
    /// Hosts pad the table to its full wire size, so the payload may be
    /// longer than `count` words require, never shorter.
    #[must_use]
    pub fn decode(payload: &[u8]) -> Option<Self> {
        if payload.len() < 4 {
            return None;
        }
        let index = read_u16(payload, 0);
        let count = read_u16(payload, 2);
        let need = usize::from(count);
        if need > STRIP_TABLE_WORDS || payload.len() < 4 + need * 4 {
            return None;
        }
        let mut words = [0; STRIP_TABLE_WORDS];
        for (i, word) in words.iter_mut().enumerate().take(need) {
            *word = read_u32(payload, 4 + i * 4);
        }
        Some(Self {
            index,
            count,
            words,
        })
    }

    /// Segment word `i`, valid for `i < count`.
    #[must_use]
    pub fn segment(&self, i: usize) -> SegmentWord {
        SegmentWord::decode(self.words[i])
    }
}

/// Builds a four-byte status reply echoing `command`.
#[must_use]
pub fn status_frame(command: u8, status: u32) -> [u8; 8] {
    let [b0, b1, b2, b3] = status.to_le_bytes();
    [SYNC1, SYNC2, command, 4, b0, b1, b2, b3]
}

/// Builds the version reply echoing `command`.
#[must_use]
pub fn version_frame(command: u8) -> [u8; 8] {
    [
        SYNC1,
        SYNC2,
        command,
        4,
        VERSION_PROTOCOL,
        VERSION_MAJOR,
        VERSION_MINOR,
        VERSION_ECO,
    ]
}
