#![no_std]

pub mod channel;
pub mod color;
pub mod effect;
pub mod engine;
pub mod math8;
pub mod protocol;
pub mod rng;
pub mod segment;
pub mod step;
pub mod strip;

mod compose;
mod dispatch;
mod order;

pub use channel::{ChannelKind, PhysicalChannel};
pub use color::{Palette, PaletteId, Rgb};
pub use effect::EffectId;
pub use engine::{ChannelPlan, ConfigError, Engine, EngineConfig, Layout, StripPlan};
pub use protocol::{Frame, Inbox, Receiver};
pub use segment::Segment;
pub use strip::{Animation, LogicalStrip};

pub use embassy_time::{Duration, Instant};

/// Number of addressable physical channels.
///
/// The channel id field on the wire is 4 bits wide, so this is also the
/// protocol ceiling.
pub const MAX_CHANNELS: usize = 16;

/// Number of logical strips this build holds.
///
/// The wire can address up to 128 strips; selection bits at or above this
/// capacity simply never match, and strip definitions beyond it are rejected
/// with a status reply.
pub const MAX_STRIPS: usize = 32;

/// Abstract LED channel driver trait
///
/// Implement this trait to flush composed frames to real hardware.
/// The engine is generic over this trait and never touches pins itself.
pub trait OutputDriver {
    /// Write one channel's pixel buffer to the hardware.
    fn push(&mut self, channel: u8, kind: ChannelKind, pixels: &[Rgb]);
}

/// Transport for protocol replies.
///
/// `frame` is a complete reply including the sync preamble.
pub trait ReplyPort {
    fn send(&mut self, frame: &[u8]);
}

/// Sink for short status text, typically a small OLED or serial console.
pub trait StatusDisplay {
    fn banner(&mut self, text: &str);
}
