//! Control plane: one owned struct holding every channel, strip and knob.
//!
//! The engine never touches hardware or transports itself. Pixels leave
//! through [`OutputDriver`], replies through [`ReplyPort`](crate::ReplyPort),
//! status text through [`StatusDisplay`], and time always arrives as an
//! argument, which keeps the whole control plane deterministic under test.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::channel::{ChannelKind, PhysicalChannel};
use crate::color::Rgb;
use crate::compose::scatter;
use crate::order::RenderOrder;
use crate::protocol::Receiver;
use crate::protocol::wire::{SegmentWord, StripMask};
use crate::rng::Rng;
use crate::segment::{MAX_SEGMENTS, Segment};
use crate::strip::{Animation, LogicalStrip};
use crate::{MAX_CHANNELS, MAX_STRIPS, OutputDriver, StatusDisplay};

/// One physical channel of the compiled default layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPlan {
    pub id: u8,
    pub kind: ChannelKind,
    pub len: u16,
}

/// One logical strip of the compiled default layout.
///
/// Plan segments use the same convention as the wire: a zero length claims
/// the rest of the channel from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripPlan {
    pub segments: &'static [Segment],
}

/// Compiled default configuration, applied at boot and by the INIT command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub channels: &'static [ChannelPlan],
    pub strips: &'static [StripPlan],
}

impl Layout {
    /// A layout with nothing in it; everything then arrives over the wire.
    pub const EMPTY: Self = Self {
        name: "unconfigured",
        channels: &[],
        strips: &[],
    };
}

/// Everything the engine needs at construction time.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub layout: Layout,
    /// Per-strip frame rate bound, frames per second.
    pub refresh_hz: u32,
    /// Initial brightness ceiling.
    pub brightness: Rgb,
    pub rng_seed: u64,
}

/// Rejected configuration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Channel id beyond the channel table.
    ChannelIndex,
    /// Channel kind bits name no known hardware kind.
    ChannelKind,
    /// Channel pixel count beyond this build's buffers.
    ChannelLen,
    /// Strip index beyond the strip table.
    StripIndex,
    /// Segment table empty or longer than a strip can hold.
    SegmentCount,
    /// Segment references an unregistered channel.
    SegmentChannel,
    /// Segment span falls outside its channel, or resolves to zero pixels.
    SegmentSpan,
}

/// Single owner of all rendering and configuration state.
///
/// `PX` bounds every pixel buffer, logical and physical alike. Dispatch and
/// rendering interleave only at frame boundaries inside [`Self::step`] and
/// [`Self::feed`]; nothing here locks.
pub struct Engine<const PX: usize> {
    channels: [Option<PhysicalChannel<PX>>; MAX_CHANNELS],
    strips: [LogicalStrip<PX>; MAX_STRIPS],
    order: RenderOrder,
    pub(crate) receiver: Receiver,
    ceiling: Rgb,
    rng: Rng,
    config: EngineConfig,
}

impl<const PX: usize> Engine<PX> {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let interval = Duration::from_millis(1000 / u64::from(config.refresh_hz.max(1)));
        let mut strips = [const { LogicalStrip::new() }; MAX_STRIPS];
        for strip in &mut strips {
            strip.set_refresh_interval(interval);
        }
        Self {
            channels: [const { None }; MAX_CHANNELS],
            strips,
            order: RenderOrder::new(),
            receiver: Receiver::new(),
            ceiling: config.brightness,
            rng: Rng::new(config.rng_seed),
            config,
        }
    }

    /// Loads the compiled layout: registers its channels, composes its
    /// strips, idles everything and banners the layout name. Also the INIT
    /// command.
    pub fn apply_layout(
        &mut self,
        now: Instant,
        display: &mut impl StatusDisplay,
    ) -> Result<(), ConfigError> {
        for plan in self.config.layout.channels {
            self.set_channel(plan.id, plan.kind, plan.len)?;
        }
        for (index, plan) in self.config.layout.strips.iter().enumerate() {
            self.compose_strip(index, plan.segments)?;
        }
        self.idle_all(now);
        display.banner(self.config.layout.name);
        Ok(())
    }

    /// Drops all channels and strips and restores boot defaults. The frame
    /// receiver resynchronizes from scratch.
    pub fn reset(&mut self, display: &mut impl StatusDisplay) {
        self.channels = [const { None }; MAX_CHANNELS];
        for strip in &mut self.strips {
            strip.rebuild(&[]);
        }
        self.order.clear();
        self.receiver.reset();
        self.ceiling = self.config.brightness;
        display.banner(self.config.layout.name);
    }

    /// One superloop iteration: advance animations in draw order, compose
    /// finished frames into the channel buffers, then flush every registered
    /// channel. Call this continuously.
    pub fn step(&mut self, now: Instant, output: &mut impl OutputDriver) {
        for id in self.order.draw_order() {
            let Some(strip) = self.strips.get_mut(usize::from(id)) else {
                continue;
            };
            if strip.tick(now, &mut self.rng) {
                scatter(strip, &mut self.channels, self.ceiling);
            }
        }
        for channel in self.channels.iter().flatten() {
            output.push(channel.id(), channel.kind(), channel.pixels());
        }
    }

    /// Registers (or replaces) physical channel `id` with a cleared buffer.
    ///
    /// Strips referencing the old channel keep their segments; composition
    /// drops writes that no longer fit.
    pub fn set_channel(&mut self, id: u8, kind: ChannelKind, len: u16) -> Result<(), ConfigError> {
        if usize::from(len) > PX {
            return Err(ConfigError::ChannelLen);
        }
        let slot = self
            .channels
            .get_mut(usize::from(id))
            .ok_or(ConfigError::ChannelIndex)?;
        *slot = Some(PhysicalChannel::new(id, kind, usize::from(len)));
        Ok(())
    }

    /// Redefines strip `index` from decoded segment words, stopping after a
    /// flagged end-of-table entry.
    ///
    /// The whole table is validated before anything changes, so a rejected
    /// request leaves the previous composition intact.
    pub fn set_virtual_strip(
        &mut self,
        index: u16,
        words: &[SegmentWord],
    ) -> Result<(), ConfigError> {
        let mut entries: Vec<Segment, MAX_SEGMENTS> = Vec::new();
        for word in words {
            let entry = Segment {
                channel: word.channel,
                start: word.start,
                len: word.len,
                reverse: word.reverse(),
            };
            if entries.push(entry).is_err() {
                return Err(ConfigError::SegmentCount);
            }
            if word.is_end() {
                break;
            }
        }
        self.compose_strip(usize::from(index), &entries)
    }

    /// Applies one animation to every selected strip, promoting each to the
    /// top of the render order. Selection bits with no composed strip behind
    /// them are ignored.
    #[allow(clippy::cast_possible_truncation)]
    pub fn animate(&mut self, animation: Animation, strips: StripMask, now: Instant) {
        for index in 0..MAX_STRIPS {
            if strips.contains(index) && !self.strips[index].is_empty() {
                self.strips[index].configure(animation, now);
                self.order.promote(index as u8);
            }
        }
    }

    /// Sets the global brightness ceiling applied at composition time.
    pub fn set_brightness(&mut self, ceiling: Rgb) {
        self.ceiling = ceiling;
    }

    /// Puts every composed strip on the dim-white idle animation.
    pub fn idle_all(&mut self, now: Instant) {
        self.animate(Animation::idle(), StripMask::ALL, now);
    }

    pub fn strip(&self, index: usize) -> Option<&LogicalStrip<PX>> {
        self.strips.get(index)
    }

    pub fn channel(&self, id: u8) -> Option<&PhysicalChannel<PX>> {
        self.channels.get(usize::from(id)).and_then(Option::as_ref)
    }

    pub fn brightness(&self) -> Rgb {
        self.ceiling
    }

    pub fn layout_name(&self) -> &'static str {
        self.config.layout.name
    }

    /// Validates and installs one segment table, then promotes the strip.
    #[allow(clippy::cast_possible_truncation)]
    fn compose_strip(&mut self, index: usize, entries: &[Segment]) -> Result<(), ConfigError> {
        if index >= MAX_STRIPS {
            return Err(ConfigError::StripIndex);
        }
        if entries.is_empty() || entries.len() > MAX_SEGMENTS {
            return Err(ConfigError::SegmentCount);
        }
        let mut resolved: Vec<Segment, MAX_SEGMENTS> = Vec::new();
        for entry in entries {
            let _ = resolved.push(self.resolve(entry)?);
        }
        self.strips[index].rebuild(&resolved);
        self.order.promote(index as u8);
        Ok(())
    }

    /// Pins a segment to concrete channel coordinates, expanding a zero
    /// length to the rest of the channel.
    fn resolve(&self, entry: &Segment) -> Result<Segment, ConfigError> {
        let channel = self
            .channels
            .get(usize::from(entry.channel))
            .and_then(Option::as_ref)
            .ok_or(ConfigError::SegmentChannel)?;
        let available = u16::try_from(channel.len()).unwrap_or(u16::MAX);
        let len = if entry.len == 0 {
            available.saturating_sub(entry.start)
        } else {
            entry.len
        };
        if len == 0 || entry.start.saturating_add(len) > available {
            return Err(ConfigError::SegmentSpan);
        }
        Ok(Segment {
            channel: entry.channel,
            start: entry.start,
            len,
            reverse: entry.reverse,
        })
    }
}
