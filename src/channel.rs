//! Physical output channels.
//!
//! A channel is one hardware output run: an id the wire addresses it by, a
//! kind telling the driver how to serialize it, and a pixel buffer the
//! composition layer scatters into. The engine owns the buffers; drivers
//! only ever see them as slices at flush time.

use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// Hardware behind a channel, from the 3-bit wire type field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelKind {
    /// Addressable pixel run.
    PixelStrip = 0,
    /// Single-color fixture; only the first pixel is meaningful.
    Lamp = 1,
}

impl ChannelKind {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::PixelStrip),
            1 => Some(Self::Lamp),
            _ => None,
        }
    }
}

/// One registered hardware output and its composed pixel state.
#[derive(Debug, Clone)]
pub struct PhysicalChannel<const PX: usize> {
    id: u8,
    kind: ChannelKind,
    pixels: Vec<Rgb, PX>,
}

impl<const PX: usize> PhysicalChannel<PX> {
    /// Register a channel of `len` pixels, all black. `len` is capped at
    /// the buffer capacity.
    pub fn new(id: u8, kind: ChannelKind, len: usize) -> Self {
        let mut pixels = Vec::new();
        let _ = pixels.resize(len.min(PX), BLACK);
        Self { id, kind, pixels }
    }

    pub const fn id(&self) -> u8 {
        self.id
    }

    pub const fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Blank the buffer without resizing.
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }
}
