//! Render-order bookkeeping for overlapping strips.

use heapless::Vec;

use crate::MAX_STRIPS;

/// Most-recently-configured stack of strip ids.
///
/// The front is the newest configuration. Drawing walks back to front, so
/// when two strips cover the same physical pixels, the one configured last
/// paints last and wins.
#[derive(Debug, Default)]
pub(crate) struct RenderOrder {
    stack: Vec<u8, MAX_STRIPS>,
}

impl RenderOrder {
    pub(crate) const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Move `strip` to the front, inserting it if absent.
    pub(crate) fn promote(&mut self, strip: u8) {
        if let Some(at) = self.stack.iter().position(|&id| id == strip) {
            self.stack.remove(at);
        }
        // capacity equals the strip table size, so this cannot fail
        let _ = self.stack.insert(0, strip);
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }

    /// Strip ids oldest first; the draw order.
    pub(crate) fn draw_order(&self) -> impl Iterator<Item = u8> + '_ {
        self.stack.iter().rev().copied()
    }
}
