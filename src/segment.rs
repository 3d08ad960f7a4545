//! Segment tables mapping logical pixel indexes onto physical channels.
//!
//! A logical strip is a concatenation of segments. Each segment names a
//! physical channel, a starting offset on it, a pixel count and a reversal
//! flag, so one strip can span several channels, cover part of one, or run
//! against the wiring direction.

/// Segments a single logical strip may concatenate.
pub const MAX_SEGMENTS: usize = 8;

/// One contiguous physical run belonging to a logical strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Physical channel id.
    pub channel: u8,
    /// First pixel on the channel.
    pub start: u16,
    /// Pixels covered.
    pub len: u16,
    /// Walk the physical run backwards.
    pub reverse: bool,
}

/// Map a logical pixel index to `(channel, physical index)`.
///
/// Walks the segment list in order; reversal flips the index within its
/// segment before the channel offset is applied. Indexes past the end of the
/// table resolve to `None`.
pub fn locate(segments: &[Segment], index: usize) -> Option<(u8, usize)> {
    let mut idx = index;
    for seg in segments {
        let len = usize::from(seg.len);
        if idx < len {
            let local = if seg.reverse { len - 1 - idx } else { idx };
            return Some((seg.channel, usize::from(seg.start) + local));
        }
        idx -= len;
    }
    None
}

/// Total pixel count of a segment list.
pub fn total_len(segments: &[Segment]) -> usize {
    segments.iter().map(|seg| usize::from(seg.len)).sum()
}
