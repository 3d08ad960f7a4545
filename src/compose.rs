//! Scatter pass: logical strip buffers out to physical channel buffers.

use crate::{
    MAX_CHANNELS,
    channel::PhysicalChannel,
    color::{Rgb, scale_channels},
    segment::locate,
    strip::LogicalStrip,
};

/// Write one strip's rendered frame into the channels it covers, applying
/// the global brightness ceiling per component.
///
/// The strip's direction flag reverses which logical index a buffer color
/// lands on; the effect's own sampling order is untouched. Indices that
/// resolve to a missing channel, or past the end of one that shrank since
/// composition, are dropped.
pub(crate) fn scatter<const PX: usize>(
    strip: &LogicalStrip<PX>,
    channels: &mut [Option<PhysicalChannel<PX>>; MAX_CHANNELS],
    ceiling: Rgb,
) {
    let len = strip.len();
    for (i, &color) in strip.pixels().iter().enumerate() {
        let logical = if strip.direction() { len - 1 - i } else { i };
        let Some((chan, phys)) = locate(strip.segments(), logical) else {
            continue;
        };
        let Some(channel) = channels.get_mut(usize::from(chan)).and_then(Option::as_mut) else {
            continue;
        };
        let out = channel.pixels_mut();
        if phys < out.len() {
            out[phys] = scale_channels(color, ceiling);
        }
    }
}
