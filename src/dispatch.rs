//! Wire command dispatch onto the engine.

use embassy_time::Instant;
use heapless::Vec;
use log::{debug, warn};

use crate::channel::ChannelKind;
use crate::color::rgb_from_u32;
use crate::engine::{ConfigError, Engine};
use crate::protocol::Frame;
use crate::protocol::wire::{
    self, AnimateParams, ChannelWord, STRIP_TABLE_WORDS, SegmentWord, StripTableParams,
};
use crate::{ReplyPort, StatusDisplay};

fn config_status(error: ConfigError) -> u32 {
    match error {
        ConfigError::ChannelIndex | ConfigError::ChannelKind => wire::STATUS_BAD_CHANNEL,
        ConfigError::ChannelLen => wire::STATUS_NO_CAPACITY,
        ConfigError::StripIndex => wire::STATUS_BAD_STRIP,
        ConfigError::SegmentCount | ConfigError::SegmentChannel | ConfigError::SegmentSpan => {
            wire::STATUS_BAD_SEGMENTS
        }
    }
}

impl<const PX: usize> Engine<PX> {
    /// Pushes received bytes through the frame parser and dispatches every
    /// frame that completes, replies included, before returning.
    pub fn feed(
        &mut self,
        bytes: &[u8],
        now: Instant,
        port: &mut impl ReplyPort,
        display: &mut impl StatusDisplay,
    ) {
        for &byte in bytes {
            if let Some(frame) = self.receiver.push(byte) {
                self.handle(&frame, now, port, display);
            }
        }
    }

    fn handle(
        &mut self,
        frame: &Frame,
        now: Instant,
        port: &mut impl ReplyPort,
        display: &mut impl StatusDisplay,
    ) {
        debug!("cmd {:#04x} len {}", frame.command, frame.payload.len());
        match frame.command {
            wire::CMD_ANIMATE => {
                let Some(params) = AnimateParams::decode(&frame.payload) else {
                    warn!("animate payload malformed");
                    return;
                };
                self.animate(params.animation, params.strips, now);
            }
            wire::CMD_BRIGHTNESS => {
                if frame.payload.len() != 4 {
                    warn!("brightness payload malformed");
                    return;
                }
                let word = wire::read_u32(&frame.payload, 0);
                self.set_brightness(rgb_from_u32(word & 0x00FF_FFFF));
            }
            wire::CMD_IDLE => self.idle_all(now),
            wire::CMD_VERSION => port.send(&wire::version_frame(frame.command)),
            wire::CMD_STATUS => port.send(&wire::status_frame(frame.command, wire::STATUS_OK)),
            wire::CMD_RESET => {
                self.reset(display);
                port.send(&wire::status_frame(frame.command, wire::STATUS_OK));
            }
            wire::CMD_SET_CHANNEL => {
                let status = self.handle_set_channel(&frame.payload);
                if status != wire::STATUS_OK {
                    warn!("channel rejected, status {status}");
                    display.banner("bad channel");
                }
                port.send(&wire::status_frame(frame.command, status));
            }
            wire::CMD_SET_STRIP => {
                let status = self.handle_set_strip(&frame.payload);
                if status != wire::STATUS_OK {
                    warn!("strip rejected, status {status}");
                }
                port.send(&wire::status_frame(frame.command, status));
            }
            wire::CMD_INIT => {
                let status = match self.apply_layout(now, display) {
                    Ok(()) => wire::STATUS_OK,
                    Err(error) => {
                        warn!("layout rejected: {error:?}");
                        config_status(error)
                    }
                };
                port.send(&wire::status_frame(frame.command, status));
            }
            _ => {
                warn!("unknown cmd {:#04x}", frame.command);
                if frame.command & wire::REPLY_EXPECTED != 0 {
                    port.send(&wire::status_frame(
                        frame.command,
                        wire::STATUS_UNKNOWN_COMMAND,
                    ));
                }
            }
        }
    }

    fn handle_set_channel(&mut self, payload: &[u8]) -> u32 {
        if payload.len() != 4 {
            return wire::STATUS_BAD_LENGTH;
        }
        let word = ChannelWord::decode(wire::read_u32(payload, 0));
        let Some(kind) = ChannelKind::from_raw(word.kind) else {
            return config_status(ConfigError::ChannelKind);
        };
        match self.set_channel(word.channel, kind, word.len) {
            Ok(()) => wire::STATUS_OK,
            Err(error) => config_status(error),
        }
    }

    fn handle_set_strip(&mut self, payload: &[u8]) -> u32 {
        let Some(params) = StripTableParams::decode(payload) else {
            return wire::STATUS_BAD_LENGTH;
        };
        let mut words: Vec<SegmentWord, STRIP_TABLE_WORDS> = Vec::new();
        for i in 0..usize::from(params.count) {
            let _ = words.push(params.segment(i));
        }
        match self.set_virtual_strip(params.index, &words) {
            Ok(()) => wire::STATUS_OK,
            Err(error) => config_status(error),
        }
    }
}
