use heapless::Vec;

use super::wire::{SYNC1, SYNC2};

/// Longest payload any command carries (the virtual-strip table).
pub const MAX_PAYLOAD: usize = 36;

/// One complete framed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: u8,
    pub payload: Vec<u8, MAX_PAYLOAD>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RxState {
    Sync1,
    Sync2,
    Command,
    Length,
    Payload,
}

/// Resynchronizing frame parser.
///
/// Every message starts with the two-byte preamble `02 AA`, followed by a
/// command byte, a payload length byte, and that many payload bytes. The
/// parser hunts for the preamble byte by byte, so it recovers from garbage,
/// truncated frames, and mid-stream attachment as soon as a clean preamble
/// arrives.
///
/// A declared length past [`MAX_PAYLOAD`] is clamped to it; the frame
/// dispatches after the clamped count and the excess bytes fall through the
/// preamble hunt as inter-frame noise. Command handlers validate payload
/// sizes themselves.
#[derive(Debug)]
pub struct Receiver {
    state: RxState,
    command: u8,
    remaining: usize,
    payload: Vec<u8, MAX_PAYLOAD>,
}

impl Receiver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RxState::Sync1,
            command: 0,
            remaining: 0,
            payload: Vec::new(),
        }
    }

    /// Drops any partial frame and resumes hunting for the preamble.
    pub fn reset(&mut self) {
        self.state = RxState::Sync1;
        self.remaining = 0;
        self.payload.clear();
    }

    /// Advances the parser by one byte, yielding a frame when it completes
    /// one.
    pub fn push(&mut self, byte: u8) -> Option<Frame> {
        match self.state {
            RxState::Sync1 => {
                if byte == SYNC1 {
                    self.state = RxState::Sync2;
                }
                None
            }
            RxState::Sync2 => {
                self.state = if byte == SYNC2 {
                    RxState::Command
                } else {
                    RxState::Sync1
                };
                None
            }
            RxState::Command => {
                self.command = byte;
                self.state = RxState::Length;
                None
            }
            RxState::Length => {
                self.remaining = usize::from(byte).min(MAX_PAYLOAD);
                self.payload.clear();
                if self.remaining == 0 {
                    self.state = RxState::Sync1;
                    return Some(self.complete());
                }
                self.state = RxState::Payload;
                None
            }
            RxState::Payload => {
                let _ = self.payload.push(byte);
                self.remaining -= 1;
                if self.remaining > 0 {
                    return None;
                }
                self.state = RxState::Sync1;
                Some(self.complete())
            }
        }
    }

    fn complete(&mut self) -> Frame {
        Frame {
            command: self.command,
            payload: core::mem::take(&mut self.payload),
        }
    }
}

impl Default for Receiver {
    fn default() -> Self {
        Self::new()
    }
}
