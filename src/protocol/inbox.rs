use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Bounded byte queue between a receive interrupt and the superloop.
///
/// The interrupt handler pushes raw bytes as they arrive; the main loop
/// drains them into a [`Receiver`](super::Receiver) at its own pace. When
/// the queue overflows, new bytes are dropped and the framer resynchronizes
/// on the next preamble once draining resumes.
pub struct Inbox<const N: usize> {
    queue: Mutex<RefCell<Deque<u8, N>>>,
}

impl<const N: usize> Inbox<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queues one received byte. Returns `false` when the queue is full and
    /// the byte was dropped.
    pub fn push(&self, byte: u8) -> bool {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().push_back(byte).is_ok())
    }

    /// Feeds all currently queued bytes to `f`, oldest first.
    ///
    /// Each byte is taken under its own critical section, so the receive
    /// interrupt is never blocked for longer than a single dequeue.
    pub fn drain(&self, mut f: impl FnMut(u8)) {
        while let Some(byte) =
            critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
        {
            f(byte);
        }
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().is_empty())
    }
}

impl<const N: usize> Default for Inbox<N> {
    fn default() -> Self {
        Self::new()
    }
}
