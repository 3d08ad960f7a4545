//! Framed serial control protocol.
//!
//! Three small pieces: an interrupt-safe byte inbox, a resynchronizing
//! framer, and the byte-exact message formats. Dispatching completed frames
//! onto the engine lives with the engine itself.

mod inbox;
mod receiver;
pub mod wire;

pub use inbox::Inbox;
pub use receiver::{Frame, MAX_PAYLOAD, Receiver};
