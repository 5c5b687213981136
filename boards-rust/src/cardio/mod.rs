/// ----- CARD I/O MODULE -----
/// This module wraps the relay and mosfet card utilities behind a
/// common trait, so the command implementations can be driven against
/// an in-memory card in tests and the real utilities in production.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

pub mod fake;
pub mod shell;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("failed to run {utility}: {source}")]
    Spawn {
        utility: &'static str,
        source: io::Error,
    },
    #[error("{utility} exited with {status}")]
    Failed {
        utility: &'static str,
        status: ExitStatus,
    },
    #[error("unreadable response from {utility}: {raw:?}")]
    BadResponse {
        utility: &'static str,
        raw: String,
    },
}

/// One relay or mosfet card, addressed as a whole.
///
/// Channel numbers are 1-based, matching the silkscreen on the cards;
/// bit `n - 1` of a mask is channel `n`. `sleep` lives on the trait so
/// timed write sequences can be exercised without blocking the tests.
pub trait CardIo {
    /// Reads the current on/off bitmask of every channel on the card.
    fn read_mask(&mut self) -> Result<u16, CardError>;

    /// Replaces the state of every channel on the card in one write.
    fn write_mask(&mut self, mask: u16) -> Result<(), CardError>;

    /// Switches a single channel without touching the others.
    fn write_channel(&mut self, channel: u8, on: bool) -> Result<(), CardError>;

    fn sleep(&mut self, duration: Duration);
}
