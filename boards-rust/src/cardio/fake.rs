use std::io;
use std::time::Duration;

use super::{CardError, CardIo};

/// Every operation a [`FakeCard`] has been asked to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOp {
    Read,
    WriteMask(u16),
    WriteChannel(u8, bool),
    Sleep(Duration),
}

/// In-memory stand-in for a card, for tests. Holds the bitmask a real
/// card would hold and records every request instead of shelling out;
/// `sleep` records the requested duration without blocking.
pub struct FakeCard {
    pub mask: u16,
    pub ops: Vec<CardOp>,
    pub fail_reads: bool,
}

impl FakeCard {
    pub fn new(mask: u16) -> Self {
        FakeCard {
            mask,
            ops: Vec::new(),
            fail_reads: false,
        }
    }

    pub fn with_failing_reads() -> Self {
        FakeCard {
            mask: 0,
            ops: Vec::new(),
            fail_reads: true,
        }
    }
}

impl CardIo for FakeCard {
    fn read_mask(&mut self) -> Result<u16, CardError> {
        if self.fail_reads {
            return Err(CardError::Spawn {
                utility: "fake",
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        self.ops.push(CardOp::Read);
        Ok(self.mask)
    }

    fn write_mask(&mut self, mask: u16) -> Result<(), CardError> {
        self.mask = mask;
        self.ops.push(CardOp::WriteMask(mask));
        Ok(())
    }

    fn write_channel(&mut self, channel: u8, on: bool) -> Result<(), CardError> {
        let bit = 1 << (channel - 1);
        if on {
            self.mask |= bit;
        } else {
            self.mask &= !bit;
        }
        self.ops.push(CardOp::WriteChannel(channel, on));
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        self.ops.push(CardOp::Sleep(duration));
    }
}
