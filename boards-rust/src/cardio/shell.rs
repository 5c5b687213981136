use std::process::{Command, Output};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use super::{CardError, CardIo};

/// A card reached through its command line utility, one synchronous
/// subprocess per request: `<utility> <board> read` answers with the
/// bitmask on stdout, `<utility> <board> write ...` answers with
/// nothing but its exit status.
pub struct ShellCard {
    utility: &'static str,
    board: u8,
}

impl ShellCard {
    pub fn new(utility: &'static str, board: u8) -> Self {
        ShellCard { utility, board }
    }

    fn request(&self, args: &[String]) -> Result<Output, CardError> {
        debug!("running {} {} {}", self.utility, self.board, args.join(" "));
        let output = Command::new(self.utility)
            .arg(self.board.to_string())
            .args(args)
            .output()
            .map_err(|source| CardError::Spawn {
                utility: self.utility,
                source,
            })?;
        if !output.status.success() {
            return Err(CardError::Failed {
                utility: self.utility,
                status: output.status,
            });
        }
        Ok(output)
    }
}

impl CardIo for ShellCard {
    fn read_mask(&mut self) -> Result<u16, CardError> {
        let output = self.request(&["read".to_string()])?;
        let response = String::from_utf8_lossy(&output.stdout);
        match response.trim().parse() {
            Ok(mask) => Ok(mask),
            Err(_) => {
                warn!("bad read response from {}: {:?}", self.utility, response);
                Err(CardError::BadResponse {
                    utility: self.utility,
                    raw: response.into_owned(),
                })
            }
        }
    }

    fn write_mask(&mut self, mask: u16) -> Result<(), CardError> {
        self.request(&["write".to_string(), mask.to_string()])?;
        Ok(())
    }

    fn write_channel(&mut self, channel: u8, on: bool) -> Result<(), CardError> {
        let state = if on { "on" } else { "off" };
        self.request(&["write".to_string(), channel.to_string(), state.to_string()])?;
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_utility_reports_spawn_error() {
        let mut card = ShellCard::new("no-such-card-utility", 0);
        match card.read_mask() {
            Err(CardError::Spawn { utility, .. }) => assert_eq!(utility, "no-such-card-utility"),
            other => panic!("expected spawn error, got {:?}", other.map(|_| ())),
        }
    }
}
