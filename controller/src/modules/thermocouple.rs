/// ----- THERMOCOUPLE MODULE -----
/// Placeholder for the thermocouple readout.

use crate::utilities::error::CommandError;

pub fn run(options: &[String]) -> Result<(), CommandError> {
    if options.len() < 2 {
        return Err(CommandError::NoOptions);
    }
    let board: u8 = options[0].parse().map_err(|_| CommandError::InvalidOption)?;
    let channel: u8 = options[1].parse().map_err(|_| CommandError::InvalidOption)?;
    // TODO: shell out to the thermocouple DAQ utility once one is installed
    // on the stand image
    println!(
        "Thermocouple readout is not implemented (board {}, channel {}).",
        board, channel
    );
    Ok(())
}
