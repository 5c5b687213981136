/// ----- MOSFETS MODULE -----
/// Generic mosfet access, the mosfet-card twin of the relays module.
/// The heater zone channels are locked against direct switching; they
/// are driven through the pwm command instead.

use boards_rust::cardio::shell::ShellCard;
use boards_rust::cardio::CardIo;

use crate::utilities::config;
use crate::utilities::error::CommandError;
use crate::utilities::interlock;
use crate::utilities::switch_action::SwitchAction;

pub fn run(options: &[String]) -> Result<(), CommandError> {
    let mut card = ShellCard::new(config::MOSFET_UTILITY, config::MOSFET_BOARD);
    match options {
        [] => report(&mut card),
        [_] => Err(CommandError::NoOptions),
        [channel, action, ..] => set_channel(channel, action, &mut card),
    }
}

pub fn report(card: &mut dyn CardIo) -> Result<(), CommandError> {
    println!("Mosfets current pos: {}", card.read_mask()?);
    Ok(())
}

pub fn set_channel(
    channel_option: &str,
    action_option: &str,
    card: &mut dyn CardIo,
) -> Result<(), CommandError> {
    let channel: u8 = channel_option
        .parse()
        .map_err(|_| CommandError::InvalidOption)?;
    interlock::guard_mosfet_write(channel)?;
    let action = SwitchAction::from_option(action_option).ok_or(CommandError::InvalidOption)?;
    card.write_channel(channel, action.as_channel_state())?;
    Ok(())
}
