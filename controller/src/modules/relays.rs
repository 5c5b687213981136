/// ----- RELAYS MODULE -----
/// Generic relay access: report the card's bitmask, or switch a single
/// channel. The channels carrying lifter comms are locked and can only
/// be reached through the lifters command.

use boards_rust::cardio::shell::ShellCard;
use boards_rust::cardio::CardIo;

use crate::utilities::config;
use crate::utilities::error::CommandError;
use crate::utilities::interlock;
use crate::utilities::switch_action::SwitchAction;

pub fn run(options: &[String]) -> Result<(), CommandError> {
    let mut card = ShellCard::new(config::RELAY_UTILITY, config::RELAY_BOARD);
    match options {
        [] => report(&mut card),
        [_] => Err(CommandError::NoOptions),
        [channel, action, ..] => set_channel(channel, action, &mut card),
    }
}

pub fn report(card: &mut dyn CardIo) -> Result<(), CommandError> {
    println!("Relays current pos: {}", card.read_mask()?);
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
    interlock::guard_relay_write(channel)?;
    let action = SwitchAction::from_option(action_option).ok_or(CommandError::InvalidOption)?;
    card.write_channel(channel, action.as_channel_state())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use boards_rust::cardio::fake::{CardOp, FakeCard};

    use super::*;

    #[test]
    fn reporting_reads_the_mask_once() {
        let mut card = FakeCard::new(42);
        report(&mut card).unwrap();
        assert_eq!(card.ops, vec![CardOp::Read]);
    }

    #[test]
    fn switching_a_free_channel_issues_one_write() {
        let mut card = FakeCard::new(0);
        set_channel("7", "on", &mut card).unwrap();
        assert_eq!(card.ops, vec![CardOp::WriteChannel(7, true)]);
    }

    #[test]
    fn lifter_channels_are_rejected_before_any_card_call() {
        for channel in config::LIFTER_RELAY_CHANNELS {
            let mut card = FakeCard::new(0);
            let result = set_channel(&channel.to_string(), "off", &mut card);
            assert!(matches!(result, Err(CommandError::RelayLockedForLifters)));
            assert!(card.ops.is_empty());
        }
    }

    #[test]
    fn garbage_channel_or_action_is_an_invalid_option() {
        let mut card = FakeCard::new(0);
        assert!(matches!(
            set_channel("seven", "on", &mut card),
            Err(CommandError::InvalidOption)
        ));
        assert!(matches!(
            set_channel("7", "toggle", &mut card),
            Err(CommandError::InvalidOption)
        ));
        assert!(card.ops.is_empty());
    }
}
