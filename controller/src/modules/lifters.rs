/// ----- LIFTERS MODULE -----
/// This module encodes the named lifter commands onto the four
/// reserved relay channels: read the card, rewrite the lifter bits,
/// latch, and for momentary commands unlatch again after the pulse
/// delay.

use boards_rust::cardio::shell::ShellCard;
use boards_rust::cardio::CardIo;

use crate::utilities::config;
use crate::utilities::error::CommandError;
use crate::utilities::lifter_command::LifterCommand;

pub fn run(options: &[String]) -> Result<(), CommandError> {
    let option = options.first().ok_or(CommandError::NoOptions)?;
    let command = LifterCommand::from_option(option).ok_or(CommandError::InvalidOption)?;
    let mut card = ShellCard::new(config::RELAY_UTILITY, config::RELAY_BOARD);
    apply(command, &mut card)
}

/// Latches `command`'s relay pattern onto the lifter channels, leaving
/// every other relay on the card untouched.
///
/// The read-modify-write is not transactional: a second writer hitting
/// the relay card between the read and the write gets clobbered. The
/// stand assumes a single operator and a single controller process.
pub fn apply(command: LifterCommand, card: &mut dyn CardIo) -> Result<(), CommandError> {
    let pattern = command.relay_pattern();

    let mut mask = clear_lifter_channels(card.read_mask()?);
    for (on, channel) in pattern.iter().zip(config::LIFTER_RELAY_CHANNELS) {
        if *on {
            mask |= 1 << (channel - 1);
        }
    }
    println!("sending relay mask {}", mask);
    card.write_mask(mask)?;

    if command.is_momentary() {
        card.sleep(config::MOMENTARY_DELAY);
        let mask = clear_lifter_channels(mask);
        println!("sending unlatch mask {}", mask);
        card.write_mask(mask)?;
    }
    Ok(())
}

fn clear_lifter_channels(mask: u16) -> u16 {
    let mut mask = mask;
    for channel in config::LIFTER_RELAY_CHANNELS {
        mask &= !(1 << (channel - 1));
    }
    mask
}

#[cfg(test)]
mod tests {
    use boards_rust::cardio::fake::{CardOp, FakeCard};

    use super::*;

    #[test]
    fn continuous_commands_latch_once_and_stay() {
        let mut card = FakeCard::new(0xA5A5);
        apply(LifterCommand::Up, &mut card).unwrap();
        // up drives K3 only, on top of the non-lifter bits 0xA5A0
        assert_eq!(
            card.ops,
            vec![CardOp::Read, CardOp::WriteMask(0xA5A4)]
        );
    }

    #[test]
    fn momentary_commands_latch_then_unlatch_after_the_delay() {
        let mut card = FakeCard::new(0xA5A5);
        apply(LifterCommand::Select1, &mut card).unwrap();
        // selection 1 drives K3 and K4
        assert_eq!(
            card.ops,
            vec![
                CardOp::Read,
                CardOp::WriteMask(0xA5AC),
                CardOp::Sleep(config::MOMENTARY_DELAY),
                CardOp::WriteMask(0xA5A0),
            ]
        );
    }

    #[test]
    fn stop_pulses_an_all_clear_pattern() {
        let mut card = FakeCard::new(0x000F);
        apply(LifterCommand::Stop, &mut card).unwrap();
        assert_eq!(
            card.ops,
            vec![
                CardOp::Read,
                CardOp::WriteMask(0x0000),
                CardOp::Sleep(config::MOMENTARY_DELAY),
                CardOp::WriteMask(0x0000),
            ]
        );
    }

    #[test]
    fn bits_outside_the_lifter_channels_are_preserved() {
        for command in LifterCommand::iter() {
            let before = 0xFFF0;
            let mut card = FakeCard::new(before);
            apply(command, &mut card).unwrap();
            assert_eq!(card.mask & !0xF, before & !0xF, "{:?}", command);
        }
    }

    #[test]
    fn a_failed_read_aborts_before_any_write() {
        let mut card = FakeCard::with_failing_reads();
        let result = apply(LifterCommand::Down, &mut card);
        assert!(matches!(result, Err(CommandError::Backend(_))));
        assert!(card.ops.is_empty());
    }

    #[test]
    fn unknown_keywords_touch_no_hardware() {
        let result = run(&["sideways".to_string()]);
        assert!(matches!(result, Err(CommandError::InvalidOption)));
    }

    #[test]
    fn missing_keyword_is_reported_as_no_options() {
        let result = run(&[]);
        assert!(matches!(result, Err(CommandError::NoOptions)));
    }
}
