/// ----- PWM MODULE -----
/// Software pwm on a mosfet channel: time-slice the channel on and off
/// with proportioned sleeps for a fixed number of cycles. Blocking and
/// single-threaded, like everything else on the stand.

use boards_rust::cardio::shell::ShellCard;
use boards_rust::cardio::CardIo;

use crate::utilities::config;
use crate::utilities::error::CommandError;
use crate::utilities::interlock;

pub fn run(options: &[String]) -> Result<(), CommandError> {
    if options.len() < 2 {
        return Err(CommandError::NoOptions);
    }
    let percentage: f64 = options[0].parse().map_err(|_| CommandError::InvalidOption)?;
    let channel: u8 = options[1].parse().map_err(|_| CommandError::InvalidOption)?;
    let mut card = ShellCard::new(config::MOSFET_UTILITY, config::MOSFET_BOARD);
    drive(percentage, channel, &mut card)
}

/// Drives `channel` at `percentage` duty for the full run
/// (iterations times the cycle period, one second at the stand
/// defaults). Percentages at or past the ends of [0, 100] degenerate
/// to holding the channel off or on for the whole run.
///
/// The run blocks until done and cannot be cancelled; killing the
/// process mid-cycle can leave the channel energized, since the
/// trailing off write only happens on a completed run.
pub fn drive(percentage: f64, channel: u8, card: &mut dyn CardIo) -> Result<(), CommandError> {
    interlock::guard_pwm_channel(channel)?;

    let full_run = config::PWM_CYCLE_TIME * config::PWM_ITERATIONS;
    if percentage > 0.0 && percentage < 100.0 {
        let on_time = config::PWM_CYCLE_TIME.mul_f64(percentage / 100.0);
        let off_time = config::PWM_CYCLE_TIME - on_time;
        for _ in 0..config::PWM_ITERATIONS {
            card.write_channel(channel, true)?;
            card.sleep(on_time);
            card.write_channel(channel, false)?;
            card.sleep(off_time);
        }
    } else if percentage >= 100.0 {
        card.write_channel(channel, true)?;
        card.sleep(full_run);
    } else {
        // nothing to switch; hold the off state for the full run
        card.sleep(full_run);
    }

    // the channel must never stay energized after a completed run
    card.write_channel(channel, false)?;
    Ok(())
}
