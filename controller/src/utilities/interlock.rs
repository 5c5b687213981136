use crate::utilities::config;
use crate::utilities::error::CommandError;

/// Rejects direct writes to the relay channels reserved for lifter
/// comms. Pure predicate, touches no hardware.
pub fn guard_relay_write(channel: u8) -> Result<(), CommandError> {
    if config::LIFTER_RELAY_CHANNELS.contains(&channel) {
        return Err(CommandError::RelayLockedForLifters);
    }
    Ok(())
}

/// Rejects direct writes to the mosfet channels reserved for the
/// heater zones.
pub fn guard_mosfet_write(channel: u8) -> Result<(), CommandError> {
    if config::HEATER_MOSFET_CHANNELS.contains(&channel) {
        return Err(CommandError::MosfetLockedForHeaters);
    }
    Ok(())
}

/// The pwm driver is how the designated heater channel is legitimately
/// driven, so that one channel is exempt from the heater lock.
pub fn guard_pwm_channel(channel: u8) -> Result<(), CommandError> {
    if channel == config::HEATER_PWM_CHANNEL {
        return Ok(());
    }
    guard_mosfet_write(channel)
}
