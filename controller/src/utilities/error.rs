use boards_rust::cardio::CardError;
use thiserror::Error;

pub const EXIT_ERR: i32 = -1;
pub const EXIT_ERR_CMD_NOT_FOUND: i32 = -2;
pub const EXIT_ERR_NO_OPTIONS: i32 = -3;
pub const EXIT_ERR_INVALID_OPTION: i32 = -4;
pub const EXIT_ERR_CHANNEL_LOCKED: i32 = -5;
pub const EXIT_ERR_BACKEND: i32 = -6;

/// Everything a command can fail with. Each kind keeps its own process
/// exit code so scripts driving the controller can tell them apart.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command not found.")]
    CommandNotFound,
    #[error("No options detected for command.")]
    NoOptions,
    #[error("Invalid option.")]
    InvalidOption,
    #[error("Relay locked, used for lifter comms.")]
    RelayLockedForLifters,
    #[error("Mosfet locked, used for heater control.")]
    MosfetLockedForHeaters,
    #[error("Card backend failed: {0}")]
    Backend(#[from] CardError),
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::CommandNotFound => EXIT_ERR_CMD_NOT_FOUND,
            CommandError::NoOptions => EXIT_ERR_NO_OPTIONS,
            CommandError::InvalidOption => EXIT_ERR_INVALID_OPTION,
            CommandError::RelayLockedForLifters => EXIT_ERR_CHANNEL_LOCKED,
            CommandError::MosfetLockedForHeaters => EXIT_ERR_CHANNEL_LOCKED,
            CommandError::Backend(_) => EXIT_ERR_BACKEND,
        }
    }
}
