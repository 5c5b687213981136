use std::time::Duration;

// card utilities and board addresses
pub const RELAY_UTILITY: &str = "16relind";
pub const MOSFET_UTILITY: &str = "8mosind";
pub const RELAY_BOARD: u8 = 0;
pub const MOSFET_BOARD: u8 = 0;

// lifter comm pins on the relay card
pub const LIFTER_RELAY_K1: u8 = 1;
pub const LIFTER_RELAY_K2: u8 = 2;
pub const LIFTER_RELAY_K3: u8 = 3;
pub const LIFTER_RELAY_K4: u8 = 4;
pub const LIFTER_RELAY_CHANNELS: [u8; 4] = [
    LIFTER_RELAY_K1,
    LIFTER_RELAY_K2,
    LIFTER_RELAY_K3,
    LIFTER_RELAY_K4,
];

// heater zones on the mosfet card; zone 1 doubles as the pwm-driven heater
pub const HEATER_MOSFET_CHANNELS: [u8; 2] = [1, 2];
pub const HEATER_PWM_CHANNEL: u8 = 1;

pub const MOMENTARY_DELAY: Duration = Duration::from_millis(100);
pub const PWM_CYCLE_TIME: Duration = Duration::from_millis(100);
pub const PWM_ITERATIONS: u32 = 10;
