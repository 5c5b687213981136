pub mod lifters;
pub mod mosfets;
pub mod pwm;
pub mod relays;
pub mod thermocouple;
