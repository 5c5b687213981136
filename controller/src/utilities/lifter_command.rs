/// Named motion and selection commands for the lifter control box.
///
/// The control box decodes the four relay channels K1..K4 into one of
/// these commands. `up` and `down` are held states; everything else is
/// a pulsed button press, latched and released again after a short
/// delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifterCommand {
    Up,
    Down,
    Stop,
    Select1,
    Select2,
    Select3,
    Select4,
    SetUpperLimit,
    SetLowerLimit,
    ClearLimits,
}

impl LifterCommand {
    pub fn from_option(option: &str) -> Option<Self> {
        match option {
            "up" => Some(LifterCommand::Up),
            "down" => Some(LifterCommand::Down),
            "stop" => Some(LifterCommand::Stop),
            "1" => Some(LifterCommand::Select1),
            "2" => Some(LifterCommand::Select2),
            "3" => Some(LifterCommand::Select3),
            "4" => Some(LifterCommand::Select4),
            "set_upper_limit" => Some(LifterCommand::SetUpperLimit),
            "set_lower_limit" => Some(LifterCommand::SetLowerLimit),
            "clear_limits" => Some(LifterCommand::ClearLimits),
            _ => None,
        }
    }

    /// The (K1, K2, K3, K4) states this command latches onto the
    /// lifter relay channels.
    ///
    /// Control box decoding:
    /// ```text
    ///          K1  K2  K3  K4
    ///        +----------------+
    /// up     |  0   0   1   0 |
    /// down   |  0   0   0   1 |
    /// stop   |  0   0   0   0 |
    /// 1      |  0   0   1   1 |
    /// 2      |  0   1   0   0 |
    /// 3      |  0   1   0   1 |
    /// 4      |  0   1   0   1 |
    ///        +----------------+
    /// ```
    /// Selections 3 and 4 share a pattern on the current control box
    /// wiring; channel 4 has no decode line of its own yet.
    pub fn relay_pattern(self) -> [bool; 4] {
        match self {
            LifterCommand::Up => [false, false, true, false],
            LifterCommand::Down => [false, false, false, true],
            LifterCommand::Stop => [false, false, false, false],
            LifterCommand::Select1 => [false, false, true, true],
            LifterCommand::Select2 => [false, true, false, false],
            LifterCommand::Select3 => [false, true, false, true],
            LifterCommand::Select4 => [false, true, false, true],
            // TODO: encode the limit commands once the limit switches are
            // wired into the control box
            LifterCommand::SetUpperLimit => [false, false, false, false],
            LifterCommand::SetLowerLimit => [false, false, false, false],
            LifterCommand::ClearLimits => [false, false, false, false],
        }
    }

    /// Momentary commands are unlatched again after the pulse delay;
    /// `up` and `down` stay latched until the next command.
    pub fn is_momentary(self) -> bool {
        !matches!(self, LifterCommand::Up | LifterCommand::Down)
    }

    pub fn iter() -> impl Iterator<Item = LifterCommand> {
        [
            LifterCommand::Up,
            LifterCommand::Down,
            LifterCommand::Stop,
            LifterCommand::Select1,
            LifterCommand::Select2,
            LifterCommand::Select3,
            LifterCommand::Select4,
            LifterCommand::SetUpperLimit,
            LifterCommand::SetLowerLimit,
            LifterCommand::ClearLimits,
        ]
        .iter()
        .copied()
    }
}
