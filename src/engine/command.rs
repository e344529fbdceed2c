use std::fmt;
use super::geometry::Direction;
use super::UnitId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(UnitId, Direction),
    Produce
}

impl Command {
    pub fn stay_still(unit: UnitId) -> Command {
        Command::Move(unit, Direction::Still)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Move(unit, direction) => write!(f, "m {} {}", unit, direction),
            Command::Produce => write!(f, "g"),
        }
    }
}
