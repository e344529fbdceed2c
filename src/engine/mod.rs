pub mod command;
pub mod geometry;
pub mod settings;

use self::geometry::{Direction, Position};

use std::fmt;

pub type PlayerId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub position: Position,
    pub cargo: u32
}

impl Unit {
    pub fn new(id: UnitId, position: Position, cargo: u32) -> Unit {
        Unit { id, position, cargo }
    }

    pub fn has_cargo(&self) -> bool {
        self.cargo > 0
    }
}

/// The player's view of itself for one turn, as refreshed by the engine.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub home_base: Position,
    pub drop_points: Vec<Position>,
    pub banked: u32,
    pub units: Vec<Unit>
}

impl Player {
    pub fn new(id: PlayerId, home_base: Position, banked: u32) -> Player {
        Player {
            id,
            home_base,
            drop_points: Vec::new(),
            banked,
            units: Vec::new()
        }
    }

    /// Home base first, then auxiliary drop points in engine order.
    pub fn base_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(self.drop_points.len() + 1);
        positions.push(self.home_base);
        positions.extend_from_slice(&self.drop_points);
        positions
    }
}

/// Grid, distance and navigation queries for the current turn.
///
/// Implementations are refreshed by the engine at the start of every turn,
/// so any cell marked unsafe during planning only stays marked until the
/// next refresh. The policy only ever holds one `&mut` handle at a time,
/// which keeps reservations sequential within a turn.
pub trait GameMap {
    /// Wrap-aware distance between two cells.
    fn distance(&self, source: Position, target: Position) -> u32;
    /// The neighbouring cell in `direction`, wrapped onto the map.
    fn offset(&self, position: Position, direction: Direction) -> Position;
    fn halite_at(&self, position: Position) -> u32;
    fn is_occupied(&self, position: Position) -> bool;
    fn mark_unsafe(&mut self, position: Position, unit: UnitId);
    /// One collision-safe step of `unit` toward `target`, possibly `Still`.
    fn naive_navigate(&mut self, unit: &Unit, target: Position) -> Direction;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_base_is_listed_first() {
        let mut player = Player::new(0, Position::new(8, 8), 0);
        player.drop_points.push(Position::new(1, 1));
        player.drop_points.push(Position::new(2, 2));
        assert_eq!(player.base_positions(), vec![Position::new(8, 8), Position::new(1, 1), Position::new(2, 2)]);
    }
}
