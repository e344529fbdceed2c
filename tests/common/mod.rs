#![allow(dead_code)]

use harvester::engine::geometry::{Direction, Position};
use harvester::engine::{GameMap, Player, Unit, UnitId};

/// Minimal wrap-around grid standing in for the engine's map.
#[derive(Debug, Clone)]
pub struct TestMap {
    pub width: i32,
    pub height: i32,
    halite: Vec<u32>,
    occupants: Vec<Option<UnitId>>,
    pub reservations: Vec<(Position, UnitId)>
}

impl TestMap {
    pub fn new(width: i32, height: i32) -> TestMap {
        let cells = (width * height) as usize;
        TestMap {
            width,
            height,
            halite: vec![0; cells],
            occupants: vec![None; cells],
            reservations: Vec::new()
        }
    }

    /// What the engine's refresh does: every unit sits in an occupied cell.
    pub fn for_player(width: i32, height: i32, player: &Player) -> TestMap {
        let mut map = TestMap::new(width, height);
        for unit in &player.units {
            map.occupy(unit.position, unit.id);
        }
        map
    }

    pub fn normalize(&self, position: Position) -> Position {
        Position::new(position.x.rem_euclid(self.width), position.y.rem_euclid(self.height))
    }

    fn index(&self, position: Position) -> usize {
        let p = self.normalize(position);
        (p.y * self.width + p.x) as usize
    }

    pub fn set_halite(&mut self, position: Position, amount: u32) {
        let i = self.index(position);
        self.halite[i] = amount;
    }

    pub fn occupy(&mut self, position: Position, unit: UnitId) {
        let i = self.index(position);
        self.occupants[i] = Some(unit);
    }

    pub fn occupant(&self, position: Position) -> Option<UnitId> {
        self.occupants[self.index(position)]
    }

    pub fn reservations_for(&self, unit: UnitId) -> Vec<Position> {
        self.reservations.iter()
            .filter(|&&(_, u)| u == unit)
            .map(|&(p, _)| p)
            .collect()
    }
}

impl GameMap for TestMap {
    fn distance(&self, source: Position, target: Position) -> u32 {
        let source = self.normalize(source);
        let target = self.normalize(target);
        let dx = (source.x - target.x).abs();
        let dy = (source.y - target.y).abs();
        (dx.min(self.width - dx) + dy.min(self.height - dy)) as u32
    }

    fn offset(&self, position: Position, direction: Direction) -> Position {
        self.normalize(position.directional_offset(direction))
    }

    fn halite_at(&self, position: Position) -> u32 {
        self.halite[self.index(position)]
    }

    fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    fn mark_unsafe(&mut self, position: Position, unit: UnitId) {
        let position = self.normalize(position);
        self.occupy(position, unit);
        self.reservations.push((position, unit));
    }

    fn naive_navigate(&mut self, unit: &Unit, target: Position) -> Direction {
        let current = self.distance(unit.position, target);
        for &direction in Direction::all_cardinals().iter() {
            let next = self.offset(unit.position, direction);
            if self.distance(next, target) < current && !self.is_occupied(next) {
                self.mark_unsafe(next, unit.id);
                return direction;
            }
        }
        Direction::Still
    }
}

pub fn unit(id: u32, x: i32, y: i32, cargo: u32) -> Unit {
    Unit::new(UnitId(id), Position::new(x, y), cargo)
}

pub fn player_with_units(home_base: Position, banked: u32, units: Vec<Unit>) -> Player {
    let mut player = Player::new(0, home_base, banked);
    player.units = units;
    player
}

pub fn surround(map: &mut TestMap, position: Position, blocker: UnitId) {
    for &direction in Direction::all_cardinals().iter() {
        let neighbour = map.offset(position, direction);
        map.occupy(neighbour, blocker);
    }
}
