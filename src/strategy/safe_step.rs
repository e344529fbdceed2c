use crate::engine::geometry::Direction;
use crate::engine::{GameMap, Unit};

use arrayvec::ArrayVec;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a random cardinal step into an unoccupied cell and reserves that
/// cell for `unit`. Returns `None` without reserving anything when every
/// neighbour is taken.
pub fn safe_random_step<M: GameMap, R: Rng>(unit: &Unit, map: &mut M, rng: &mut R) -> Option<Direction> {
    let safe_choices: ArrayVec<Direction, 4> = Direction::all_cardinals().iter()
        .cloned()
        .filter(|&direction| !map.is_occupied(map.offset(unit.position, direction)))
        .collect();

    let chosen = *safe_choices.choose(rng)?;
    let target = map.offset(unit.position, chosen);
    map.mark_unsafe(target, unit.id);
    Some(chosen)
}
