use crate::engine::geometry::Position;
use crate::error::PolicyError;

/// The base closest to `unit_position`. Only a strictly smaller distance
/// replaces the current best, so the earliest listed base wins ties.
pub fn nearest_base<F, D>(unit_position: Position, base_positions: &[Position], distance: F) -> Result<Position, PolicyError>
where F: Fn(Position, Position) -> D,
      D: PartialOrd {
    let (&first, rest) = base_positions.split_first()
        .ok_or(PolicyError::InvalidState("player has no bases"))?;

    let mut closest = first;
    let mut closest_distance = distance(unit_position, first);
    for &base in rest {
        let base_distance = distance(unit_position, base);
        if base_distance < closest_distance {
            closest = base;
            closest_distance = base_distance;
        }
    }
    Ok(closest)
}
