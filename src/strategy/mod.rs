pub mod nearest_base;
pub mod safe_step;
pub mod turn_policy;
