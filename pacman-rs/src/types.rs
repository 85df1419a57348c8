//! Feature accessors the evaluation functions are written against
//!
//! Splitting these up keeps the evaluators generic, anything that can report where Pacman, the
//! food and the ghosts are can be scored.

use crate::game::Position;

pub trait PacmanPositionGettableGame {
    fn get_pacman_position(&self) -> Position;
}

pub trait FoodGettableGame {
    fn get_all_food(&self) -> Vec<Position>;
}

pub trait GhostGettableGame {
    fn get_ghost_positions(&self) -> Vec<Position>;

    /// How many more moves each ghost stays scared, in the same order as the positions
    fn get_scared_timers(&self) -> Vec<u32>;
}

pub trait ScoreGettableGame {
    fn get_score(&self) -> i64;
}
