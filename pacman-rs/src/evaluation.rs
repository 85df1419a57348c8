//! Ways of turning a game state into a single number from Pacman's point of view

use std::{fmt::Display, str::FromStr};

use pacman_minimax::{
    multi_agent::{Scorable, Score},
    AdversarialGame, IllegalAction,
};
use thiserror::Error;

use crate::{
    game::{Direction, PACMAN_INDEX},
    types::{FoodGettableGame, GhostGettableGame, PacmanPositionGettableGame, ScoreGettableGame},
};

/// Ghosts at least this far away are ignored
pub const GHOST_ALERT_DISTANCE: i32 = 5;

/// Sum of `1 / distance` to every remaining food, skipping food under Pacman
pub fn food_attraction<T>(game: &T) -> f64
where
    T: PacmanPositionGettableGame + FoodGettableGame,
{
    let pacman = game.get_pacman_position();

    game.get_all_food()
        .iter()
        .map(|food| pacman.manhattan_distance(food))
        .filter(|distance| *distance != 0)
        .map(|distance| 1.0 / distance as f64)
        .sum()
}

/// Sum of `1 / distance` to every ghost closer than [GHOST_ALERT_DISTANCE]
///
/// A ghost on top of Pacman is skipped, the game has already been decided by then.
pub fn ghost_repulsion<T>(game: &T) -> f64
where
    T: PacmanPositionGettableGame + GhostGettableGame,
{
    let pacman = game.get_pacman_position();

    game.get_ghost_positions()
        .iter()
        .map(|ghost| pacman.manhattan_distance(ghost))
        .filter(|distance| *distance > 0 && *distance < GHOST_ALERT_DISTANCE)
        .map(|distance| 1.0 / distance as f64)
        .sum()
}

/// The raw game score
pub fn score_evaluation<T: ScoreGettableGame>(game: &T) -> f64 {
    game.get_score() as f64
}

/// Score, pulled towards food and pushed away from nearby ghosts
pub fn reflex_state_score<T>(game: &T) -> f64
where
    T: PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame + ScoreGettableGame,
{
    score_evaluation(game) + food_attraction(game) - ghost_repulsion(game)
}

/// Score Pacman playing `action` by looking at the state it leads to
pub fn reflex_evaluation<T>(game: &T, action: Direction) -> Result<f64, IllegalAction>
where
    T: AdversarialGame<Action = Direction>
        + PacmanPositionGettableGame
        + FoodGettableGame
        + GhostGettableGame
        + ScoreGettableGame,
{
    let successor = game.generate_successor(PACMAN_INDEX, &action)?;

    Ok(reflex_state_score(&successor))
}

/// [reflex_state_score] plus one point for every move a ghost has left being scared
pub fn better_evaluation<T>(game: &T) -> f64
where
    T: PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame + ScoreGettableGame,
{
    let scared: f64 = game
        .get_scared_timers()
        .iter()
        .map(|timer| *timer as f64)
        .sum();

    reflex_state_score(game) + scared
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown evaluation function `{0}`, expected `scoreEvaluationFunction` or `betterEvaluationFunction`"
)]
pub struct UnknownEvaluationFunction(pub String);

/// The state evaluators search agents can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvaluationFunction {
    /// [score_evaluation]
    #[default]
    Score,
    /// [better_evaluation]
    Better,
}

impl EvaluationFunction {
    pub fn name(&self) -> &'static str {
        match self {
            EvaluationFunction::Score => "scoreEvaluationFunction",
            EvaluationFunction::Better => "betterEvaluationFunction",
        }
    }

    pub fn evaluate<T>(&self, game: &T) -> f64
    where
        T: PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame + ScoreGettableGame,
    {
        match self {
            EvaluationFunction::Score => score_evaluation(game),
            EvaluationFunction::Better => better_evaluation(game),
        }
    }
}

impl Display for EvaluationFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EvaluationFunction {
    type Err = UnknownEvaluationFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scoreEvaluationFunction" | "score" => Ok(EvaluationFunction::Score),
            "betterEvaluationFunction" | "better" => Ok(EvaluationFunction::Better),
            _ => Err(UnknownEvaluationFunction(s.to_owned())),
        }
    }
}

impl<T> Scorable<T> for EvaluationFunction
where
    T: PacmanPositionGettableGame + FoodGettableGame + GhostGettableGame + ScoreGettableGame,
{
    fn score(&self, game: &T) -> Score {
        self.evaluate(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Position, WireGame};

    /// Just the features, so positions that can't come out of a real game can be scored
    struct Snapshot {
        pacman: Position,
        food: Vec<Position>,
        ghosts: Vec<Position>,
        scared_timers: Vec<u32>,
        score: i64,
    }

    impl Snapshot {
        fn at(x: i32, y: i32) -> Self {
            Self {
                pacman: Position::new(x, y),
                food: vec![],
                ghosts: vec![],
                scared_timers: vec![],
                score: 0,
            }
        }
    }

    impl PacmanPositionGettableGame for Snapshot {
        fn get_pacman_position(&self) -> Position {
            self.pacman
        }
    }

    impl FoodGettableGame for Snapshot {
        fn get_all_food(&self) -> Vec<Position> {
            self.food.clone()
        }
    }

    impl GhostGettableGame for Snapshot {
        fn get_ghost_positions(&self) -> Vec<Position> {
            self.ghosts.clone()
        }

        fn get_scared_timers(&self) -> Vec<u32> {
            self.scared_timers.clone()
        }
    }

    impl ScoreGettableGame for Snapshot {
        fn get_score(&self) -> i64 {
            self.score
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_food_and_ghosts_on_pacman_are_skipped() {
        let snapshot = Snapshot {
            food: vec![Position::new(2, 2), Position::new(4, 2)],
            ghosts: vec![Position::new(2, 2)],
            ..Snapshot::at(2, 2)
        };

        let attraction = food_attraction(&snapshot);
        let repulsion = ghost_repulsion(&snapshot);

        assert!(attraction.is_finite());
        assert_close(attraction, 0.5);
        assert_close(repulsion, 0.0);
        assert_close(reflex_state_score(&snapshot), 0.5);
        assert_close(better_evaluation(&snapshot), 0.5);
    }

    #[test]
    fn test_ghost_alert_distance() {
        let snapshot = Snapshot {
            ghosts: vec![Position::new(4, 0), Position::new(0, 5), Position::new(1, 0)],
            ..Snapshot::at(0, 0)
        };

        assert_close(ghost_repulsion(&snapshot), 0.25 + 1.0);
    }

    #[test]
    fn test_score_evaluation_is_the_raw_score() {
        let snapshot = Snapshot {
            score: -42,
            food: vec![Position::new(1, 0)],
            ..Snapshot::at(0, 0)
        };

        assert_close(score_evaluation(&snapshot), -42.0);
        assert_close(EvaluationFunction::Score.score(&snapshot), -42.0);
    }

    #[test]
    fn test_better_evaluation_rewards_scared_ghosts() {
        let game: GameState =
            serde_json::from_str::<WireGame>(include_str!("../fixtures/scared_ghosts.json"))
                .unwrap()
                .try_into()
                .unwrap();

        let expected_food = 1.0 / 3.0 + 1.0 / 2.0 + 1.0 / 8.0;
        assert_close(reflex_state_score(&game), 120.0 + expected_food);
        assert_close(better_evaluation(&game), 120.0 + expected_food + 15.0);
        assert_close(
            EvaluationFunction::Better.score(&game),
            better_evaluation(&game),
        );
    }

    #[test]
    fn test_huge_scared_timers_do_not_overflow() {
        let snapshot = Snapshot {
            scared_timers: vec![u32::MAX, 1],
            ..Snapshot::at(0, 0)
        };
        assert_close(better_evaluation(&snapshot), u32::MAX as f64 + 1.0);

        let game: GameState = serde_json::from_str::<WireGame>(
            r#"{ "layout": ["%%%%%%", "%PGG.%", "%%%%%%"], "scared_timers": [4294967295, 1] }"#,
        )
        .unwrap()
        .try_into()
        .unwrap();
        let without_timers = reflex_state_score(&game);

        assert_close(
            better_evaluation(&game),
            without_timers + u32::MAX as f64 + 1.0,
        );
    }

    #[test]
    fn test_reflex_evaluation_scores_the_successor() {
        let game: GameState =
            serde_json::from_str::<WireGame>(include_str!("../fixtures/ghost_adjacent.json"))
                .unwrap()
                .try_into()
                .unwrap();

        // Stepping away costs a point, food is 1 and 3 away, the ghost is 2 away
        assert_close(
            reflex_evaluation(&game, Direction::West).unwrap(),
            -1.0 + 1.0 + 1.0 / 3.0 - 0.5,
        );
        // Running into the ghost ends the game
        assert_close(
            reflex_evaluation(&game, Direction::East).unwrap(),
            -501.0 + 1.0 / 3.0 + 1.0,
        );
        assert_eq!(
            reflex_evaluation(&game, Direction::North),
            Err(IllegalAction::new(PACMAN_INDEX, &Direction::North))
        );
    }

    #[test]
    fn test_evaluation_function_names() {
        for (name, expected) in [
            ("scoreEvaluationFunction", EvaluationFunction::Score),
            ("score", EvaluationFunction::Score),
            ("betterEvaluationFunction", EvaluationFunction::Better),
            ("better", EvaluationFunction::Better),
        ] {
            assert_eq!(name.parse::<EvaluationFunction>(), Ok(expected));
        }
        assert_eq!(
            "bestEvaluationFunction".parse::<EvaluationFunction>(),
            Err(UnknownEvaluationFunction(
                "bestEvaluationFunction".to_owned()
            ))
        );
        assert_eq!(EvaluationFunction::default(), EvaluationFunction::Score);
        assert_eq!(
            EvaluationFunction::Better.to_string(),
            "betterEvaluationFunction"
        );
    }
}
