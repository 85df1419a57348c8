use pacman_minimax::{AdversarialGame, IllegalAction};
use rand::{seq::SliceRandom, thread_rng, Rng};
use tracing::info;

use crate::{
    evaluation::reflex_evaluation,
    game::{Direction, GameState, PACMAN_INDEX},
    BoxedAgent, PacmanAI, PacmanFactory,
};

/// Looks one move ahead and never thinks about what the ghosts will do
pub struct ReflexAgent {
    game: GameState,
}

impl ReflexAgent {
    pub fn new(game: GameState) -> Self {
        Self { game }
    }

    /// Every legal move for Pacman with its [reflex_evaluation], in legal action order
    pub fn scored_actions(&self) -> Result<Vec<(Direction, f64)>, IllegalAction> {
        self.game
            .legal_actions(PACMAN_INDEX)
            .into_iter()
            .map(|action| Ok((action, reflex_evaluation(&self.game, action)?)))
            .collect()
    }

    /// Pick uniformly between all the moves tied for the best score
    pub fn choose_action_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Direction, IllegalAction> {
        let scored = self.scored_actions()?;
        let best_score = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best_actions: Vec<Direction> = scored
            .iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| *action)
            .collect();

        Ok(best_actions
            .choose(rng)
            .copied()
            .unwrap_or(Direction::Stop))
    }
}

impl PacmanAI for ReflexAgent {
    fn choose_action(&self) -> anyhow::Result<Direction> {
        let action = self.choose_action_with_rng(&mut thread_rng())?;
        info!(%action, "reflex agent moved");

        Ok(action)
    }
}

pub struct ReflexAgentFactory;

impl PacmanFactory for ReflexAgentFactory {
    fn name(&self) -> String {
        "reflex".to_owned()
    }

    fn from_game(&self, game: GameState) -> BoxedAgent {
        Box::new(ReflexAgent::new(game))
    }
}
