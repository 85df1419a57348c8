use dashmap::DashMap;
use pacman_minimax::multi_agent::{
    CachedScore, MinMaxReturn, MinimaxAgent, Score, SearchError, SearchMode, SearchOptions,
};
use tracing::{info, warn};

use crate::{
    config::ResolvedConfig,
    evaluation::EvaluationFunction,
    game::{Direction, GameState},
    BoxedAgent, PacmanAI, PacmanFactory,
};

/// Pacman driven by a depth limited game tree search
///
/// Scores are cached per agent, so a state reached through several move orders is only evaluated
/// once.
pub struct SearchAgent {
    game: GameState,
    config: ResolvedConfig,
    mode: SearchMode,
    cache: DashMap<GameState, Score>,
}

impl SearchAgent {
    pub fn new(game: GameState, config: ResolvedConfig, mode: SearchMode) -> Self {
        Self {
            game,
            config,
            mode,
            cache: DashMap::new(),
        }
    }

    fn agent_name(&self) -> &'static str {
        match self.mode {
            SearchMode::Minimax => "minimax",
            SearchMode::AlphaBeta => "alphabeta",
            SearchMode::Expectimax => "expectimax",
        }
    }

    fn minimax_agent(
        &self,
    ) -> MinimaxAgent<GameState, CachedScore<'_, EvaluationFunction, GameState>> {
        MinimaxAgent::new(
            self.game.clone(),
            CachedScore::new(self.config.evaluation_function, &self.cache),
            self.agent_name(),
            SearchOptions {
                depth: self.config.depth,
                mode: self.mode,
            },
        )
    }

    /// The full tree behind the next move, handy for debugging with [MinMaxReturn::to_text_tree]
    pub fn search_tree(&self) -> Result<MinMaxReturn<Direction>, SearchError> {
        self.minimax_agent().search_tree()
    }

    /// Number of distinct states evaluated by this agent so far
    pub fn cached_states(&self) -> usize {
        self.cache.len()
    }
}

impl PacmanAI for SearchAgent {
    fn choose_action(&self) -> anyhow::Result<Direction> {
        let action = match self.minimax_agent().choose_action()? {
            Some(action) => action,
            None => {
                warn!(agent_name = self.agent_name(), "no legal move, standing still");
                Direction::Stop
            }
        };
        info!(
            agent_name = self.agent_name(),
            %action,
            cached_states = self.cached_states(),
            "search agent moved"
        );

        Ok(action)
    }
}

pub struct SearchAgentFactory {
    mode: SearchMode,
    config: ResolvedConfig,
}

impl SearchAgentFactory {
    pub fn new(mode: SearchMode, config: ResolvedConfig) -> Self {
        Self { mode, config }
    }
}

impl PacmanFactory for SearchAgentFactory {
    fn name(&self) -> String {
        self.mode.to_string()
    }

    fn from_game(&self, game: GameState) -> BoxedAgent {
        Box::new(SearchAgent::new(game, self.config, self.mode))
    }
}
