use std::borrow::Cow;

use derivative::Derivative;
use thiserror::Error;
use tracing::{debug, info, info_span};

use crate::{AdversarialGame, AgentIndex, IllegalAction};

use super::{LeafReason, MinMaxReturn, NodeKind, Scorable, Score, SearchMode, SearchOptions};

/// Everything that can stop a search from producing a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The game refused a successor for an action it listed as legal
    #[error(transparent)]
    IllegalAction(#[from] IllegalAction),
    /// The game reported that nobody is playing
    #[error("the game reported zero agents, there is nobody to search for")]
    NoAgents,
}

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = "GameType: std::fmt::Debug"))]
/// This is the struct that wraps a game state and a scoring function and can be used to run
/// minimax, alpha-beta or expectimax
///
/// It also outputs traces using the [tracing] crate.
pub struct MinimaxAgent<GameType, ScorableType> {
    /// The state we are choosing a move from
    pub game: GameType,
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    /// Used to tell agents apart in traces
    pub name: &'static str,
    options: SearchOptions,
}

impl<GameType, ScorableType> MinimaxAgent<GameType, ScorableType>
where
    GameType: AdversarialGame + Clone,
    ScorableType: Scorable<GameType>,
{
    /// Construct a new `MinimaxAgent`
    ///
    /// [SearchOptions] implements [Default] so you can override specific options and rely on
    /// defaults for the rest.
    pub fn new(
        game: GameType,
        score_function: ScorableType,
        name: &'static str,
        options: SearchOptions,
    ) -> Self {
        Self {
            game,
            score_function,
            name,
            options,
        }
    }

    /// The options this agent searches with
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Pick the next move for agent `0`
    ///
    /// The root always considers its own moves, even with a depth of zero, so a depth zero search
    /// is a greedy choice over the evaluated successors. `None` is only returned when the root is
    /// already terminal or agent `0` has no legal action.
    pub fn choose_action(&self) -> Result<Option<GameType::Action>, SearchError> {
        info_span!(
            "choose_action",
            agent_name = self.name,
            mode = %self.options.mode,
            depth = self.options.depth,
            chosen_score = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
            leaves = tracing::field::Empty,
        )
        .in_scope(|| -> Result<Option<GameType::Action>, SearchError> {
            let result = self.search_tree()?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_score", &result.score());
            current_span.record(
                "chosen_action",
                format!("{:?}", result.best_action()).as_str(),
            );
            current_span.record("leaves", &result.leaf_count());

            info!(
                score = result.score(),
                action = ?result.best_action(),
                "finished search"
            );

            Ok(result.best_action().cloned())
        })
    }

    /// Run the search used by [MinimaxAgent::choose_action] and return the whole explored tree
    ///
    /// Useful for debugging, see [MinMaxReturn::to_text_tree]
    pub fn search_tree(&self) -> Result<MinMaxReturn<GameType::Action>, SearchError> {
        let num_agents = self.num_agents()?;
        let root = Cow::Borrowed(&self.game);

        if root.is_terminal() {
            return Ok(self.leaf(&root, LeafReason::Terminal));
        }

        self.expand(root, num_agents, 0, 0, Score::NEG_INFINITY, Score::INFINITY)
    }

    /// The value of the root state, cutting off at the root itself when the depth is zero
    ///
    /// For any depth above zero this is the same tree [MinimaxAgent::search_tree] returns.
    pub fn value(&self) -> Result<MinMaxReturn<GameType::Action>, SearchError> {
        let num_agents = self.num_agents()?;

        self.minimax(
            Cow::Borrowed(&self.game),
            num_agents,
            0,
            0,
            Score::NEG_INFINITY,
            Score::INFINITY,
        )
    }

    fn num_agents(&self) -> Result<usize, SearchError> {
        match self.game.num_agents() {
            0 => Err(SearchError::NoAgents),
            n => Ok(n),
        }
    }

    fn leaf(&self, node: &GameType, reason: LeafReason) -> MinMaxReturn<GameType::Action> {
        MinMaxReturn::Leaf {
            score: self.score_function.score(node),
            reason,
        }
    }

    /// `depth` counts completed plies, it goes up when the turn comes back around to agent `0`
    fn minimax(
        &self,
        node: Cow<GameType>,
        num_agents: usize,
        agent_index: AgentIndex,
        depth: usize,
        alpha: Score,
        beta: Score,
    ) -> Result<MinMaxReturn<GameType::Action>, SearchError> {
        if node.is_terminal() {
            return Ok(self.leaf(&node, LeafReason::Terminal));
        }

        if depth >= self.options.depth {
            return Ok(self.leaf(&node, LeafReason::DepthLimit));
        }

        self.expand(node, num_agents, agent_index, depth, alpha, beta)
    }

    fn expand(
        &self,
        node: Cow<GameType>,
        num_agents: usize,
        agent_index: AgentIndex,
        depth: usize,
        alpha: Score,
        beta: Score,
    ) -> Result<MinMaxReturn<GameType::Action>, SearchError> {
        let mut alpha = alpha;
        let mut beta = beta;

        let possible_actions = node.legal_actions(agent_index);
        if possible_actions.is_empty() {
            return Ok(self.leaf(&node, LeafReason::NoLegalActions));
        }

        let kind = self.options.mode.node_kind(agent_index);
        let is_alpha_beta = self.options.mode == SearchMode::AlphaBeta;

        let next_agent = (agent_index + 1) % num_agents;
        let next_depth = if next_agent == 0 { depth + 1 } else { depth };

        let action_count = possible_actions.len();
        let mut options: Vec<(GameType::Action, MinMaxReturn<GameType::Action>)> =
            Vec::with_capacity(action_count);
        let mut best: Option<(Score, GameType::Action)> = None;
        let mut total: Score = 0.0;

        for action in possible_actions {
            let successor = node.generate_successor(agent_index, &action)?;
            let next_return = self.minimax(
                Cow::Owned(successor),
                num_agents,
                next_agent,
                next_depth,
                alpha,
                beta,
            )?;
            let value = next_return.score();
            options.push((action.clone(), next_return));

            match kind {
                NodeKind::Max => {
                    let improved = match &best {
                        Some((best_score, _)) => value > *best_score,
                        None => true,
                    };
                    if improved {
                        best = Some((value, action));
                    }

                    if is_alpha_beta {
                        if value > beta {
                            break;
                        }
                        alpha = alpha.max(value);
                    }
                }
                NodeKind::Min => {
                    let improved = match &best {
                        Some((best_score, _)) => value < *best_score,
                        None => true,
                    };
                    if improved {
                        best = Some((value, action));
                    }

                    if is_alpha_beta {
                        if value < alpha {
                            break;
                        }
                        beta = beta.min(value);
                    }
                }
                NodeKind::Chance => {
                    total += value;
                    best = Some((value, action));
                }
            }
        }

        let pruned = options.len() < action_count;
        if pruned {
            debug!(agent_index, depth, alpha, beta, "pruned remaining actions");
        }

        let (score, best_action) = match (kind, best) {
            (NodeKind::Chance, best) => (
                total / options.len() as Score,
                best.map(|(_, action)| action),
            ),
            (_, Some((score, action))) => (score, Some(action)),
            (_, None) => (self.score_function.score(&*node), None),
        };

        Ok(MinMaxReturn::Node {
            kind,
            agent_index,
            options,
            best_action,
            score,
            pruned,
        })
    }
}
