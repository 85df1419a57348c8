//! Multiplayer minimax where agent `0` plays against everyone else
//!
//! Agents take turns in index order. Agent `0` is always maximizing; the other agents are either
//! assumed to be working together to minimize the score of agent `0` (`minimax` and `alphabeta`)
//! or to be picking their moves uniformly at random (`expectimax`).
//!
//! This variant works by always scoring nodes from the point of view of agent `0`.
//! When propagating scores up the tree, it chooses the highest score when its agent `0`'s turn,
//! the lowest score (or the average) when its an opponent's turn.
//!
//! Depth is measured in plies: one ply is a move by every agent, so a search of depth `d` over
//! `n` agents plays `d * n` moves along every path that does not end early.
//!
//! ```rust
//! use pacman_minimax::{AdversarialGame, AgentIndex, IllegalAction};
//! use pacman_minimax::multi_agent::{MinimaxAgent, SearchMode, SearchOptions};
//!
//! // Two agents take turns adding 1 or 2 to a running total. Agent 0 wants it high, agent 1
//! // wants it low.
//! #[derive(Debug, Clone)]
//! struct Counter(u32);
//!
//! impl AdversarialGame for Counter {
//!     type Action = u32;
//!
//!     fn num_agents(&self) -> usize {
//!         2
//!     }
//!
//!     fn legal_actions(&self, _agent_index: AgentIndex) -> Vec<u32> {
//!         vec![1, 2]
//!     }
//!
//!     fn generate_successor(
//!         &self,
//!         agent_index: AgentIndex,
//!         action: &u32,
//!     ) -> Result<Self, IllegalAction> {
//!         match action {
//!             1 | 2 => Ok(Counter(self.0 + action)),
//!             _ => Err(IllegalAction::new(agent_index, action)),
//!         }
//!     }
//!
//!     fn is_win(&self) -> bool {
//!         false
//!     }
//!
//!     fn is_lose(&self) -> bool {
//!         false
//!     }
//! }
//!
//! // This is the scoring function that we will use to evaluate the game states
//! fn score_function(game: &Counter) -> f64 {
//!     game.0 as f64
//! }
//!
//! let agent = MinimaxAgent::new(
//!     Counter(0),
//!     score_function,
//!     "counter",
//!     SearchOptions {
//!         depth: 1,
//!         mode: SearchMode::AlphaBeta,
//!     },
//! );
//!
//! assert_eq!(agent.choose_action().unwrap(), Some(2));
//! assert_eq!(agent.search_tree().unwrap().score(), 3.0);
//! ```

mod score;
pub use score::{Scorable, Score};

mod cached_score;
pub use cached_score::CachedScore;

mod mode;
pub use mode::{NodeKind, SearchMode, SearchOptions, UnknownSearchMode};

mod minimax_return;
pub use minimax_return::{LeafReason, MinMaxReturn};

mod eval;
pub use eval::{MinimaxAgent, SearchError};
