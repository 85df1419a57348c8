//! A small Pacman board with the classic scoring rules
//!
//! Boards are parsed from the usual ASCII layouts. `y` grows upwards, so the last row of a layout
//! is `y == 0`.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    sync::Arc,
};

use itertools::Itertools;
use pacman_minimax::{AdversarialGame, AgentIndex, IllegalAction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    FoodGettableGame, GhostGettableGame, PacmanPositionGettableGame, ScoreGettableGame,
};

/// Pacman is always the first agent to move
pub const PACMAN_INDEX: AgentIndex = 0;

/// Moves a ghost stays scared after Pacman eats a capsule
pub const SCARED_TIME: u32 = 40;

const TIME_PENALTY: i64 = 1;
const FOOD_REWARD: i64 = 10;
const WIN_REWARD: i64 = 500;
const GHOST_EATEN_REWARD: i64 = 200;
const DEATH_PENALTY: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.vector();

        Position::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Every direction that actually moves, in the order legal actions are listed
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("the layout has no rows")]
    Empty,
    #[error("row {row} is {found} cells wide but the first row is {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {cell:?} at row {row}, column {column}")]
    UnknownCell { cell: char, row: usize, column: usize },
    #[error("the layout has no pacman")]
    MissingPacman,
    #[error("the layout has more than one pacman")]
    DuplicatePacman,
    #[error("got {timers} scared timers for {ghosts} ghosts")]
    ScaredTimers { ghosts: usize, timers: usize },
}

/// The walls of a board, shared between every state of a game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Layout {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Anything off the board counts as a wall
    pub fn is_wall(&self, position: &Position) -> bool {
        if position.x < 0 || position.y < 0 || position.x >= self.width || position.y >= self.height
        {
            return true;
        }

        self.walls[(position.y * self.width + position.x) as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GhostState {
    pub position: Position,
    pub start: Position,
    /// The last move, used to stop ghosts from turning around
    pub direction: Direction,
    pub scared_timer: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
}

/// An immutable snapshot of a game
///
/// Every move produces a fresh state with [AdversarialGame::generate_successor].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    layout: Arc<Layout>,
    pacman: Position,
    ghosts: Vec<GhostState>,
    food: BTreeSet<Position>,
    capsules: BTreeSet<Position>,
    score: i64,
    outcome: Option<Outcome>,
}

/// The serialized form of a game, used for fixtures and config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireGame {
    pub layout: Vec<String>,
    #[serde(default)]
    pub score: i64,
    /// One entry per ghost in reading order, empty means nobody is scared
    #[serde(default)]
    pub scared_timers: Vec<u32>,
}

impl GameState {
    /// Parse an ASCII layout, rows listed from the top of the board down
    pub fn from_layout<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let width = rows.first().ok_or(LayoutError::Empty)?.as_ref().chars().count();
        let height = rows.len();

        let mut walls = vec![false; width * height];
        let mut pacman = None;
        let mut ghosts = vec![];
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }

            let y = (height - 1 - row) as i32;
            for (column, cell) in line.chars().enumerate() {
                let position = Position::new(column as i32, y);

                match cell {
                    '%' => walls[(y as usize) * width + column] = true,
                    '.' => {
                        food.insert(position);
                    }
                    'o' => {
                        capsules.insert(position);
                    }
                    'P' => {
                        if pacman.replace(position).is_some() {
                            return Err(LayoutError::DuplicatePacman);
                        }
                    }
                    'G' => ghosts.push(GhostState {
                        position,
                        start: position,
                        direction: Direction::Stop,
                        scared_timer: 0,
                    }),
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownCell { cell, row, column }),
                }
            }
        }

        Ok(Self {
            layout: Arc::new(Layout {
                width: width as i32,
                height: height as i32,
                walls,
            }),
            pacman: pacman.ok_or(LayoutError::MissingPacman)?,
            ghosts,
            food,
            capsules,
            score: 0,
            outcome: None,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn ghosts(&self) -> &[GhostState] {
        &self.ghosts
    }

    pub fn capsules(&self) -> &BTreeSet<Position> {
        &self.capsules
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn move_pacman(&mut self, direction: Direction) {
        self.pacman = self.pacman.step(direction);
        self.score -= TIME_PENALTY;

        if self.food.remove(&self.pacman) {
            self.score += FOOD_REWARD;

            if self.food.is_empty() {
                self.score += WIN_REWARD;
                self.outcome = Some(Outcome::Win);
            }
        }

        if self.capsules.remove(&self.pacman) {
            for ghost in self.ghosts.iter_mut() {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for ghost_index in 0..self.ghosts.len() {
            self.resolve_collision(ghost_index);
        }
    }

    fn move_ghost(&mut self, ghost_index: usize, direction: Direction) {
        if let Some(ghost) = self.ghosts.get_mut(ghost_index) {
            ghost.position = ghost.position.step(direction);
            ghost.direction = direction;
            ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        }

        self.resolve_collision(ghost_index);
    }

    fn resolve_collision(&mut self, ghost_index: usize) {
        let ghost = match self.ghosts.get_mut(ghost_index) {
            Some(ghost) if ghost.position == self.pacman => ghost,
            _ => return,
        };

        if ghost.scared_timer > 0 {
            self.score += GHOST_EATEN_REWARD;
            ghost.position = ghost.start;
            ghost.direction = Direction::Stop;
            ghost.scared_timer = 0;
        } else if self.outcome.is_none() {
            self.score -= DEATH_PENALTY;
            self.outcome = Some(Outcome::Lose);
        }
    }
}

impl TryFrom<WireGame> for GameState {
    type Error = LayoutError;

    fn try_from(wire: WireGame) -> Result<Self, Self::Error> {
        let mut game = GameState::from_layout(&wire.layout)?;
        game.score = wire.score;

        if !wire.scared_timers.is_empty() {
            if wire.scared_timers.len() != game.ghosts.len() {
                return Err(LayoutError::ScaredTimers {
                    ghosts: game.ghosts.len(),
                    timers: wire.scared_timers.len(),
                });
            }

            for (ghost, timer) in game.ghosts.iter_mut().zip(wire.scared_timers) {
                ghost.scared_timer = timer;
            }
        }

        Ok(game)
    }
}

impl AdversarialGame for GameState {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent_index: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_some() {
            return vec![];
        }

        if agent_index == PACMAN_INDEX {
            return Direction::MOVES
                .iter()
                .copied()
                .filter(|direction| !self.layout.is_wall(&self.pacman.step(*direction)))
                .chain(std::iter::once(Direction::Stop))
                .collect();
        }

        let ghost = match self.ghosts.get(agent_index - 1) {
            Some(ghost) => ghost,
            None => return vec![],
        };

        let mut moves: Vec<Direction> = Direction::MOVES
            .iter()
            .copied()
            .filter(|direction| !self.layout.is_wall(&ghost.position.step(*direction)))
            .collect();

        let reverse = ghost.direction.reverse();
        if moves.len() > 1 {
            moves.retain(|direction| *direction != reverse);
        }

        moves
    }

    fn generate_successor(
        &self,
        agent_index: AgentIndex,
        action: &Direction,
    ) -> Result<Self, IllegalAction> {
        if !self.legal_actions(agent_index).contains(action) {
            return Err(IllegalAction::new(agent_index, action));
        }

        let mut next = self.clone();
        if agent_index == PACMAN_INDEX {
            next.move_pacman(*action);
        } else {
            next.move_ghost(agent_index - 1, *action);
        }

        Ok(next)
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }
}

impl PacmanPositionGettableGame for GameState {
    fn get_pacman_position(&self) -> Position {
        self.pacman
    }
}

impl FoodGettableGame for GameState {
    fn get_all_food(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }
}

impl GhostGettableGame for GameState {
    fn get_ghost_positions(&self) -> Vec<Position> {
        self.ghosts.iter().map(|ghost| ghost.position).collect()
    }

    fn get_scared_timers(&self) -> Vec<u32> {
        self.ghosts.iter().map(|ghost| ghost.scared_timer).collect()
    }
}

impl ScoreGettableGame for GameState {
    fn get_score(&self) -> i64 {
        self.score
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = (0..self.layout.height).rev().map(|y| {
            (0..self.layout.width)
                .map(|x| {
                    let position = Position::new(x, y);

                    if self.pacman == position {
                        'P'
                    } else if self.ghosts.iter().any(|ghost| ghost.position == position) {
                        'G'
                    } else if self.layout.is_wall(&position) {
                        '%'
                    } else if self.food.contains(&position) {
                        '.'
                    } else if self.capsules.contains(&position) {
                        'o'
                    } else {
                        ' '
                    }
                })
                .collect::<String>()
        });

        write!(f, "{}", rows.join("\n"))
    }
}
