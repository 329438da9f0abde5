//! The game state machine.
//!
//! `apply` is a reducer: it takes the current `GameState` by value, an
//! `Action`, and a random source used only for food placement, and returns
//! the next state. Every edge case (reversal, wall, body, wrong status) is a
//! defined transition or a no-op; nothing here fails.

use rand::Rng;

use crate::error::StateError;
use crate::food::place_food;
use crate::geometry::{Cell, Direction};

pub const MIN_SNAKE_LEN: usize = 3;
pub const FOOD_SCORE: u32 = 10;
pub const START_DIRECTION: Direction = Direction::Right;

const START_SNAKE: [Cell; 3] = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Paused,
    Dying,
    GameOver,
}

/// Ruleset flavour. `Enhanced` animates death (Running -> Dying -> GameOver),
/// speeds up with score and changes palette; `Basic` goes straight to
/// GameOver on a fatal tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    Basic,
    Enhanced,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleStartPause,
    SetDirection(Direction),
    Tick,
    DeathAnimationComplete,
}

/// Snake body, head first. Only constructible through `Snake::new`, which
/// rejects anything a live game could not contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    cells: Vec<Cell>,
}

impl Snake {
    pub fn new(cells: Vec<Cell>) -> Result<Self, StateError> {
        if cells.len() < MIN_SNAKE_LEN {
            return Err(StateError::TooShort { min: MIN_SNAKE_LEN, actual: cells.len() });
        }
        for (i, cell) in cells.iter().enumerate() {
            if !cell.on_grid() {
                return Err(StateError::OffGrid(*cell));
            }
            if cells[..i].contains(cell) {
                return Err(StateError::DuplicateCell(*cell));
            }
            if i > 0 && !cells[i - 1].is_adjacent(*cell) {
                return Err(StateError::NotContiguous { index: i });
            }
        }
        Ok(Self { cells })
    }

    pub fn starting() -> Self {
        Self { cells: START_SNAKE.to_vec() }
    }

    pub fn head(&self) -> Cell {
        // Non-empty by construction.
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    fn advance(&mut self, head: Cell, grow: bool) {
        self.cells.insert(0, head);
        if !grow {
            self.cells.pop();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    snake: Snake,
    /// `None` only once the snake covers the whole board.
    food: Option<Cell>,
    direction: Direction,
    status: Status,
    score: u32,
    variant: Variant,
    death: Option<DeathCause>,
}

impl GameState {
    /// Idle screen: canonical snake and a food item, waiting for a start toggle.
    pub fn idle<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Self {
        Self { status: Status::Idle, ..Self::fresh(variant, rng) }
    }

    /// Builds an arbitrary state, checking the cross-field invariants.
    pub fn from_parts(
        snake: Snake,
        food: Cell,
        direction: Direction,
        status: Status,
        score: u32,
        variant: Variant,
    ) -> Result<Self, StateError> {
        if !food.on_grid() {
            return Err(StateError::OffGrid(food));
        }
        if snake.contains(food) {
            return Err(StateError::FoodOnSnake(food));
        }
        Ok(Self { snake, food: Some(food), direction, status, score, variant, death: None })
    }

    /// Empty stand-in used while the real state is moved through `apply`.
    pub(crate) fn vacant() -> Self {
        Self {
            snake: Snake { cells: Vec::new() },
            food: None,
            direction: START_DIRECTION,
            status: Status::Idle,
            score: 0,
            variant: Variant::Basic,
            death: None,
        }
    }

    fn fresh<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Self {
        let snake = Snake::starting();
        let food = place_food(snake.cells(), rng);
        Self {
            snake,
            food,
            direction: START_DIRECTION,
            status: Status::Running,
            score: 0,
            variant,
            death: None,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Why the last game ended, if it has.
    pub fn death(&self) -> Option<DeathCause> {
        self.death
    }

    fn fatal_status(&self) -> Status {
        match self.variant {
            Variant::Enhanced => Status::Dying,
            Variant::Basic => Status::GameOver,
        }
    }
}

pub fn apply<R: Rng + ?Sized>(state: GameState, action: Action, rng: &mut R) -> GameState {
    match action {
        Action::ToggleStartPause => toggle(state, rng),
        Action::SetDirection(dir) => {
            if dir.is_opposite(state.direction) {
                return state;
            }
            GameState { direction: dir, ..state }
        }
        Action::Tick => tick(state, rng),
        Action::DeathAnimationComplete => match state.status {
            Status::Dying => GameState { status: Status::GameOver, ..state },
            _ => state,
        },
    }
}

fn toggle<R: Rng + ?Sized>(state: GameState, rng: &mut R) -> GameState {
    match state.status {
        Status::Dying => state,
        Status::Idle | Status::GameOver => GameState::fresh(state.variant, rng),
        Status::Running => GameState { status: Status::Paused, ..state },
        Status::Paused => GameState { status: Status::Running, ..state },
    }
}

fn tick<R: Rng + ?Sized>(mut state: GameState, rng: &mut R) -> GameState {
    if state.status != Status::Running {
        return state;
    }

    let head = state.snake.head().step(state.direction);
    let cause = if !head.on_grid() {
        Some(DeathCause::Wall)
    } else if state.snake.contains(head) {
        Some(DeathCause::SelfCollision)
    } else {
        None
    };
    if let Some(cause) = cause {
        let status = state.fatal_status();
        return GameState { status, death: Some(cause), ..state };
    }

    let ate = state.food == Some(head);
    state.snake.advance(head, ate);
    if ate {
        state.score += FOOD_SCORE;
        state.food = place_food(state.snake.cells(), rng);
        if state.food.is_none() {
            state.status = Status::GameOver;
            state.death = Some(DeathCause::BoardFull);
        }
    }
    state
}
