//! The shell that owns a running game.
//!
//! Everything with a side effect lives here rather than in the reducer: the
//! random source, the tick timer, the death animation handle and the
//! high-score store. `App` has a single `&mut` owner (the frame loop), which
//! serialises every action that reaches `game::apply`.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::DeathAnimation;
use crate::config::GameConfig;
use crate::game::{self, Action, GameState, Status, Variant};
use crate::scheduler::{TickPolicy, TickScheduler};
use crate::store::HighScoreStore;
use crate::theme::{THEMES, Theme, theme_for_score};

pub struct App<S: HighScoreStore> {
    state: GameState,
    rng: StdRng,
    scheduler: TickScheduler,
    animation: Option<DeathAnimation>,
    store: S,
    high_score: u32,
    best_at_start: u32,
    new_record: bool,
}

impl<S: HighScoreStore> App<S> {
    pub fn new(config: &GameConfig, store: S, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::idle(config.variant(), &mut rng);
        Self::with_state(state, config.tick_policy(), store, rng)
    }

    /// Starts from an existing state, e.g. one built with `GameState::from_parts`.
    pub fn with_state(state: GameState, policy: TickPolicy, store: S, rng: StdRng) -> Self {
        let high_score = store.load();
        log::info!("loaded high score {}", high_score);
        let mut scheduler = TickScheduler::new(policy);
        scheduler.sync(state.status(), state.score());
        let mut app = Self {
            state,
            rng,
            scheduler,
            animation: None,
            store,
            high_score,
            best_at_start: high_score,
            new_record: false,
        };
        if app.state.status() == Status::Dying {
            let theme = app.theme();
            app.animation = Some(DeathAnimation::start(&app.state, theme, &mut app.rng));
        }
        app
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Whether the game that just ended reached at least the best score
    /// stored when it began.
    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn animation(&self) -> Option<&DeathAnimation> {
        self.animation.as_ref()
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> &'static Theme {
        match self.state.variant() {
            Variant::Enhanced => theme_for_score(self.state.score()),
            Variant::Basic => &THEMES[0],
        }
    }

    /// Applies one action and reconciles everything that hangs off the state.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.state.status();
        let state = std::mem::replace(&mut self.state, GameState::vacant());
        self.state = game::apply(state, action, &mut self.rng);
        let after = self.state.status();
        if before != after {
            self.on_status_change(before, after);
        }
        self.record_high_score();
        self.scheduler.sync(after, self.state.score());
    }

    /// One frame: input first, then due ticks, then the death animation.
    /// An animation started during this frame begins at zero and is first
    /// advanced on the next one.
    pub fn update(&mut self, actions: &[Action], dt: Duration) {
        for &action in actions {
            self.dispatch(action);
        }
        let was_animating = self.animation.is_some();

        self.scheduler.sync(self.state.status(), self.state.score());
        let mut step = dt;
        while self.scheduler.poll(step) {
            step = Duration::ZERO;
            self.dispatch(Action::Tick);
        }

        let done = was_animating && self.animation.as_mut().is_some_and(|anim| anim.advance(dt));
        if done {
            self.dispatch(Action::DeathAnimationComplete);
        }
    }

    fn on_status_change(&mut self, before: Status, after: Status) {
        match after {
            Status::Running if matches!(before, Status::Idle | Status::GameOver) => {
                self.best_at_start = self.high_score;
                self.new_record = false;
                log::info!("game started");
            }
            Status::Running => log::info!("resumed at score {}", self.state.score()),
            Status::Paused => log::info!("paused at score {}", self.state.score()),
            Status::Dying | Status::GameOver if before == Status::Running => {
                let score = self.state.score();
                self.new_record = score > 0 && score >= self.best_at_start;
                log::info!(
                    "snake died ({:?}) with score {}, length {}",
                    self.state.death(),
                    score,
                    self.state.snake().len()
                );
            }
            Status::GameOver => log::info!("game over, final score {}", self.state.score()),
            Status::Idle | Status::Dying => {}
        }

        if after == Status::Dying {
            let theme = self.theme();
            self.animation = Some(DeathAnimation::start(&self.state, theme, &mut self.rng));
        } else if let Some(mut anim) = self.animation.take() {
            anim.cancel();
        }
    }

    fn record_high_score(&mut self) {
        let score = self.state.score();
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        log::info!("new high score {}", score);
        if let Err(e) = self.store.save(score) {
            log::warn!("could not save high score: {}", e);
        }
    }
}
