use hecs::{Entity, World};

use crate::error::{RenderError, Result};
use crate::render::{draw_frame, Canvas};
use crate::systems::apply_key;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameMap, GameRng, InputEvent,
    MatchState, Paddle, PaddleKind, RandomSource, Score,
};

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Stopped,
}

/// A single match: human on the left, AI on the right
pub struct Game<R: RandomSource = GameRng> {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: R,
    ball: Entity,
    running: bool,
    game_over: bool,
    tick: u64,
}

impl Game<GameRng> {
    /// Default rules and geometry with a seeded generator
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(Config::default(), GameRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    pub fn new(config: Config, mut rng: R) -> Result<Self> {
        config.validate()?;

        let map = GameMap::new(&config);
        let mut world = World::new();
        create_paddle(&mut world, &map, &config, PaddleKind::Player);
        create_paddle(&mut world, &map, &config, PaddleKind::Ai);
        let ball = create_ball(&mut world, Ball::served(&map, &config, &mut rng));

        Ok(Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            ball,
            running: true,
            game_over: false,
            tick: 0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn match_state(&self) -> MatchState {
        self.score.state()
    }

    /// Simulation steps taken so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, kind: PaddleKind) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.kind == kind)
            .map(|(_e, paddle)| *paddle)
    }

    /// Quit and Escape stop the game; other keys steer the player's paddle
    /// until the match is decided.
    pub fn handle_events<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) {
        for event in events {
            if event.is_exit() {
                if self.running {
                    log::info!("Exit requested by {:?}", event);
                }
                self.running = false;
                continue;
            }
            if let InputEvent::KeyDown(key) = event {
                if !self.game_over {
                    apply_key(&mut self.world, key, &self.config);
                }
            }
        }
    }

    /// Advance the simulation by one step unless the match is over
    pub fn update(&mut self) {
        if self.score.state().is_over() && !self.game_over {
            log::info!(
                "Game over after {} ticks: {:?} ({}-{})",
                self.tick,
                self.score.state(),
                self.score.player,
                self.score.ai
            );
            self.game_over = true;
        }
        if self.game_over {
            self.events.clear();
            return;
        }

        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
    }

    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
    ) -> std::result::Result<(), RenderError> {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .collect();
        paddles.sort_by_key(|paddle| paddle.kind);
        let ball = self.ball();
        draw_frame(canvas, &self.map, &self.score, &paddles, ball.as_ref())
    }

    /// One frame: input, simulation, drawing. The host paces calls.
    pub fn tick<I, C>(&mut self, events: I, canvas: &mut C) -> Result<TickStatus>
    where
        I: IntoIterator<Item = InputEvent>,
        C: Canvas + ?Sized,
    {
        self.handle_events(events);
        if !self.running {
            return Ok(TickStatus::Stopped);
        }

        self.update();
        self.render(canvas)?;
        Ok(TickStatus::Running)
    }
}
