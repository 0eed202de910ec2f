//! Game session: the world, its resources and the state machine in one place

use hecs::{Entity, World};
use serde::Serialize;

use crate::ai::PaddleAi;
use crate::config::{Config, DifficultySettings};
use crate::fsm::{GameAction, GameFsm, GameState, MatchResult, StartPayload, TransitionResult};
use crate::systems::recenter_paddles;
use crate::{create_ball, create_paddle, step, Ball, Events, GameRng, ManualControl, ManualInput};
use crate::{Paddle, Score, Side};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub events: Events,
    pub scorer: Option<Side>,
    pub game_over: Option<MatchResult>,
}

/// Read-only view handed to the renderer once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    pub state: GameState,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub left_score: u8,
    pub right_score: u8,
}

pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: GameFsm,
    payload: StartPayload,
    settings: DifficultySettings,
    result: Option<MatchResult>,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
    tick: u32,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        let paddle_y = config.centered_paddle_y();
        let left_paddle = create_paddle(&mut world, Side::Left, paddle_y);
        let right_paddle = create_paddle(&mut world, Side::Right, paddle_y);
        let ball = create_ball(&mut world, config.ball_spawn(), glam::Vec2::ZERO);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            fsm: GameFsm::new(),
            payload: StartPayload::default(),
            settings: DifficultySettings::default(),
            result: None,
            left_paddle,
            right_paddle,
            ball,
            tick: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn settings(&self) -> &DifficultySettings {
        &self.settings
    }

    pub fn payload(&self) -> &StartPayload {
        &self.payload
    }

    /// Outcome of the last finished match
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }

    /// Enter PLAYING with a fresh score, a new serve and new AI controllers
    pub fn start(&mut self, payload: StartPayload) -> TransitionResult {
        let result = self.fsm.transition(GameAction::Start);
        if !result.success {
            return result;
        }

        self.payload = payload;
        self.settings = payload.difficulty.settings();
        self.result = None;
        self.tick = 0;
        self.score.reset();
        self.events.clear();

        let spawn = self.config.ball_spawn();
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.serve(
                spawn,
                self.settings.ball_speed,
                self.config.serve_speed_y,
                &mut self.rng,
            );
        }
        recenter_paddles(&mut self.world, &self.config);
        self.attach_controllers();

        log::info!(
            "match started: difficulty={}, auto_left={}, target={}",
            payload.difficulty.as_key(),
            payload.auto_left,
            self.settings.target_score
        );
        result
    }

    /// Leave the current match or the game-over screen
    pub fn return_to_menu(&mut self) -> TransitionResult {
        let result = self.fsm.transition(GameAction::ReturnToMenu);
        if result.success {
            self.detach_controllers();
        }
        result
    }

    /// Advance one animation frame. Does nothing outside PLAYING.
    pub fn tick(&mut self, input: &ManualInput) -> FrameReport {
        if !self.fsm.is_playing() {
            return FrameReport::default();
        }

        self.tick = self.tick.wrapping_add(1);
        let scorer = step(
            &mut self.world,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        let game_over = match scorer {
            Some(_) => self.check_score(),
            None => None,
        };

        FrameReport {
            events: self.events,
            scorer,
            game_over,
        }
    }

    fn check_score(&mut self) -> Option<MatchResult> {
        let winner = self.score.has_winner(self.settings.target_score)?;

        let result = MatchResult {
            winner,
            left: self.score.left,
            right: self.score.right,
        };
        if self.fsm.transition(GameAction::GameOver).success {
            self.detach_controllers();
            self.result = Some(result);
            log::info!("{} ({} - {})", result.title(), result.left, result.right);
        }
        Some(result)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let paddle_y = |entity: Entity| {
            self.world
                .get::<&Paddle>(entity)
                .map(|paddle| paddle.y)
                .unwrap_or_else(|_| self.config.centered_paddle_y())
        };
        let ball_pos = self
            .world
            .get::<&Ball>(self.ball)
            .map(|ball| ball.pos)
            .unwrap_or_else(|_| self.config.ball_spawn());

        RenderSnapshot {
            state: self.fsm.state(),
            left_paddle_y: paddle_y(self.left_paddle),
            right_paddle_y: paddle_y(self.right_paddle),
            ball_x: ball_pos.x,
            ball_y: ball_pos.y,
            left_score: self.score.left,
            right_score: self.score.right,
        }
    }

    fn attach_controllers(&mut self) {
        self.detach_controllers();

        for side in [Side::Left, Side::Right] {
            let entity = self.paddle_entity(side);
            let ai = PaddleAi::new(self.config.ai_tuning(&self.settings, side));
            if let Err(err) = self.world.insert_one(entity, ai) {
                log::error!("failed to attach {side:?} AI: {err}");
            }
        }

        if !self.payload.auto_left {
            if let Err(err) = self.world.insert_one(self.left_paddle, ManualControl) {
                log::error!("failed to attach keyboard control: {err}");
            }
        }
    }

    fn detach_controllers(&mut self) {
        for entity in [self.left_paddle, self.right_paddle] {
            // Missing components are fine here
            let _ = self.world.remove_one::<PaddleAi>(entity);
            let _ = self.world.remove_one::<ManualControl>(entity);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}
