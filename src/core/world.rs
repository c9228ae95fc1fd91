//! Game state machine and the per-frame simulation step.
use std::time::Instant;

use glam::Vec3;
use log::info;

use crate::config::{GameConfig, WorldConfig};
use crate::core::camera::Camera;
use crate::core::enemy::{Enemy, ProximityAudio, planar_distance};
use crate::core::entity::{Entity, Tick};
use crate::core::input::InputState;
use crate::core::player::Player;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Collision,
    Restart,
}

impl GameState {
    /// Events that don't apply to the current state leave it unchanged.
    pub fn transition(self, event: GameEvent) -> GameState {
        match (self, event) {
            (GameState::Playing, GameEvent::Collision) => GameState::GameOver,
            (GameState::GameOver, GameEvent::Restart) => GameState::Playing,
            (state, _) => state,
        }
    }
}

/// True when the two points are closer than `threshold` in the XZ plane.
pub fn check_collision(a: Vec3, b: Vec3, threshold: f32) -> bool {
    planar_distance(a, b) < threshold
}

pub struct World {
    pub camera: Camera,
    pub player: Player,
    pub enemy: Enemy,
    state: GameState,
    started_at: Instant,
    score: u64,
    cfg: WorldConfig,
}

impl World {
    pub fn new(cfg: &GameConfig, now: Instant) -> Self {
        let mut camera = Camera::new(&cfg.camera);
        let player = Player::new(&cfg.player);
        camera.update(player.position);
        Self {
            camera,
            player,
            enemy: Enemy::new(&cfg.enemy),
            state: GameState::Playing,
            started_at: now,
            score: 0,
            cfg: cfg.world.clone(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state() == GameState::GameOver
    }

    /// Whole seconds survived; frozen once the game is over.
    pub fn score(&self) -> u64 {
        self.score
    }

    fn fire(&mut self, event: GameEvent) {
        let next = self.state.transition(event);
        if next != self.state {
            info!("{:?} -> {:?} on {:?} (score {})", self.state, next, event, self.score);
            self.state = next;
        }
    }

    fn restart(&mut self, now: Instant) {
        self.player.reset();
        self.enemy.reset();
        self.started_at = now;
        self.score = 0;
        self.fire(GameEvent::Restart);
    }

    /// Advances one frame. Quitting is the caller's business.
    pub fn frame<A: ProximityAudio>(&mut self, input: &InputState, now: Instant, audio: &mut A) {
        self.camera.handle_mouse_movement(input.mouse_delta.x, input.mouse_delta.y);

        if input.restart && self.is_game_over() {
            self.restart(now);
        }

        if self.state == GameState::Playing {
            let tick = Tick {
                input,
                camera_yaw: self.camera.yaw,
                player_position: self.player.position,
            };
            self.player.update(&tick);

            let tick = Tick { player_position: self.player.position, ..tick };
            if let Some(cue) = self.enemy.update(&tick) {
                audio.apply(cue);
            } else if self.enemy.sound_playing && !audio.is_looping() {
                // an earlier start failed on the device
                audio.start_loop();
            }

            if check_collision(self.player.position, self.enemy.position, self.cfg.collision_threshold) {
                self.fire(GameEvent::Collision);
            }
            self.score = now.saturating_duration_since(self.started_at).as_secs();
        }

        let tick = Tick {
            input,
            camera_yaw: self.camera.yaw,
            player_position: self.player.position,
        };
        Entity::update(&mut self.camera, &tick);
    }
}
