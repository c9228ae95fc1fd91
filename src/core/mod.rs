//! Core game types and logic (entities, input, state machine).
//!
//! Re-exports:
//! - `entity`: `Entity` trait and the per-frame `Tick`
//! - `input`: keyboard/mouse snapshot
//! - `camera`: first-person camera and view transform
//! - `player`: walking, friction, jump and gravity
//! - `enemy`: pursuit, proximity sound cues, billboard angle
//! - `world`: Playing/GameOver state machine and the frame step
//! - `process_events`: raylib input polling

pub mod entity;
pub mod input;
pub mod camera;
pub mod player;
pub mod enemy;
pub mod world;
pub mod process_events;
