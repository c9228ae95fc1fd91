//! Score and game-over overlay.
use raylib::prelude::*;

use crate::render::Render;

pub const FONT_SIZE: i32 = 30;
pub const GAME_OVER_TEXT: &str = "Game Over! Press R to restart";
const PAD: i32 = 4;

/// Pixel width of `text` at a font size. raylib's `measure_text` in the game.
pub type MeasureText = fn(&str, i32) -> i32;

pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl Label {
    fn draw(&self, d: &mut RaylibDrawHandle<'_>) {
        d.draw_rectangle(self.x - PAD, self.y - PAD, self.width + PAD * 2, FONT_SIZE + PAD * 2, Color::BLACK);
        d.draw_text(&self.text, self.x, self.y, FONT_SIZE, Color::WHITE);
    }
}

pub struct Hud {
    pub score: u64,
    pub game_over: bool,
    pub screen_w: i32,
    pub screen_h: i32,
}

impl Hud {
    /// Score in the top-left corner, game-over message centred.
    pub fn labels(&self, measure: MeasureText) -> Vec<Label> {
        let score = score_text(self.score);
        let width = measure(&score, FONT_SIZE);
        let mut out = vec![Label { text: score, x: 10, y: 10, width }];
        if self.game_over {
            let width = measure(GAME_OVER_TEXT, FONT_SIZE);
            out.push(Label {
                text: GAME_OVER_TEXT.to_string(),
                x: (self.screen_w - width) / 2,
                y: (self.screen_h - FONT_SIZE) / 2,
                width,
            });
        }
        out
    }
}

impl<'a> Render<RaylibDrawHandle<'a>> for Hud {
    fn render(&self, d: &mut RaylibDrawHandle<'a>) {
        for label in self.labels(raylib::core::text::measure_text) {
            label.draw(d);
        }
    }
}
