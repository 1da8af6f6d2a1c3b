use super::*;

use canvas::{Align, Canvas};
use entries::Entry;

/// Winner announcement shown on top of everything until confirmed
pub struct WinnerBanner {
    /// Slot the winner had when the spin ended
    pub index: usize,
    pub winner: Entry,
    time: f32,
}

impl WinnerBanner {
    pub fn new(index: usize, winner: Entry) -> Self {
        Self {
            index,
            winner,
            time: 0.0,
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.time += delta_time;
    }

    pub fn draw(&self, config: &config::Banner, canvas: &mut impl Canvas) {
        let size = canvas.size();
        let t = if config.pop_time > 0.0 {
            (self.time / config.pop_time).min(1.0)
        } else {
            1.0
        };
        canvas.fill_rect(
            Aabb2::point(vec2::ZERO).extend_positive(size),
            Rgba::new(0.0, 0.0, 0.0, config.dim * t),
        );

        let scale = ease_out_elastic(t);
        let center = size / 2.0;
        let half = vec2(size.x * 0.35, size.y * 0.2) * scale;
        canvas.fill_rect(
            Aabb2::point(center).extend_symmetric(half),
            config.background,
        );
        canvas.text(
            &config.title,
            center - vec2(0.0, config.name_size * scale),
            config.title_size * scale,
            Align::Center,
            config.text_color,
        );
        canvas.text(
            self.winner.label(),
            center + vec2(0.0, config.title_size * 0.5 * scale),
            config.name_size * scale,
            Align::Center,
            config.text_color,
        );
        canvas.text(
            &config.hint,
            center + vec2(0.0, half.y - config.hint_size),
            config.hint_size * scale,
            Align::Center,
            config.text_color,
        );
    }
}
