use super::*;

use canvas::{Canvas, GengCanvas};
use palette::Palette;

/// Idle wheel spinning until the assets are in
pub async fn run(geng: &Geng) {
    const SEGMENTS: usize = 10;
    const DEGREES_PER_SECOND: f32 = 180.0;
    let palette = Palette::default();
    let timer = Timer::new();
    while let Some(event) = geng.window().events().next().await {
        if let geng::Event::Draw = event {
            geng::async_state::with_current_framebuffer(geng.window(), |framebuffer| {
                let mut canvas = GengCanvas::new(geng, framebuffer);
                canvas.clear(Rgba::BLACK);
                let size = canvas.size();
                let radius = partial_min(size.x, size.y) / 10.0;
                let slice = 360.0 / SEGMENTS as f32;
                canvas.translate(size / 2.0);
                canvas.rotate(Angle::from_degrees(
                    DEGREES_PER_SECOND * timer.elapsed().as_secs_f64() as f32,
                ));
                for i in 0..SEGMENTS {
                    canvas.fill_sector(
                        vec2::ZERO,
                        radius,
                        Angle::from_degrees(i as f32 * slice),
                        Angle::from_degrees((i + 1) as f32 * slice),
                        palette.get(i),
                    );
                }
            });
        }
    }
}
