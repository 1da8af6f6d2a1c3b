use super::*;

use canvas::Canvas;
use palette::Palette;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub count: usize,
    /// Each velocity component is uniform in `-speed/2..speed/2`, pixels per tick
    pub speed: f32,
    pub size: f32,
    pub extra_size: f32,
    pub gravity: f32,
    pub drag: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 150,
            speed: 20.0,
            size: 4.0,
            extra_size: 8.0,
            gravity: 0.2,
            drag: 0.96,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: vec2<f32>,
    pub vel: vec2<f32>,
    pub size: f32,
    pub color: Rgba<f32>,
}

pub struct Confetti {
    config: Config,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            particles: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn burst(&mut self, origin: vec2<f32>, palette: &Palette, rng: &mut impl Rng) {
        let half_speed = self.config.speed / 2.0;
        for _ in 0..self.config.count {
            let particle = Particle {
                pos: origin,
                vel: vec2(
                    rng.gen_range(-half_speed..=half_speed),
                    rng.gen_range(-half_speed..=half_speed),
                ),
                size: self.config.size + rng.gen_range(0.0..=self.config.extra_size),
                color: palette.choose(rng),
            };
            self.particles.push(particle);
        }
        log::debug!("confetti burst of {} at {origin:?}", self.config.count);
    }

    pub fn stop(&mut self) {
        self.particles.clear();
    }

    /// One integration step, anything below `bottom` is dropped
    pub fn update(&mut self, bottom: f32) {
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.vel.y += self.config.gravity;
            particle.vel = particle.vel * self.config.drag;
        }
        self.particles.retain(|particle| particle.pos.y <= bottom);
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        for particle in &self.particles {
            canvas.fill_rect(
                Aabb2::point(particle.pos).extend_positive(vec2::splat(particle.size)),
                particle.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use canvas::Recording;

    #[test]
    fn burst_spawns_configured_count() {
        let mut confetti = Confetti::new(default());
        let palette = Palette::default();
        confetti.burst(vec2(300.0, 200.0), &palette, &mut StdRng::seed_from_u64(1));
        assert_eq!(confetti.particles().len(), 150);
        for particle in confetti.particles() {
            assert_eq!(particle.pos, vec2(300.0, 200.0));
            assert!(particle.vel.x.abs() <= 10.0 && particle.vel.y.abs() <= 10.0);
            assert!((4.0..=12.0).contains(&particle.size));
        }
    }

    #[test]
    fn particles_fall_out_of_view() {
        let height = 600.0;
        let mut confetti = Confetti::new(default());
        confetti.burst(
            vec2(400.0, height / 2.0),
            &Palette::default(),
            &mut StdRng::seed_from_u64(2),
        );
        let mut previous = confetti.particles().len();
        let mut ticks = 0;
        while confetti.is_active() {
            confetti.update(height);
            let count = confetti.particles().len();
            assert!(count <= previous);
            previous = count;
            ticks += 1;
            assert!(ticks < 2000, "{count} particles still alive");
        }
    }

    #[test]
    fn falling_speed_builds_up() {
        let mut confetti = Confetti::new(default());
        confetti.particles.push(Particle {
            pos: vec2::ZERO,
            vel: vec2(0.0, -10.0),
            size: 4.0,
            color: Rgba::WHITE,
        });
        for _ in 0..200 {
            confetti.update(f32::INFINITY);
        }
        let particle = &confetti.particles()[0];
        assert!(particle.vel.y > 4.0);
        assert!(particle.pos.y > 0.0);
    }

    #[test]
    fn stop_clears_everything() {
        let mut confetti = Confetti::new(default());
        confetti.burst(vec2::ZERO, &Palette::default(), &mut StdRng::seed_from_u64(3));
        confetti.stop();
        assert!(!confetti.is_active());
        let mut canvas = Recording::new(vec2(100.0, 100.0));
        confetti.draw(&mut canvas);
        assert!(canvas.ops.is_empty());
    }
}
