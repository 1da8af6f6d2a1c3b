use super::*;

use canvas::{Align, Canvas};
use palette::Palette;
use wheel::WheelState;

/// Where the wheel goes on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub center: vec2<f32>,
    /// Side of the square area the wheel is fit into
    pub side: f32,
}

impl Geometry {
    pub fn fit(area: Aabb2<f32>) -> Self {
        Self {
            center: area.center(),
            side: partial_min(area.width(), area.height()),
        }
    }

    pub fn radius(&self, config: &config::Wheel) -> f32 {
        (self.side / 2.0 - config.rim_margin).max(0.0)
    }

    pub fn contains(&self, config: &config::Wheel, pos: vec2<f32>) -> bool {
        (pos - self.center).len() <= self.radius(config)
    }
}

pub struct WheelRenderer<'a> {
    pub config: &'a config::Wheel,
    pub palette: &'a Palette,
    pub pointer_angle: f32,
}

impl WheelRenderer<'_> {
    pub fn label_size(&self, count: usize) -> f32 {
        partial_min(
            self.config.label_max_size,
            self.config.label_size_scale / count.max(1) as f32 + self.config.label_size_offset,
        )
    }

    pub fn draw(&self, state: &WheelState, geometry: Geometry, canvas: &mut impl Canvas) {
        let Some(slice) = state.slice_angle() else {
            self.draw_placeholder(geometry, canvas);
            return;
        };
        let slice = slice as f32;
        let center = geometry.center;
        let radius = geometry.radius(self.config);

        canvas.save();
        canvas.translate(center);
        // reduce before narrowing, the raw value can be millions of degrees
        canvas.rotate(Angle::from_degrees(
            state.rotation_degrees.rem_euclid(360.0) as f32,
        ));
        let label_size = self.label_size(state.entries.len());
        for (i, entry) in state.entries.iter().enumerate() {
            let start = i as f32 * slice;
            canvas.fill_sector(
                vec2::ZERO,
                radius,
                Angle::from_degrees(start),
                Angle::from_degrees(start + slice),
                self.palette.get(i),
            );
            if state.entries.len() > 1 {
                canvas.stroke_line(
                    vec2::ZERO,
                    canvas::on_circle(vec2::ZERO, radius, Angle::from_degrees(start)),
                    self.config.border_width,
                    self.config.border_color,
                );
            }

            canvas.save();
            canvas.rotate(Angle::from_degrees(start + slice / 2.0));
            canvas.text(
                entry.label(),
                vec2(radius - self.config.label_inset, 0.0),
                label_size,
                Align::Right,
                self.config.label_color,
            );
            canvas.restore();
        }
        canvas.restore();

        self.draw_hub(center, canvas);
        self.draw_pointer(center, radius, canvas);
    }

    fn draw_placeholder(&self, geometry: Geometry, canvas: &mut impl Canvas) {
        let radius = geometry.radius(self.config);
        canvas.fill_circle(geometry.center, radius, self.config.placeholder_fill);
        canvas.stroke_circle(
            geometry.center,
            radius,
            self.config.placeholder_stroke_width,
            self.config.placeholder_stroke,
        );
        canvas.text(
            &self.config.placeholder_text,
            geometry.center,
            geometry.side * self.config.placeholder_text_scale,
            Align::Center,
            self.config.placeholder_text_color,
        );
    }

    fn draw_hub(&self, center: vec2<f32>, canvas: &mut impl Canvas) {
        canvas.fill_circle(center, self.config.hub_radius, self.config.hub_color);
        canvas.fill_circle(
            center,
            self.config.hub_inner_radius,
            self.config.hub_inner_color,
        );
    }

    /// Triangle sticking into the wheel from outside, tip at the rim
    fn draw_pointer(&self, center: vec2<f32>, radius: f32, canvas: &mut impl Canvas) {
        let angle = Angle::from_degrees(self.pointer_angle);
        let size = self.config.pointer_size;
        let tip = canvas::on_circle(center, radius - size / 2.0, angle);
        let back = canvas::on_circle(center, radius + size / 2.0, angle);
        let side = (back - tip).normalize_or_zero().rotate_90() * size / 2.0;
        canvas.fill_polygon(&[tip, back + side, back - side], self.config.pointer_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use canvas::{Op, Recording};
    use entries::Entry;

    fn renderer<'a>(config: &'a config::Wheel, palette: &'a Palette) -> WheelRenderer<'a> {
        WheelRenderer {
            config,
            palette,
            pointer_angle: 270.0,
        }
    }

    fn geometry() -> Geometry {
        Geometry::fit(Aabb2::point(vec2::ZERO).extend_positive(vec2(400.0, 400.0)))
    }

    #[test]
    fn empty_wheel_draws_placeholder() {
        let config = config::Wheel::default();
        let palette = Palette::default();
        let mut canvas = Recording::new(vec2(400.0, 400.0));
        renderer(&config, &palette).draw(&WheelState::new(50), geometry(), &mut canvas);
        let texts: Vec<&str> = canvas.texts().collect();
        assert_eq!(texts, [config.placeholder_text.as_str()]);
        assert_eq!(canvas.polygons_colored(config.placeholder_fill), 1);
    }

    #[test]
    fn slices_cycle_palette() {
        let config = config::Wheel::default();
        let palette = Palette::default();
        let mut state = WheelState::new(50);
        state
            .entries
            .add_batch((0..12).map(|i| Entry::new(format!("name {i}"))).collect())
            .unwrap();
        let mut canvas = Recording::new(vec2(400.0, 400.0));
        renderer(&config, &palette).draw(&state, geometry(), &mut canvas);
        // slices 1 and 11 share a color, nothing else draws it
        assert_eq!(canvas.polygons_colored(palette.get(1)), 2);
        assert_eq!(canvas.texts().count(), 12);
    }

    fn label_of(canvas: &Recording, label: &str) -> (vec2<f32>, Angle<f32>) {
        canvas
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Text {
                    text, pos, rotation, ..
                } if text == label => Some((*pos, *rotation)),
                _ => None,
            })
            .unwrap()
    }

    fn abc(rotation: f64) -> WheelState {
        let mut state = WheelState::new(50);
        state
            .entries
            .add_batch(vec![Entry::new("A"), Entry::new("B"), Entry::new("C")])
            .unwrap();
        state.rotation_degrees = rotation;
        state
    }

    #[test]
    fn labels_follow_rotation() {
        let config = config::Wheel::default();
        let palette = Palette::default();
        let state = abc(90.0 + 360.0 * 6.0);
        let geometry = geometry();
        let mut canvas = Recording::new(vec2(400.0, 400.0));
        renderer(&config, &palette).draw(&state, geometry, &mut canvas);
        let (pos, rotation) = label_of(&canvas, "B");
        // B's bisector is at 180, rotated by 90 it points up
        assert!((rotation.as_radians().to_degrees().rem_euclid(360.0) - 270.0).abs() < 1e-2);
        let radius = geometry.radius(&config) - config.label_inset;
        assert!((pos - (geometry.center - vec2(0.0, radius))).len() < 0.1);
    }

    #[test]
    fn huge_rotation_draws_like_its_remainder() {
        let config = config::Wheel::default();
        let palette = Palette::default();
        let turns = 360.0 * 4_000_000.0;
        let mut near = Recording::new(vec2(400.0, 400.0));
        renderer(&config, &palette).draw(&abc(90.0 + 0.5), geometry(), &mut near);
        let mut far = Recording::new(vec2(400.0, 400.0));
        renderer(&config, &palette).draw(&abc(turns + 90.0 + 0.5), geometry(), &mut far);
        let (near_pos, _) = label_of(&near, "B");
        let (far_pos, _) = label_of(&far, "B");
        assert!((near_pos - far_pos).len() < 0.01);
    }

    #[test]
    fn label_size_shrinks_with_count() {
        let config = config::Wheel::default();
        let palette = Palette::default();
        let renderer = renderer(&config, &palette);
        assert_eq!(renderer.label_size(3), 20.0);
        assert_eq!(renderer.label_size(50), 18.0);
    }

    #[test]
    fn geometry_fits_square() {
        let geometry = Geometry::fit(Aabb2::point(vec2::ZERO).extend_positive(vec2(800.0, 500.0)));
        assert_eq!(geometry.side, 500.0);
        assert_eq!(geometry.center, vec2(400.0, 250.0));
        let config = config::Wheel::default();
        assert_eq!(geometry.radius(&config), 240.0);
        assert!(geometry.contains(&config, vec2(400.0, 20.0)));
        assert!(!geometry.contains(&config, vec2(10.0, 10.0)));
    }
}
