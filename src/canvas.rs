//! 2d drawing surface in pixel coordinates, origin top left, y going down.
//!
//! Angles follow the same convention: 0 is east, positive is clockwise on screen.

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub matrix: mat3<f32>,
    pub rotation: Angle<f32>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: mat3::identity(),
            rotation: Angle::ZERO,
        }
    }

    pub fn apply(&self, p: vec2<f32>) -> vec2<f32> {
        (self.matrix * p.extend(1.0)).xy()
    }
}

/// Save/restore stack of transforms, shared by the canvas implementations
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self {
            current: Transform::identity(),
            saved: Vec::new(),
        }
    }
}

impl TransformStack {
    pub fn current(&self) -> &Transform {
        &self.current
    }
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.pop() {
            self.current = saved;
        } else {
            log::warn!("canvas restore without matching save");
        }
    }
    pub fn translate(&mut self, offset: vec2<f32>) {
        self.current.matrix = self.current.matrix * mat3::translate(offset);
    }
    pub fn rotate(&mut self, angle: Angle<f32>) {
        self.current.matrix = self.current.matrix * mat3::rotate(angle);
        self.current.rotation += angle;
    }
}

/// Point on a circle, using the screen angle convention
pub fn on_circle(center: vec2<f32>, radius: f32, angle: Angle<f32>) -> vec2<f32> {
    let (sin, cos) = angle.sin_cos();
    center + vec2(cos, sin) * radius
}

/// Outline of a pie slice, starting at the center
pub fn sector_points(
    center: vec2<f32>,
    radius: f32,
    start: Angle<f32>,
    end: Angle<f32>,
) -> Vec<vec2<f32>> {
    let (start, end) = (start.as_radians(), end.as_radians());
    let steps = (((end - start).abs() / (5.0f32).to_radians()).ceil() as usize).max(1);
    std::iter::once(center)
        .chain((0..=steps).map(|i| {
            let t = i as f32 / steps as f32;
            on_circle(center, radius, Angle::from_radians(start + (end - start) * t))
        }))
        .collect()
}

pub trait Canvas {
    fn size(&self) -> vec2<f32>;
    fn transforms(&mut self) -> &mut TransformStack;

    fn fill_polygon(&mut self, points: &[vec2<f32>], color: Rgba<f32>);
    fn text(&mut self, text: &str, pos: vec2<f32>, size: f32, align: Align, color: Rgba<f32>);

    fn save(&mut self) {
        self.transforms().save();
    }
    fn restore(&mut self) {
        self.transforms().restore();
    }
    fn translate(&mut self, offset: vec2<f32>) {
        self.transforms().translate(offset);
    }
    fn rotate(&mut self, angle: Angle<f32>) {
        self.transforms().rotate(angle);
    }

    fn fill_sector(
        &mut self,
        center: vec2<f32>,
        radius: f32,
        start: Angle<f32>,
        end: Angle<f32>,
        color: Rgba<f32>,
    ) {
        self.fill_polygon(&sector_points(center, radius, start, end), color);
    }
    fn fill_circle(&mut self, center: vec2<f32>, radius: f32, color: Rgba<f32>) {
        self.fill_sector(
            center,
            radius,
            Angle::ZERO,
            Angle::from_degrees(360.0),
            color,
        );
    }
    /// Ring of `width` centered on `radius`
    fn stroke_circle(&mut self, center: vec2<f32>, radius: f32, width: f32, color: Rgba<f32>) {
        const SEGMENTS: usize = 72;
        let inner = radius - width / 2.0;
        let outer = radius + width / 2.0;
        for i in 0..SEGMENTS {
            let a = Angle::from_degrees(360.0 * i as f32 / SEGMENTS as f32);
            let b = Angle::from_degrees(360.0 * (i + 1) as f32 / SEGMENTS as f32);
            self.fill_polygon(
                &[
                    on_circle(center, inner, a),
                    on_circle(center, outer, a),
                    on_circle(center, outer, b),
                    on_circle(center, inner, b),
                ],
                color,
            );
        }
    }
    fn stroke_line(&mut self, a: vec2<f32>, b: vec2<f32>, width: f32, color: Rgba<f32>) {
        let normal = (b - a).normalize_or_zero().rotate_90() * width / 2.0;
        self.fill_polygon(&[a + normal, b + normal, b - normal, a - normal], color);
    }
    fn fill_rect(&mut self, rect: Aabb2<f32>, color: Rgba<f32>) {
        self.fill_polygon(
            &[
                rect.min,
                vec2(rect.max.x, rect.min.y),
                rect.max,
                vec2(rect.min.x, rect.max.y),
            ],
            color,
        );
    }
}

#[derive(Debug, Clone)]
pub enum Op {
    Polygon {
        points: Vec<vec2<f32>>,
        color: Rgba<f32>,
    },
    Text {
        text: String,
        pos: vec2<f32>,
        rotation: Angle<f32>,
        size: f32,
        align: Align,
        color: Rgba<f32>,
    },
}

/// Canvas that keeps everything drawn on it, with transforms already applied
#[derive(Debug)]
pub struct Recording {
    size: vec2<f32>,
    transforms: TransformStack,
    pub ops: Vec<Op>,
}

impl Recording {
    pub fn new(size: vec2<f32>) -> Self {
        Self {
            size,
            transforms: default(),
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            Op::Polygon { .. } => None,
        })
    }

    pub fn polygons_colored(&self, color: Rgba<f32>) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Polygon { color: c, .. } if *c == color))
            .count()
    }
}

impl Canvas for Recording {
    fn size(&self) -> vec2<f32> {
        self.size
    }
    fn transforms(&mut self) -> &mut TransformStack {
        &mut self.transforms
    }
    fn fill_polygon(&mut self, points: &[vec2<f32>], color: Rgba<f32>) {
        let transform = self.transforms.current();
        let points = points.iter().map(|&p| transform.apply(p)).collect();
        self.ops.push(Op::Polygon { points, color });
    }
    fn text(&mut self, text: &str, pos: vec2<f32>, size: f32, align: Align, color: Rgba<f32>) {
        let transform = *self.transforms.current();
        self.ops.push(Op::Text {
            text: text.to_owned(),
            pos: transform.apply(pos),
            rotation: transform.rotation,
            size,
            align,
            color,
        });
    }
}

/// Draws into a geng framebuffer
pub struct GengCanvas<'a, 'f> {
    geng: &'a Geng,
    framebuffer: &'a mut ugli::Framebuffer<'f>,
    camera: geng::PixelPerfectCamera,
    size: vec2<f32>,
    transforms: TransformStack,
}

impl<'a, 'f> GengCanvas<'a, 'f> {
    pub fn new(geng: &'a Geng, framebuffer: &'a mut ugli::Framebuffer<'f>) -> Self {
        let size = framebuffer.size().map(|x| x as f32);
        Self {
            geng,
            framebuffer,
            camera: geng::PixelPerfectCamera,
            size,
            transforms: default(),
        }
    }

    pub fn clear(&mut self, color: Rgba<f32>) {
        ugli::clear(self.framebuffer, Some(color), None, None);
    }

    /// Our y goes down, the camera's goes up
    fn to_screen(&self, p: vec2<f32>) -> vec2<f32> {
        let p = self.transforms.current().apply(p);
        vec2(p.x, self.size.y - p.y)
    }
}

impl Canvas for GengCanvas<'_, '_> {
    fn size(&self) -> vec2<f32> {
        self.size
    }
    fn transforms(&mut self) -> &mut TransformStack {
        &mut self.transforms
    }
    fn fill_polygon(&mut self, points: &[vec2<f32>], color: Rgba<f32>) {
        let vertices = points.iter().map(|&p| self.to_screen(p)).collect();
        self.geng.draw2d().draw2d(
            self.framebuffer,
            &self.camera,
            &geng::draw2d::Polygon::new(vertices, color),
        );
    }
    fn text(&mut self, text: &str, pos: vec2<f32>, size: f32, align: Align, color: Rgba<f32>) {
        let align = match align {
            Align::Left => geng::TextAlign::LEFT,
            Align::Center => geng::TextAlign::CENTER,
            Align::Right => geng::TextAlign::RIGHT,
        };
        let pos = self.to_screen(pos);
        let rotation = Angle::from_radians(-self.transforms.current().rotation.as_radians());
        self.geng.default_font().draw(
            self.framebuffer,
            &self.camera,
            text,
            vec2(align, geng::TextAlign::CENTER),
            mat3::translate(pos) * mat3::rotate(rotation) * mat3::scale_uniform(size),
            color,
        );
    }
}
