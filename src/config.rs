use super::*;

use palette::{rgb, Palette};

#[derive(Debug, Clone, Deserialize)]
pub struct Spin {
    /// Seconds
    pub duration: f32,
    pub min_extra_turns: u32,
    pub max_extra_turns: u32,
    /// Fraction of a slice at each edge the pointer never stops on
    pub slice_margin: f32,
    /// Where the pointer sits, degrees clockwise from east
    pub pointer_angle: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            duration: 5.0,
            min_extra_turns: 5,
            max_extra_turns: 9,
            slice_margin: 0.1,
            pointer_angle: 270.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wheel {
    pub rim_margin: f32,
    pub label_inset: f32,
    pub label_max_size: f32,
    pub label_size_scale: f32,
    pub label_size_offset: f32,
    pub label_color: Rgba<f32>,
    pub border_color: Rgba<f32>,
    pub border_width: f32,
    pub hub_radius: f32,
    pub hub_inner_radius: f32,
    pub hub_color: Rgba<f32>,
    pub hub_inner_color: Rgba<f32>,
    pub pointer_size: f32,
    pub pointer_color: Rgba<f32>,
    pub placeholder_fill: Rgba<f32>,
    pub placeholder_stroke: Rgba<f32>,
    pub placeholder_stroke_width: f32,
    pub placeholder_text: String,
    pub placeholder_text_color: Rgba<f32>,
    pub placeholder_text_scale: f32,
}

impl Default for Wheel {
    fn default() -> Self {
        Self {
            rim_margin: 10.0,
            label_inset: 20.0,
            label_max_size: 20.0,
            label_size_scale: 300.0,
            label_size_offset: 12.0,
            label_color: rgb(0xFF, 0xFF, 0xFF),
            border_color: rgb(0x0F, 0x17, 0x2A),
            border_width: 1.0,
            hub_radius: 30.0,
            hub_inner_radius: 25.0,
            hub_color: rgb(0xFF, 0xFF, 0xFF),
            hub_inner_color: rgb(0xF4, 0x3F, 0x5E),
            pointer_size: 24.0,
            pointer_color: rgb(0xF8, 0xFA, 0xFC),
            placeholder_fill: rgb(0x1E, 0x29, 0x3B),
            placeholder_stroke: rgb(0x33, 0x41, 0x55),
            placeholder_stroke_width: 10.0,
            placeholder_text: "Add names to start".to_owned(),
            placeholder_text_color: rgb(0x64, 0x74, 0x8B),
            placeholder_text_scale: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Banner {
    pub pop_time: f32,
    pub dim: f32,
    pub title: String,
    pub hint: String,
    pub title_size: f32,
    pub name_size: f32,
    pub hint_size: f32,
    pub background: Rgba<f32>,
    pub text_color: Rgba<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub background: Rgba<f32>,
    pub text_color: Rgba<f32>,
    pub muted_text_color: Rgba<f32>,
    pub input_background: Rgba<f32>,
    pub input_focus_color: Rgba<f32>,
    /// Shown in the empty name input
    pub input_hint: String,
    /// Wheel takes the right part of the window when it is at least this wide
    pub side_panel_min_aspect: f32,
    pub side_panel_width: f32,
    pub row_height: f32,
    pub font_size: f32,
    pub padding: f32,
    /// Seconds a message stays on screen
    pub notice_time: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub max_entries: usize,
    pub palette: Palette,
    pub spin: Spin,
    pub wheel: Wheel,
    pub banner: Banner,
    pub layout: Layout,
}
