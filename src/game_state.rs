use super::*;

use canvas::{Align, Canvas, GengCanvas};
use render::{Geometry, WheelRenderer};
use session::{EditError, Session};

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        const CAN_QUIT: bool = false;
    } else {
        const CAN_QUIT: bool = true;
    }
}

struct Notice {
    text: String,
    time_left: f32,
}

struct Layout {
    wheel: Geometry,
    input: Aabb2<f32>,
    list: Aabb2<f32>,
    row_height: f32,
}

impl Layout {
    fn count_line(&self) -> f32 {
        self.input.max.y + self.row_height * 0.75
    }

    fn first_row(&self) -> f32 {
        self.input.max.y + self.row_height * 1.5
    }

    fn row_at(&self, pos: vec2<f32>, rows: usize) -> Option<usize> {
        if !self.list.contains(pos) || pos.y < self.first_row() {
            return None;
        }
        let row = ((pos.y - self.first_row()) / self.row_height).floor() as usize;
        (row < rows).then_some(row)
    }
}

pub struct GameState {
    ctx: Ctx,
    framebuffer_size: vec2<f32>,
    session: Session<Timer>,
    notice: Option<Notice>,
    /// Keys go to the name input instead of the shortcuts
    editing: bool,
    quit: bool,
}

impl GameState {
    pub fn new(ctx: &Ctx) -> Self {
        Self {
            ctx: ctx.clone(),
            framebuffer_size: vec2::splat(1.0),
            session: Session::new(
                ctx.config.max_entries,
                Timer::new(),
                ctx.config.spin.clone(),
                ctx.confetti.clone(),
            ),
            notice: None,
            editing: false,
            quit: false,
        }
    }

    pub fn add_initial_entries(&mut self, entry_args: &[String], names: Option<&str>) {
        match self.session.add_initial(entry_args, names) {
            Ok(added) => log::info!("{added} entries on the wheel"),
            Err(e) => self.edit_failed(e),
        }
    }

    fn edit_failed(&mut self, error: EditError) {
        if let EditError::Busy = error {
            log::debug!("{error}");
            return;
        }
        log::warn!("{error}");
        self.notify(error.to_string());
    }

    fn notify(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            time_left: self.ctx.config.layout.notice_time,
        });
    }

    fn layout(&self) -> Layout {
        let config = &self.ctx.config.layout;
        let size = self.framebuffer_size;
        let (wheel, list) = if size.x >= size.y * config.side_panel_min_aspect {
            let split = size.x * config.side_panel_width;
            (
                Aabb2::point(vec2(split, 0.0)).extend_positive(vec2(size.x - split, size.y)),
                Aabb2::point(vec2::ZERO).extend_positive(vec2(split, size.y)),
            )
        } else {
            let split = partial_min(size.x, size.y * 0.6);
            (
                Aabb2::point(vec2::ZERO).extend_positive(vec2(size.x, split)),
                Aabb2::point(vec2(0.0, split)).extend_positive(vec2(size.x, size.y - split)),
            )
        };
        let list = list.extend_uniform(-config.padding);
        let rows = self.session.wheel().entries.max().max(1) as f32 + 3.0;
        let row_height = partial_min(config.row_height, list.height() / rows).max(1.0);
        Layout {
            wheel: Geometry::fit(wheel),
            input: Aabb2::point(list.min).extend_positive(vec2(list.width(), row_height * 1.5)),
            list,
            row_height,
        }
    }

    fn start_editing(&mut self) {
        self.editing = true;
        self.ctx.geng.window().start_text_edit(self.session.input());
    }

    fn stop_editing(&mut self) {
        self.editing = false;
        self.ctx.geng.window().stop_text_edit();
    }

    /// Puts our copy of the input back into the window's text edit
    fn sync_text_edit(&self) {
        if self.editing {
            self.ctx.geng.window().start_text_edit(self.session.input());
        }
    }

    fn submit_input(&mut self) {
        match self.session.submit_input() {
            Ok(added) => {
                log::info!("added {added} entries");
                self.sync_text_edit();
            }
            Err(e) => self.edit_failed(e),
        }
    }

    fn try_spin(&mut self) {
        match self.session.spin(&mut thread_rng()) {
            Ok(result) => log::info!(
                "spin started, landing at {:.1}",
                result.final_rotation_degrees
            ),
            Err(e) => log::debug!("spin ignored: {e}"),
        }
    }

    fn remove_entry(&mut self, index: usize) {
        match self.session.remove(index) {
            Ok(removed) => log::debug!("removed {removed}"),
            Err(e) => self.edit_failed(e),
        }
    }

    fn clear(&mut self) {
        match self.session.clear() {
            Ok(()) => log::info!("wheel cleared"),
            Err(e) => self.edit_failed(e),
        }
    }

    fn key_press(&mut self, key: geng::Key) {
        let ctx = self.ctx.clone();
        let controls = &ctx.controls;
        if self.session.banner().is_some() {
            if controls.confirm.contains(&key) {
                self.session.confirm_winner();
            }
        } else if self.editing {
            if controls.add.contains(&key) {
                self.submit_input();
            } else if controls.clear_input.contains(&key) {
                self.session.clear_input();
                self.sync_text_edit();
            } else if controls.edit.contains(&key) {
                self.stop_editing();
            }
        } else if controls.quit.contains(&key) && CAN_QUIT {
            self.quit = true;
        } else if controls.edit.contains(&key) {
            self.start_editing();
        } else if controls.spin.contains(&key) {
            self.try_spin();
        } else if controls.clear.contains(&key) {
            self.clear();
        } else if controls.remove_last.contains(&key) {
            if let Some(last) = self.session.wheel().entries.len().checked_sub(1) {
                self.remove_entry(last);
            }
        }
    }

    fn press(&mut self, window_pos: vec2<f64>) {
        if self.session.banner().is_some() {
            self.session.confirm_winner();
            return;
        }
        let pos = window_pos.map(|x| x as f32);
        let pos = vec2(pos.x, self.framebuffer_size.y - pos.y);
        let layout = self.layout();
        if layout.input.contains(pos) {
            self.start_editing();
            return;
        }
        if self.editing {
            self.stop_editing();
        }
        if layout.wheel.contains(&self.ctx.config.wheel, pos) {
            self.try_spin();
        } else if let Some(row) = layout.row_at(pos, self.session.wheel().entries.len()) {
            self.remove_entry(row);
        }
    }

    pub async fn run(mut self) {
        let ctx = self.ctx.clone();
        let mut timer = Timer::new();
        while let Some(event) = ctx.geng.window().events().next().await {
            if let geng::Event::Draw = event {
                self.update(timer.tick());
                geng::async_state::with_current_framebuffer(ctx.geng.window(), |framebuffer| {
                    self.draw(framebuffer)
                });
            } else {
                self.handle_event(event);
            }
            if self.quit {
                break;
            }
        }
    }

    fn update(&mut self, delta_time: time::Duration) {
        let delta_time = delta_time.as_secs_f64() as f32;

        self.session.update(
            delta_time,
            self.framebuffer_size,
            &self.ctx.config.palette,
            &mut thread_rng(),
        );
        if let Some(notice) = &mut self.notice {
            notice.time_left -= delta_time;
            if notice.time_left <= 0.0 {
                self.notice = None;
            }
        }
    }

    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        self.framebuffer_size = framebuffer.size().map(|x| x as f32);
        let config = &self.ctx.config;
        let layout = self.layout();
        let mut canvas = GengCanvas::new(&self.ctx.geng, framebuffer);
        canvas.clear(config.layout.background);

        WheelRenderer {
            config: &config.wheel,
            palette: &config.palette,
            pointer_angle: config.spin.pointer_angle,
        }
        .draw(self.session.wheel(), layout.wheel, &mut canvas);

        self.draw_input(&layout, &mut canvas);
        self.draw_list(&layout, &mut canvas);

        if let Some(notice) = &self.notice {
            canvas.text(
                &notice.text,
                vec2(
                    self.framebuffer_size.x / 2.0,
                    self.framebuffer_size.y - config.layout.font_size,
                ),
                config.layout.font_size,
                Align::Center,
                config.wheel.hub_inner_color,
            );
        }

        if let Some(banner) = self.session.banner() {
            banner.draw(&config.banner, &mut canvas);
        }
        self.session.confetti().draw(&mut canvas);
    }

    fn draw_input(&self, layout: &Layout, canvas: &mut impl Canvas) {
        let config = &self.ctx.config.layout;
        let rect = layout.input;
        if self.editing {
            canvas.fill_rect(rect.extend_uniform(2.0), config.input_focus_color);
        }
        canvas.fill_rect(rect, config.input_background);
        let input = self.session.input().replace('\n', " / ");
        let (text, color) = if self.editing {
            (format!("{input}|"), config.text_color)
        } else if input.is_empty() {
            (config.input_hint.clone(), config.muted_text_color)
        } else {
            (input, config.text_color)
        };
        canvas.text(
            &text,
            vec2(rect.min.x + config.padding / 2.0, rect.center().y),
            partial_min(config.font_size, layout.row_height * 0.8),
            Align::Left,
            color,
        );
    }

    fn draw_list(&self, layout: &Layout, canvas: &mut impl Canvas) {
        let config = &self.ctx.config.layout;
        let entries = &self.session.wheel().entries;
        let size = partial_min(config.font_size, layout.row_height * 0.8);
        canvas.text(
            &format!("{} / {}", entries.len(), entries.max()),
            vec2(layout.list.min.x, layout.count_line()),
            config.font_size,
            Align::Left,
            config.text_color,
        );
        let color = if self.session.locked() {
            config.muted_text_color
        } else {
            config.text_color
        };
        for (i, entry) in entries.iter().enumerate() {
            let y = layout.first_row() + (i as f32 + 0.5) * layout.row_height;
            canvas.text(
                &format!("{}. {entry}", i + 1),
                vec2(layout.list.min.x, y),
                size,
                Align::Left,
                color,
            );
            canvas.text(
                "×",
                vec2(layout.list.max.x, y),
                size,
                Align::Right,
                config.muted_text_color,
            );
        }
    }

    fn handle_event(&mut self, event: geng::Event) {
        match event {
            geng::Event::KeyPress { key } => {
                self.key_press(key);
            }
            geng::Event::MousePress { .. } => {
                if let Some(pos) = self.ctx.geng.window().cursor_position() {
                    self.press(pos);
                }
            }
            geng::Event::TouchStart(touch) => {
                self.press(touch.position);
            }
            geng::Event::EditText(text) => {
                if self.editing {
                    self.session.set_input(text);
                }
            }
            _ => {}
        }
    }
}
