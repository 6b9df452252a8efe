use raylib::ease;
use raylib::prelude::*;

use crate::constants::CONTROL_RADIUS;
use crate::engine::Engine;
use crate::error::SliderError;
use crate::slider::input::{dispatch, InputEvent, Side};
use crate::slider::layout::Layout;
use crate::slider::Slider;

const CONTROL_FILL: Color = Color::new(255, 255, 255, 170);
const CONTROL_ARROW: Color = Color::new(40, 40, 40, 255);
const DOT_IDLE: Color = Color::new(180, 180, 180, 200);
const DOT_ACTIVE: Color = Color::WHITE;

/// Drawn position of one slide, eased toward the slider's offset.
///
/// Only the picture glides: the slider itself has already moved.
struct Track {
    drawn: f32,
    target: f32,
    tween: Option<ease::Tween>,
    timer: f32,
}

impl Track {
    fn new(offset: f32) -> Self {
        Self {
            drawn: offset,
            target: offset,
            tween: None,
            timer: 0.0,
        }
    }

    fn follow(&mut self, offset: f32, duration: f32) {
        if offset == self.target {
            return;
        }
        self.target = offset;
        if duration <= 0.0 {
            self.drawn = offset;
            self.tween = None;
        } else {
            self.tween = Some(ease::Tween::new(ease::cubic_out, self.drawn, offset, duration));
            self.timer = 0.0;
        }
    }

    fn update(&mut self, dt: f32, duration: f32) {
        if let Some(tween) = self.tween.as_mut() {
            self.drawn = tween.apply(dt);
            self.timer += dt;
            if self.timer >= duration {
                self.drawn = self.target;
                self.tween = None;
            }
        }
    }
}

pub struct SliderEngine {
    slider: Slider<Texture2D>,
    tracks: Vec<Track>,
    layout: Layout,
    render_size: Vector2,
    transition: f32,
}

impl SliderEngine {
    pub fn new(
        textures: Vec<Texture2D>,
        width: i32,
        height: i32,
        transition: f32,
    ) -> Result<Self, SliderError> {
        let slider = Slider::new(textures)?;
        let tracks = slider.slides().iter().map(|s| Track::new(s.offset())).collect();
        let layout = Layout::new(width, height, slider.len());

        Ok(Self {
            slider,
            tracks,
            layout,
            render_size: Vector2::new(width as f32, height as f32),
            transition,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slider.len()
    }
}

fn arrow_event(key: KeyboardKey) -> Option<InputEvent> {
    match key {
        KeyboardKey::KEY_LEFT => Some(InputEvent::Arrow(Side::Left)),
        KeyboardKey::KEY_RIGHT => Some(InputEvent::Arrow(Side::Right)),
        _ => None,
    }
}

/// Maps a window point into the fixed-size render target the window shows stretched.
fn to_render_space(point: Vector2, screen: Vector2, render: Vector2) -> Vector2 {
    Vector2::new(
        point.x * render.x / screen.x.max(1.0),
        point.y * render.y / screen.y.max(1.0),
    )
}

fn draw_control(d: &mut RaylibDrawHandle, center: Vector2, side: Side) {
    d.draw_circle_v(center, CONTROL_RADIUS, CONTROL_FILL);
    let (cx, cy) = (center.x, center.y);
    // counter-clockwise, or raylib culls the triangle
    let (a, b, c) = match side {
        Side::Left => (
            Vector2::new(cx - 10.0, cy),
            Vector2::new(cx + 6.0, cy + 10.0),
            Vector2::new(cx + 6.0, cy - 10.0),
        ),
        Side::Right => (
            Vector2::new(cx + 10.0, cy),
            Vector2::new(cx - 6.0, cy - 10.0),
            Vector2::new(cx - 6.0, cy + 10.0),
        ),
    };
    d.draw_triangle(a, b, c, CONTROL_ARROW);
}

impl Engine for SliderEngine {
    fn handle_input(&mut self, rl: &mut RaylibHandle) {
        let mut events = Vec::new();
        while let Some(key) = rl.get_key_pressed() {
            events.extend(arrow_event(key));
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            let point = to_render_space(rl.get_mouse_position(), screen, self.render_size);
            events.extend(self.layout.hit_test(point));
        }

        dispatch(&mut self.slider, events);

        for (track, slide) in self.tracks.iter_mut().zip(self.slider.slides()) {
            track.follow(slide.offset(), self.transition);
        }
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        for track in self.tracks.iter_mut() {
            track.update(dt, self.transition);
        }

        let slider = &self.slider;
        let tracks = &self.tracks;
        let layout = self.layout;

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            for (slide, track) in slider.slides().iter().zip(tracks) {
                if !Layout::is_visible(track.drawn) {
                    continue;
                }
                let texture = &slide.content;
                let (tex_width, tex_height) = (texture.width() as f32, texture.height() as f32);
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    layout.slide_rect(tex_width, tex_height, track.drawn),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }

            for side in [Side::Left, Side::Right] {
                draw_control(&mut d, layout.control_center(side), side);
            }

            let dot_radius = layout.dot_radius();
            for indicator in slider.indicators().iter() {
                let color = if indicator.active { DOT_ACTIVE } else { DOT_IDLE };
                d.draw_circle_v(layout.dot_center(indicator.index), dot_radius, color);
            }
        });
    }
}
