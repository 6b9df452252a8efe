use raylib::prelude::{Rectangle, Vector2};

use crate::constants::*;
use crate::slider::input::{InputEvent, Side};

/// Screen geometry of the slider: where slides, controls and dots go.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    width: f32,
    height: f32,
    count: usize,
}

impl Layout {
    pub fn new(width: i32, height: i32, count: usize) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            count,
        }
    }

    pub fn control_center(&self, side: Side) -> Vector2 {
        let x = match side {
            Side::Left => CONTROL_MARGIN,
            Side::Right => self.width - CONTROL_MARGIN,
        };
        Vector2::new(x, self.height * 0.5)
    }

    /// Distance between dot centres, shrunk so the whole row fits between the controls.
    fn dot_spacing(&self) -> f32 {
        let available = self.width - 2.0 * (CONTROL_MARGIN + CONTROL_RADIUS);
        DOT_SPACING.min(available.max(0.0) / self.count.max(1) as f32)
    }

    /// Dot radius, scaled down with the spacing.
    pub fn dot_radius(&self) -> f32 {
        DOT_RADIUS * self.dot_spacing() / DOT_SPACING
    }

    /// Dots are centred horizontally on one row near the bottom edge.
    pub fn dot_center(&self, index: usize) -> Vector2 {
        let spacing = self.dot_spacing();
        let row_width = spacing * (self.count.saturating_sub(1)) as f32;
        let first_x = (self.width - row_width) * 0.5;
        Vector2::new(
            first_x + spacing * index as f32,
            self.height - DOT_BOTTOM_MARGIN,
        )
    }

    /// Resolves a click to the control or indicator under it.
    pub fn hit_test(&self, point: Vector2) -> Option<InputEvent> {
        for side in [Side::Left, Side::Right] {
            if within(point, self.control_center(side), CONTROL_RADIUS) {
                return Some(InputEvent::Control(side));
            }
        }
        (0..self.count)
            .find(|&index| within(point, self.dot_center(index), self.dot_radius()))
            .map(InputEvent::Indicator)
    }

    /// Destination of a `tex_width` x `tex_height` image shifted by
    /// `offset` percent of the viewport width, scaled down to fit.
    pub fn slide_rect(&self, tex_width: f32, tex_height: f32, offset: f32) -> Rectangle {
        let max_width = self.width * SLIDE_FILL;
        let max_height = self.height * SLIDE_FILL;
        let scale = (max_width / tex_width).min(max_height / tex_height).min(1.0);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;
        let shift = self.width * offset / 100.0;

        Rectangle::new(
            (self.width - scaled_width) * 0.5 + shift,
            (self.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        )
    }

    /// Whether anything of a slide at `offset` percent is on screen.
    pub fn is_visible(offset: f32) -> bool {
        offset.abs() < 100.0
    }
}

fn within(point: Vector2, center: Vector2, radius: f32) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn controls_are_hit_on_their_centre() {
        let layout = Layout::new(800, 600, 3);
        let left = layout.control_center(Side::Left);
        let right = layout.control_center(Side::Right);
        assert_eq!(layout.hit_test(left), Some(InputEvent::Control(Side::Left)));
        assert_eq!(layout.hit_test(right), Some(InputEvent::Control(Side::Right)));
    }

    #[test]
    fn every_dot_resolves_to_its_own_ordinal() {
        let layout = Layout::new(800, 600, 5);
        for index in 0..5 {
            let center = layout.dot_center(index);
            assert_eq!(layout.hit_test(center), Some(InputEvent::Indicator(index)));
        }
    }

    #[test]
    fn dot_row_is_centred() {
        let layout = Layout::new(800, 600, 3);
        assert_eq!(layout.dot_center(1).x, 400.0);
        let single = Layout::new(800, 600, 1);
        assert_eq!(single.dot_center(0).x, 400.0);
    }

    #[test]
    fn clicks_between_dots_are_ignored() {
        let layout = Layout::new(800, 600, 3);
        let a = layout.dot_center(0);
        let b = layout.dot_center(1);
        let between = Vector2::new((a.x + b.x) * 0.5, a.y);
        assert_eq!(layout.hit_test(between), None);
        assert_eq!(layout.hit_test(Vector2::new(400.0, 300.0)), None);
    }

    #[test]
    fn crowded_dot_row_stays_between_the_controls() {
        let layout = Layout::new(1280, 720, 60);
        let radius = layout.dot_radius();
        assert!(radius > 0.0 && radius < DOT_RADIUS);
        let left = layout.control_center(Side::Left);
        let right = layout.control_center(Side::Right);
        for index in 0..60 {
            let center = layout.dot_center(index);
            assert!(center.x - radius >= 0.0 && center.x + radius <= 1280.0);
            assert!(center.y - radius >= 0.0 && center.y + radius <= 720.0);
            assert!(!within(center, left, CONTROL_RADIUS + radius));
            assert!(!within(center, right, CONTROL_RADIUS + radius));
            assert_eq!(layout.hit_test(center), Some(InputEvent::Indicator(index)));
        }
    }

    #[test]
    fn few_dots_keep_their_full_size() {
        let layout = Layout::new(1280, 720, 4);
        assert_eq!(layout.dot_radius(), DOT_RADIUS);
        assert_eq!(layout.dot_center(1).x - layout.dot_center(0).x, DOT_SPACING);
    }

    #[test]
    fn large_images_are_fitted_and_centred() {
        let layout = Layout::new(1000, 500, 1);
        let rect = layout.slide_rect(2000.0, 1000.0, 0.0);
        assert!(close(rect.width, 900.0));
        assert!(close(rect.height, 450.0));
        assert!(close(rect.x, 50.0));
        assert!(close(rect.y, 25.0));
    }

    #[test]
    fn small_images_keep_their_size() {
        let layout = Layout::new(1000, 500, 1);
        let rect = layout.slide_rect(100.0, 50.0, 0.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn offset_shifts_by_whole_viewports() {
        let layout = Layout::new(1000, 500, 2);
        let shown = layout.slide_rect(100.0, 50.0, 0.0);
        let next = layout.slide_rect(100.0, 50.0, 100.0);
        assert!(close(next.x - shown.x, 1000.0));
        assert!(Layout::is_visible(-99.0));
        assert!(!Layout::is_visible(100.0));
    }
}
