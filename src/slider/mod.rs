pub mod engine;
pub mod indicator;
pub mod input;
pub mod layout;
pub mod slide;
pub mod state;

use log::{debug, warn};

use crate::error::SliderError;
use crate::slider::indicator::IndicatorSet;
use crate::slider::input::SlideHandler;
use crate::slider::slide::Slide;
use crate::slider::state::Position;

/// A fixed row of slides with one visible at a time.
///
/// `position` is the only real state: slide offsets and the active indicator
/// are rebuilt from it on every transition and never touched elsewhere.
pub struct Slider<T> {
    slides: Vec<Slide<T>>,
    position: Position,
    indicators: IndicatorSet,
}

impl<T> Slider<T> {
    /// Registers one slide and one indicator per item, then shows slide 0.
    pub fn new(contents: Vec<T>) -> Result<Self, SliderError> {
        if contents.is_empty() {
            return Err(SliderError::NoSlides);
        }

        let slides: Vec<Slide<T>> = contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| Slide::new(index, content))
            .collect();
        let count = slides.len();

        let mut slider = Self {
            slides,
            position: Position::new(count),
            indicators: IndicatorSet::new(count),
        };
        slider.go_to_slide(0);
        Ok(slider)
    }

    /// Moves slide `target` into the viewport and marks its indicator.
    ///
    /// `target` is not wrapped: an index outside `0..len()` is ignored.
    pub fn go_to_slide(&mut self, target: usize) {
        if target >= self.slides.len() {
            warn!("ignoring slide {} out of range 0..{}", target, self.slides.len());
            return;
        }
        self.position.set(target);
        for slide in self.slides.iter_mut() {
            slide.place(target);
        }
        self.mark_active(target);
    }

    pub fn advance(&mut self) {
        let from = self.position.current();
        let to = self.position.next();
        debug!("advance {} -> {}", from, to);
        self.go_to_slide(to);
    }

    pub fn retreat(&mut self) {
        let from = self.position.current();
        let to = self.position.prev();
        debug!("retreat {} -> {}", from, to);
        self.go_to_slide(to);
    }

    fn mark_active(&mut self, index: usize) {
        self.indicators.mark_active(index);
    }

    pub fn current(&self) -> usize {
        self.position.current()
    }

    pub(crate) fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }
}

impl<T> SlideHandler for Slider<T> {
    fn on_advance(&mut self) {
        self.advance();
    }

    fn on_retreat(&mut self) {
        self.retreat();
    }

    fn on_go_to(&mut self, index: usize) {
        debug!("go to {} -> {}", self.current(), index);
        self.go_to_slide(index);
    }
}
