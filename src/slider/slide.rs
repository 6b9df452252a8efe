/// A panel of the slider. Membership and ordinal are fixed at creation,
/// only the horizontal offset changes afterwards.
pub struct Slide<T> {
    pub content: T,
    index: usize,
    /// Horizontal offset in percent of the viewport width.
    offset: f32,
}

impl<T> Slide<T> {
    pub fn new(index: usize, content: T) -> Self {
        Self {
            content,
            index,
            offset: 0.0,
        }
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Places the slide relative to the slide at `target`.
    pub(crate) fn place(&mut self, target: usize) {
        self.offset = slide_offset(self.index, target);
    }
}

/// Offset of slide `index` when slide `target` occupies the viewport:
/// 100% per unit of ordinal distance, negative to the left.
pub fn slide_offset(index: usize, target: usize) -> f32 {
    100.0 * (index as f32 - target as f32)
}
