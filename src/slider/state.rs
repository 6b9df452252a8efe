/// Index of the slide currently shown, always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    current: usize,
    len: usize,
}

impl Position {
    /// Starts at slide 0. `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "a position needs at least one slide");
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Index after `current`, wrapping from the last slide back to 0.
    pub fn next(&self) -> usize {
        if self.current == self.len - 1 {
            0
        } else {
            self.current + 1
        }
    }

    /// Index before `current`, wrapping from 0 to the last slide.
    pub fn prev(&self) -> usize {
        if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        }
    }

    pub(crate) fn set(&mut self, index: usize) {
        debug_assert!(index < self.len, "slide {} out of range 0..{}", index, self.len);
        self.current = index;
    }
}
