/// One marker per slide, addressed by the slide's ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSet {
    indicators: Vec<Indicator>,
}

impl IndicatorSet {
    /// Creates `count` inactive indicators in slide order.
    pub fn new(count: usize) -> Self {
        let indicators = (0..count)
            .map(|index| Indicator { index, active: false })
            .collect();
        Self { indicators }
    }

    /// Clears every marker, then activates the one at `index`.
    pub fn mark_active(&mut self, index: usize) {
        for indicator in self.indicators.iter_mut() {
            indicator.active = false;
        }
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.active = true;
        }
    }

    /// Index of the active marker, `None` only before the first `mark_active`.
    #[cfg(test)]
    pub fn active(&self) -> Option<usize> {
        self.indicators.iter().find(|i| i.active).map(|i| i.index)
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.indicators.iter().filter(|i| i.active).count()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_has_nothing_active() {
        let set = IndicatorSet::new(4);
        assert_eq!(set.len(), 4);
        assert_eq!(set.active(), None);
        assert_eq!(set.active_count(), 0);
    }

    #[test]
    fn indicators_keep_slide_order() {
        let set = IndicatorSet::new(3);
        let indices: Vec<usize> = set.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn mark_active_moves_the_single_marker() {
        let mut set = IndicatorSet::new(4);
        set.mark_active(1);
        set.mark_active(3);
        assert_eq!(set.active(), Some(3));
        assert_eq!(set.active_count(), 1);
    }
}
