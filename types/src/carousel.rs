//! Carousel index state.

/// Integer index into a fixed, immutable ordered list of cards.
///
/// The index wraps modulo list length in both directions. Exactly one card is
/// visible and exactly one indicator is active at all times. Nothing here is
/// persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// Create a carousel over `len` cards, starting at the first.
    ///
    /// A zero-length carousel is permitted; all movement on it is a no-op.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the next card, wrapping past the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back to the previous card, wrapping past the start.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump directly to index `i`. Returns `false` (and leaves the state
    /// unchanged) when `i` is out of range.
    pub fn goto(&mut self, i: usize) -> bool {
        if i < self.len {
            self.index = i;
            true
        } else {
            false
        }
    }

    /// Whether the indicator at position `i` should be marked active.
    #[must_use]
    pub const fn is_active(&self, i: usize) -> bool {
        self.len > 0 && i == self.index
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselState;

    #[test]
    fn next_wraps_to_start_after_full_cycle() {
        let mut state = CarouselState::new(4);
        for _ in 0..4 {
            state.next();
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut state = CarouselState::new(4);
        state.previous();
        assert_eq!(state.index(), 3);
        state.previous();
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn goto_validates_range() {
        let mut state = CarouselState::new(4);
        assert!(state.goto(2));
        assert_eq!(state.index(), 2);
        assert!(!state.goto(4));
        assert_eq!(state.index(), 2, "rejected goto must not move the index");
    }

    #[test]
    fn exactly_one_indicator_active() {
        let mut state = CarouselState::new(4);
        state.goto(1);
        let active: Vec<usize> = (0..4).filter(|&i| state.is_active(i)).collect();
        assert_eq!(active, [1]);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut state = CarouselState::new(0);
        state.next();
        state.previous();
        assert!(!state.goto(0));
        assert_eq!(state.index(), 0);
        assert!(!state.is_active(0));
    }
}
