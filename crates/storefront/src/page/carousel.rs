//! Banner carousel.

/// Which slide of the banner carousel is showing.
///
/// Slide changes come from the next/prev buttons, the indicator dots, and
/// an auto-advance timer. With zero slides every operation does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides showing the first one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Index of the active slide (and active indicator).
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether slide `index` should carry the active class.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }

    /// Advance one slide, wrapping to the first.
    pub const fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Go back one slide, wrapping to the last.
    pub const fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jump to `index` (indicator click). Returns `false` and stays put when
    /// `index` is out of range.
    pub const fn show(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Timer tick: same as [`next`](Self::next).
    pub const fn auto_advance(&mut self) -> usize {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test]
    fn test_show() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.show(3));
        assert!(carousel.is_active(3));
        assert!(!carousel.show(4));
        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.auto_advance(), 0);
    }

    #[test]
    fn test_no_slides() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert!(!carousel.show(0));
        assert!(!carousel.is_active(0));
    }
}
