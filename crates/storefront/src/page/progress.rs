//! "Units sold" progress bar.

/// Progress bar that grows one percent per tick up to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoldProgress {
    width: u8,
    target: u8,
}

impl SoldProgress {
    /// A bar at 0% growing to `target` percent (capped at 100).
    #[must_use]
    pub fn new(target: u8) -> Self {
        Self {
            width: 0,
            target: target.min(100),
        }
    }

    /// Grow by one percent. Returns the new width, or `None` once the target
    /// has been reached and the timer should stop.
    pub fn tick(&mut self) -> Option<u8> {
        if self.is_complete() {
            return None;
        }
        self.width += 1;
        Some(self.width)
    }

    /// Whether the bar has reached its target.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.width >= self.target
    }

    /// Current width in percent.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Current width as a CSS value, e.g. `"42%"`.
    #[must_use]
    pub fn css_width(&self) -> String {
        format!("{}%", self.width)
    }
}
