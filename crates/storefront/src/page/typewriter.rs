//! Typed-text effect for the banner subtitle.

/// Reveals a text one character per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    /// Start with nothing shown.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Reveal the next character and return everything shown so far, or
    /// `None` once the whole text is visible.
    pub fn step(&mut self) -> Option<&str> {
        let next = self.text.get(self.shown..)?.chars().next()?;
        self.shown += next.len_utf8();
        self.text.get(..self.shown)
    }

    /// Text currently visible.
    #[must_use]
    pub fn visible(&self) -> &str {
        self.text.get(..self.shown).unwrap_or_default()
    }

    /// Whether the whole text is visible.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shown >= self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_step() {
        let mut typewriter = Typewriter::new("Só hoje");
        assert_eq!(typewriter.visible(), "");
        assert_eq!(typewriter.step(), Some("S"));
        assert_eq!(typewriter.step(), Some("Só"));

        while typewriter.step().is_some() {}

        assert!(typewriter.is_finished());
        assert_eq!(typewriter.visible(), "Só hoje");
        assert_eq!(typewriter.step(), None);
    }

    #[test]
    fn test_empty_text_is_finished() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.step(), None);
    }
}
