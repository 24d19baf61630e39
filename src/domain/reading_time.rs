//! Estimated reading time for article bodies

use std::fmt;

/// Average reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Reading time estimate for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: usize,
}

impl ReadingTime {
    /// Estimate reading time for `text`, rounding minutes up.
    pub fn estimate(text: &str) -> Self {
        let words = text.split_whitespace().count();
        ReadingTime {
            words,
            minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let rt = ReadingTime::estimate("   \n ");
        assert_eq!(rt.words, 0);
        assert_eq!(rt.to_string(), "0 min read");
    }

    #[test]
    fn test_rounds_up() {
        let text = "word ".repeat(201);
        let rt = ReadingTime::estimate(&text);
        assert_eq!(rt.words, 201);
        assert_eq!(rt.minutes, 2);
    }

    #[test]
    fn test_exact_minutes() {
        let text = "word ".repeat(400);
        assert_eq!(ReadingTime::estimate(&text).to_string(), "2 min read");
    }
}
