//! Typing animation for the home section's role line.

use std::time::{Duration, Instant};

/// Delay between typed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(150);
/// Pause on a fully typed word.
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);
/// Delay between deleted characters.
pub const DELETE_DELAY: Duration = Duration::from_millis(80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types, holds and deletes each word in turn, cycling forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    shown: usize,
    phase: Phase,
    next_step: Instant,
}

impl Typewriter {
    /// Start typing the first word at `now`. An empty list shows nothing.
    pub fn new(words: Vec<String>, now: Instant) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            next_step: now + TYPE_DELAY,
        }
    }

    /// The currently visible prefix of the current word.
    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Index of the word being shown.
    pub fn word_index(&self) -> usize {
        self.word
    }

    /// True while characters are being removed.
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// Apply every step due by `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.words.is_empty() {
            return;
        }
        while self.next_step <= now {
            self.step();
        }
    }

    fn step(&mut self) {
        let len = self.words[self.word].chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    self.next_step += HOLD_DELAY;
                } else {
                    self.next_step += TYPE_DELAY;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                self.next_step += DELETE_DELAY;
            }
            Phase::Deleting => {
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.next_step += TYPE_DELAY;
                } else {
                    self.shown -= 1;
                    self.next_step += DELETE_DELAY;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn types_one_char_per_step() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(vec!["Dev".into()], t0);
        assert_eq!(tw.text(), "");
        tw.tick(t0 + ms(150));
        assert_eq!(tw.text(), "D");
        tw.tick(t0 + ms(449));
        assert_eq!(tw.text(), "De");
        tw.tick(t0 + ms(450));
        assert_eq!(tw.text(), "Dev");
    }

    #[test]
    fn holds_then_deletes() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(vec!["Dev".into()], t0);
        tw.tick(t0 + ms(450));
        tw.tick(t0 + ms(1949));
        assert_eq!(tw.text(), "Dev");
        tw.tick(t0 + ms(1950));
        assert_eq!(tw.text(), "De");
        assert!(tw.is_deleting());
        tw.tick(t0 + ms(2110));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn advances_to_next_word_and_wraps() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(vec!["A".into(), "B".into()], t0);
        // typed at 150, deleted at 1650, next word at 1730
        tw.tick(t0 + ms(1730));
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.text(), "");
        tw.tick(t0 + ms(1880));
        assert_eq!(tw.text(), "B");
        tw.tick(t0 + ms(1880 + 1500 + 80 + 80));
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn multibyte_words_slice_on_char_boundaries() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(vec!["héllo".into()], t0);
        tw.tick(t0 + ms(300));
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn no_words_is_inert() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new(Vec::new(), t0);
        tw.tick(t0 + ms(10_000));
        assert_eq!(tw.text(), "");
    }
}
