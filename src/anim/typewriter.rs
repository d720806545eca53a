//! Looping type-and-delete state machine behind the hero headline.
//!
//! The machine only transitions; scheduling lives in the component layer,
//! which asks `delay_ms` how long to wait before the next `step`. The
//! cursor blink is a separate timer entirely and never touches this state.

/// Dwell before deleting a fully typed phrase.
pub const FULL_PAUSE_MS: u32 = 2_000;

/// Dwell after a phrase is fully deleted, before typing the next one.
pub const EMPTY_PAUSE_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    char_count: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            text_index: 0,
            char_count: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    fn current(&self) -> &str {
        self.texts
            .get(self.text_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// The currently visible prefix of the active phrase.
    pub fn visible(&self) -> String {
        self.current().chars().take(self.char_count).collect()
    }

    /// How long to wait before the next `step`, given the base typing speed.
    pub fn delay_ms(&self, speed_ms: u32) -> u32 {
        match self.phase {
            Phase::Typing => speed_ms,
            Phase::Deleting => speed_ms / 2,
            Phase::PausedFull => FULL_PAUSE_MS,
            Phase::PausedEmpty => EMPTY_PAUSE_MS,
        }
    }

    /// Perform one transition. The cycle never terminates; after the last
    /// phrase is deleted it wraps back to the first.
    pub fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.char_count < self.current_len() {
                    self.char_count += 1;
                }
                if self.char_count >= self.current_len() {
                    self.phase = Phase::PausedFull;
                }
            }
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.char_count > 0 {
                    self.char_count -= 1;
                }
                if self.char_count == 0 {
                    self.phase = Phase::PausedEmpty;
                }
            }
            Phase::PausedEmpty => {
                if !self.texts.is_empty() {
                    self.text_index = (self.text_index + 1) % self.texts.len();
                }
                self.phase = Phase::Typing;
            }
        }
    }

    /// Restart from the first phrase with nothing typed.
    pub fn reset(&mut self) {
        self.text_index = 0;
        self.char_count = 0;
        self.phase = Phase::Typing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(texts: &[&str]) -> Typewriter {
        Typewriter::new(texts.iter().map(|t| (*t).to_string()).collect())
    }

    #[test]
    fn types_pauses_deletes_then_advances() {
        let mut tw = machine(&["AI", "Bot"]);

        tw.step();
        assert_eq!(tw.visible(), "A");
        tw.step();
        assert_eq!(tw.visible(), "AI");
        assert_eq!(tw.phase(), Phase::PausedFull);

        tw.step();
        assert_eq!(tw.phase(), Phase::Deleting);
        tw.step();
        assert_eq!(tw.visible(), "A");
        tw.step();
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), Phase::PausedEmpty);

        tw.step();
        assert_eq!(tw.text_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);
        tw.step();
        assert_eq!(tw.visible(), "B");
    }

    #[test]
    fn char_count_stays_within_bounds_forever() {
        let mut tw = machine(&["AI", "Bot", "Care"]);
        for _ in 0..500 {
            tw.step();
            let len = tw.texts[tw.text_index()].chars().count();
            assert!(tw.char_count <= len);
            assert!(tw.visible().chars().count() <= len);
        }
    }

    #[test]
    fn wraps_around_the_phrase_list() {
        let mut tw = machine(&["AI", "Bot"]);
        // Two full type/delete cycles bring the index back to the start.
        for _ in 0..2 {
            while tw.phase() != Phase::PausedEmpty {
                tw.step();
            }
            tw.step();
        }
        assert_eq!(tw.text_index(), 0);
    }

    #[test]
    fn delays_follow_the_phase() {
        let mut tw = machine(&["Hi"]);
        assert_eq!(tw.delay_ms(80), 80);
        tw.step();
        tw.step();
        assert_eq!(tw.phase(), Phase::PausedFull);
        assert_eq!(tw.delay_ms(80), FULL_PAUSE_MS);
        tw.step();
        assert_eq!(tw.delay_ms(80), 40);
    }

    #[test]
    fn reset_restarts_at_the_first_phrase() {
        let mut tw = machine(&["AI", "Bot"]);
        for _ in 0..7 {
            tw.step();
        }
        tw.reset();
        assert_eq!(tw.text_index(), 0);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn empty_phrase_cycles_without_typing() {
        let mut tw = machine(&["", "Ok"]);
        tw.step();
        assert_eq!(tw.phase(), Phase::PausedFull);
        assert_eq!(tw.visible(), "");
        tw.step();
        tw.step();
        assert_eq!(tw.phase(), Phase::PausedEmpty);
        tw.step();
        assert_eq!(tw.text_index(), 1);
    }

    #[test]
    fn multibyte_phrases_count_characters_not_bytes() {
        let mut tw = machine(&["héllo"]);
        for _ in 0..5 {
            tw.step();
        }
        assert_eq!(tw.visible(), "héllo");
        assert_eq!(tw.phase(), Phase::PausedFull);
    }
}
