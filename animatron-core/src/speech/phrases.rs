//! Phrase catalog and the phrase being spoken

use heapless::String;

use crate::config::MAX_PHRASE_LEN;

/// Bounded storage for the active phrase
pub type PhraseText = String<MAX_PHRASE_LEN>;

/// Stock phrases
pub const DEFAULT_PHRASES: &[&str] = &[
    "HELLO THERE.",
    "WELCOME, WEARY TRAVELER!",
    "I SEE YOU.",
    "DO NOT BE AFRAID.",
    "WHO DARES ENTER MY LAIR?",
    "COME CLOSER, I WILL NOT BITE.",
    "IT HAS BEEN A LONG NIGHT.",
    "BEWARE THE MIDNIGHT HOUR!",
];

/// Ordered list of phrases to choose from
#[derive(Debug, Clone, Copy)]
pub struct PhraseCatalog<'a> {
    phrases: &'a [&'a str],
}

impl<'a> PhraseCatalog<'a> {
    /// Wrap a phrase list
    pub const fn new(phrases: &'a [&'a str]) -> Self {
        Self { phrases }
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Check if the catalog has no phrases
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Get a phrase by index
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.phrases.get(index).copied()
    }
}

impl Default for PhraseCatalog<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES)
    }
}

/// The phrase being spoken and the position within it
///
/// Empty text means idle.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhraseState {
    text: PhraseText,
    /// Byte offset of the next character
    cursor: usize,
}

impl PhraseState {
    /// Create an idle phrase state
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Check if nothing is being spoken
    pub fn is_idle(&self) -> bool {
        self.text.is_empty()
    }

    /// Active phrase text
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Byte offset of the next character to speak
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if every character has been consumed
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Start speaking `text` from the beginning
    ///
    /// Text longer than [`MAX_PHRASE_LEN`] bytes is cut at the last whole
    /// character that fits. Returns true if the text was truncated.
    pub fn load(&mut self, text: &str) -> bool {
        self.text.clear();
        self.cursor = 0;

        for c in text.chars() {
            if self.text.push(c).is_err() {
                return true;
            }
        }
        false
    }

    /// Take the next character, advancing the cursor
    pub fn advance(&mut self) -> Option<char> {
        let c = self.text[self.cursor..].chars().next()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    /// Go idle
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeated(c: char, n: usize) -> String<128> {
        let mut s = String::new();
        for _ in 0..n {
            s.push(c).unwrap();
        }
        s
    }

    #[test]
    fn test_default_catalog() {
        let catalog = PhraseCatalog::default();
        assert_eq!(catalog.len(), DEFAULT_PHRASES.len());
        assert_eq!(catalog.get(0), Some("HELLO THERE."));
        assert_eq!(catalog.get(catalog.len()), None);
        for phrase in DEFAULT_PHRASES {
            assert!(phrase.len() <= MAX_PHRASE_LEN);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PhraseCatalog::new(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn test_load_and_advance() {
        let mut phrase = PhraseState::new();
        assert!(phrase.is_idle());

        assert!(!phrase.load("HI!"));
        assert!(!phrase.is_idle());
        assert_eq!(phrase.advance(), Some('H'));
        assert_eq!(phrase.advance(), Some('I'));
        assert!(!phrase.is_finished());
        assert_eq!(phrase.advance(), Some('!'));
        assert!(phrase.is_finished());
        assert_eq!(phrase.advance(), None);

        phrase.clear();
        assert!(phrase.is_idle());
        assert_eq!(phrase.cursor(), 0);
    }

    #[test]
    fn test_reload_restarts() {
        let mut phrase = PhraseState::new();
        phrase.load("ABC");
        phrase.advance();
        phrase.load("XY");
        assert_eq!(phrase.cursor(), 0);
        assert_eq!(phrase.advance(), Some('X'));
    }

    #[test]
    fn test_long_phrase_truncated() {
        let long = repeated('A', MAX_PHRASE_LEN + 10);
        let mut phrase = PhraseState::new();
        assert!(phrase.load(&long));
        assert_eq!(phrase.text().len(), MAX_PHRASE_LEN);

        let mut count = 0;
        while phrase.advance().is_some() {
            count += 1;
        }
        assert_eq!(count, MAX_PHRASE_LEN);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is two bytes; an odd budget leaves a byte that cannot hold it
        let mut text = repeated('A', MAX_PHRASE_LEN - 1);
        text.push('é').unwrap();
        let mut phrase = PhraseState::new();
        assert!(phrase.load(&text));
        assert_eq!(phrase.text().len(), MAX_PHRASE_LEN - 1);
    }

    #[test]
    fn test_exact_fit_not_truncated() {
        let exact = repeated('B', MAX_PHRASE_LEN);
        let mut phrase = PhraseState::new();
        assert!(!phrase.load(&exact));
        assert_eq!(phrase.text().len(), MAX_PHRASE_LEN);
    }
}
