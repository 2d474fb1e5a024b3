/// The text being typed, split into whitespace-delimited words.
///
/// Words are opaque tokens: punctuation stays attached and case is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    raw_text: String,
    words: Vec<String>,
    current: usize,
}

impl Passage {
    pub fn new(text: &str) -> Self {
        Self {
            raw_text: text.to_string(),
            words: text.split_whitespace().map(str::to_string).collect(),
            current: 0,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of characters in the raw text, whitespace included.
    pub fn char_count(&self) -> usize {
        self.raw_text.chars().count()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The word being typed, or `""` once every word has been passed.
    pub fn current_word(&self) -> &str {
        self.words
            .get(self.current)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Moves on to the next word. The index stops at `word_count()`.
    pub fn advance(&mut self) -> Option<&str> {
        if self.current < self.words.len() {
            self.current += 1;
        }
        self.words.get(self.current).map(String::as_str)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.words.len()
    }

    pub fn is_last_word(&self) -> bool {
        !self.words.is_empty() && self.current == self.words.len() - 1
    }
}
