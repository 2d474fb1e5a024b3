/// Keystrokes typed toward the current word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    content: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.content.push(c);
    }

    /// Drops the last character. Does nothing on an empty buffer.
    pub fn backspace(&mut self) {
        self.content.pop();
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_grows_by_one_char() {
        let mut input = InputBuffer::new();

        for (i, c) in "a日é ".chars().enumerate() {
            input.push(c);
            assert_eq!(input.len(), i + 1);
        }
        assert_eq!(input.as_str(), "a日é ");
    }

    #[test]
    fn backspace_removes_a_whole_char() {
        let mut input = InputBuffer::new();
        input.push('x');
        input.push('日');

        input.backspace();
        assert_eq!(input.as_str(), "x");
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn backspace_on_empty_is_a_noop() {
        let mut input = InputBuffer::new();

        input.backspace();
        input.backspace();

        assert!(input.is_empty());
        assert_eq!(input.len(), 0);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut input = InputBuffer::new();
        input.push('h');
        input.push('i');

        input.clear();

        assert!(input.is_empty());
        assert_eq!(input.as_str(), "");
    }
}
