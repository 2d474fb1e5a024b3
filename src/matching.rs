use crate::{input::InputBuffer, passage::Passage};

/// Colour class of a cell, mapped to a concrete terminal style by the ui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub tone: Tone,
    pub emphasized: bool,
}

impl Highlight {
    pub const PLAIN: Self = Self {
        tone: Tone::Default,
        emphasized: false,
    };

    pub fn new(tone: Tone, emphasized: bool) -> Self {
        Self { tone, emphasized }
    }
}

/// Tone for live feedback on the current word.
pub fn tone(passage: &Passage, input: &InputBuffer) -> Tone {
    if is_prefix_match(passage, input) {
        Tone::Correct
    } else {
        Tone::Incorrect
    }
}

/// Whether what has been typed so far could still become the current word.
pub fn is_prefix_match(passage: &Passage, input: &InputBuffer) -> bool {
    passage.current_word().starts_with(input.as_str())
}

pub fn is_exact_match(passage: &Passage, input: &InputBuffer) -> bool {
    passage.current_word() == input.as_str()
}

/// The last word is typed exactly. A passage without words is complete from the start.
pub fn is_session_complete(passage: &Passage, input: &InputBuffer) -> bool {
    if passage.word_count() == 0 {
        return true;
    }
    passage.is_last_word() && is_exact_match(passage, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputBuffer {
        let mut input = InputBuffer::new();
        s.chars().for_each(|c| input.push(c));
        input
    }

    #[test]
    fn empty_input_is_a_prefix_of_any_word() {
        let passage = Passage::new("cat");

        assert!(is_prefix_match(&passage, &InputBuffer::new()));
        assert_eq!(tone(&passage, &InputBuffer::new()), Tone::Correct);
    }

    #[test]
    fn partial_word_is_prefix_but_not_exact() {
        let passage = Passage::new("cat");
        let input = typed("ca");

        assert!(is_prefix_match(&passage, &input));
        assert!(!is_exact_match(&passage, &input));
        assert!(!is_session_complete(&passage, &input));
    }

    #[test]
    fn mismatch_flips_tone() {
        let passage = Passage::new("cat");
        let input = typed("cx");

        assert!(!is_prefix_match(&passage, &input));
        assert!(!is_exact_match(&passage, &input));
        assert_eq!(tone(&passage, &input), Tone::Incorrect);
    }

    #[test]
    fn trailing_space_is_a_mismatch() {
        let passage = Passage::new("cat dog");

        assert!(!is_prefix_match(&passage, &typed("ca ")));
        assert!(!is_prefix_match(&passage, &typed("cat ")));
    }

    #[test]
    fn matching_is_case_and_punctuation_sensitive() {
        let passage = Passage::new("H.M.S.");

        assert!(!is_exact_match(&passage, &typed("HMS")));
        assert!(!is_exact_match(&passage, &typed("h.m.s.")));
        assert!(is_exact_match(&passage, &typed("H.M.S.")));
    }

    #[test]
    fn completion_needs_the_last_word() {
        let mut passage = Passage::new("cat dog");

        assert!(!is_session_complete(&passage, &typed("cat")));
        passage.advance();
        assert!(!is_session_complete(&passage, &typed("do")));
        assert!(is_session_complete(&passage, &typed("dog")));
    }

    #[test]
    fn empty_passage_is_complete() {
        let passage = Passage::new("   ");

        assert!(is_session_complete(&passage, &InputBuffer::new()));
    }

    #[test]
    fn highlight_defaults_to_plain() {
        assert_eq!(Highlight::default(), Highlight::PLAIN);
        assert_eq!(
            Highlight::new(Tone::Incorrect, true),
            Highlight {
                tone: Tone::Incorrect,
                emphasized: true
            }
        );
    }
}
