//! Terminal geometry for the typing screen.
//!
//! Everything here is pure: given words, widths and an area it works out
//! where things go. Drawing happens in [`crate::ui`].

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthChar;

/// Columns occupied by `c`: 0 for combining and control chars, 2 for wide CJK, else 1.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Sum of [`char_width`] over `s`.
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Where one word of the passage lands, relative to the text area origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPlacement {
    pub index: usize,
    pub column: usize,
    pub row: usize,
    pub width: usize,
}

/// Greedy word wrap. Each word is followed by one separating cell; a word
/// that would not fit (separator included) starts a new row.
pub fn wrap_words<'a, I>(words: I, width: usize) -> Vec<WordPlacement>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut column = 0;
    let mut row = 0;

    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let word_width = str_width(word);
            if column + word_width + 1 > width {
                column = 0;
                row += 1;
            }
            let placement = WordPlacement {
                index,
                column,
                row,
                width: word_width,
            };
            column += word_width + 1;
            placement
        })
        .collect()
}

/// Bordered one-line input box. Borders sit on `left` and `left + width`,
/// one row above and below `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBox {
    pub left: u16,
    pub row: u16,
    pub width: u16,
}

/// Columns between the left border and the first typed character.
const TEXT_INSET: u16 = 2;

impl InputBox {
    /// Centres a box of `width` horizontally with its text row `bottom_offset`
    /// rows above the bottom of `area`. Shrinks to fit narrow terminals.
    pub fn centered(area: Rect, width: u16, bottom_offset: u16) -> Self {
        let width = width.min(area.width.saturating_sub(1));
        let left = area.x + area.width.saturating_sub(width) / 2;
        let row = area.bottom().saturating_sub(bottom_offset).max(area.y + 1);
        Self { left, row, width }
    }

    pub fn right(&self) -> u16 {
        self.left + self.width
    }

    pub fn top(&self) -> u16 {
        self.row.saturating_sub(1)
    }

    pub fn bottom(&self) -> u16 {
        self.row + 1
    }

    pub fn text_column(&self) -> u16 {
        self.left + TEXT_INSET
    }

    /// Widest run of input shown, leaving the cursor a cell before the right border.
    pub fn text_capacity(&self) -> usize {
        usize::from(self.width.saturating_sub(TEXT_INSET + 1))
    }

    /// Terminal cursor position right after `visible`.
    pub fn cursor(&self, visible: &str) -> Position {
        let offset = u16::try_from(str_width(visible)).unwrap_or(u16::MAX);
        Position::new(self.text_column().saturating_add(offset), self.row)
    }
}

/// Longest suffix of `input` whose display width fits in `max_width`.
pub fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = input.len();

    for (idx, c) in input.char_indices().rev() {
        let w = char_width(c);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }

    &input[start..]
}
