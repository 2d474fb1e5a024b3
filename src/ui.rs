use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::{
    config::Config,
    layout::{self, InputBox},
    matching::{Highlight, Tone},
    score::Score,
    session::Session,
};

impl From<Highlight> for Style {
    fn from(highlight: Highlight) -> Self {
        let style = match highlight.tone {
            Tone::Default => Style::default(),
            Tone::Correct => Style::default().fg(Color::Green),
            Tone::Incorrect => Style::default().fg(Color::Red),
        };
        if highlight.emphasized {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

/// Writes `s` at (`x`, `y`) if that cell lies inside `clip`, cutting it at the right edge.
fn put(buf: &mut Buffer, clip: Rect, x: u16, y: u16, s: &str, style: Style) {
    if x < clip.x || y < clip.y || x >= clip.right() || y >= clip.bottom() {
        return;
    }
    buf.set_stringn(x, y, s, usize::from(clip.right() - x), style);
}

/// The screen while a session is running: wrapped passage, input box and echo lines.
#[derive(Debug, Clone, Copy)]
pub struct TypingView<'a> {
    session: &'a Session,
    config: &'a Config,
}

impl<'a> TypingView<'a> {
    pub fn new(session: &'a Session, config: &'a Config) -> Self {
        Self { session, config }
    }

    pub fn input_box(&self, area: Rect) -> InputBox {
        InputBox::centered(
            area,
            self.config.input_box_width,
            self.config.input_box_bottom_offset,
        )
    }

    /// The rows above the input box, inside the margins.
    pub fn text_area(&self, area: Rect) -> Rect {
        let margin = self.config.horizontal_margin;
        let x = area.x.saturating_add(margin);
        let y = area.y.saturating_add(self.config.top_margin);
        let width = area.width.saturating_sub(margin.saturating_mul(2));
        let height = self.input_box(area).top().saturating_sub(y);
        Rect::new(x, y, width, height).intersection(area)
    }

    /// Where the terminal cursor goes: right after the visible part of the input.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let input_box = self.input_box(area);
        let visible = layout::visible_tail(self.session.input().as_str(), input_box.text_capacity());
        input_box.cursor(visible)
    }

    fn render_passage(&self, area: Rect, buf: &mut Buffer) {
        let text_area = self.text_area(area);
        let words = self.session.passage().words();
        let placements = layout::wrap_words(
            words.iter().map(String::as_str),
            usize::from(text_area.width),
        );

        for placement in placements {
            let (Ok(column), Ok(row)) = (
                u16::try_from(placement.column),
                u16::try_from(placement.row),
            ) else {
                break;
            };
            let x = text_area.x.saturating_add(column);
            let y = text_area.y.saturating_add(row);
            if y >= text_area.bottom() {
                break;
            }

            let style = Style::from(self.session.word_highlight(placement.index));
            put(buf, text_area, x, y, &words[placement.index], style);

            let gap = u16::try_from(placement.width).unwrap_or(u16::MAX);
            put(buf, text_area, x.saturating_add(gap), y, " ", Style::default());
        }
    }

    fn render_input_box(&self, area: Rect, buf: &mut Buffer) {
        let input_box = self.input_box(area);
        let style = Style::from(Highlight::new(self.session.live_tone(), false));
        let (left, right) = (input_box.left, input_box.right());
        let (top, row, bottom) = (input_box.top(), input_box.row, input_box.bottom());

        put(buf, area, left, top, "┌", style);
        put(buf, area, left, row, "│", style);
        put(buf, area, left, bottom, "└", style);
        put(buf, area, right, top, "┐", style);
        put(buf, area, right, row, "│", style);
        put(buf, area, right, bottom, "┘", style);
        for x in left + 1..right {
            put(buf, area, x, top, "─", style);
            put(buf, area, x, bottom, "─", style);
        }

        let visible = layout::visible_tail(self.session.input().as_str(), input_box.text_capacity());
        let text_clip = Rect::new(
            input_box.text_column(),
            row,
            right.saturating_sub(input_box.text_column()),
            1,
        );
        put(buf, text_clip.intersection(area), text_clip.x, row, visible, style);
    }

    fn render_echo(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let x = area.x.saturating_add(self.config.horizontal_margin);
        let bottom = area.bottom();
        put(buf, area, x, bottom - 2, self.session.input().as_str(), Style::default());
        put(buf, area, x, bottom - 1, self.session.passage().current_word(), Style::default());
    }
}

impl Widget for TypingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_passage(area, buf);
        self.render_input_box(area, buf);
        if self.config.show_echo {
            self.render_echo(area, buf);
        }
    }
}

/// Final screen: the score centred on the middle row.
#[derive(Debug, Clone, Copy)]
pub struct ResultsView {
    score: Score,
}

impl ResultsView {
    pub fn new(score: Score) -> Self {
        Self { score }
    }
}

impl Widget for ResultsView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(Span::styled(
            self.score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(row, buf);
    }
}
